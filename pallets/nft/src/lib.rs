#![cfg_attr(not(feature = "std"), no_std)]

pub use nft::*;



mod functions;
mod rpc;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use pallet_utils::{extrinsic_procedure, AssetClassId, UnitId};
use sp_std::prelude::*;

#[frame_support::pallet]
pub mod nft {
	use super::*;

	/// Configure the pallet by specifying the parameters and types on which it depends.
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Because this pallet emits events, it depends on the runtime's definition of an event.
		type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;
	}

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	/// Owner of every existing unit, keyed by asset class and unit id.
	#[pallet::storage]
	#[pallet::getter(fn unit_owners)]
	pub type UnitOwners<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		AssetClassId,
		Twox64Concat,
		UnitId,
		T::AccountId,
		OptionQuery,
	>;

	/// How many units of an asset class each user owns.
	#[pallet::storage]
	#[pallet::getter(fn owned_count)]
	pub type OwnedCount<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		T::AccountId,
		Twox64Concat,
		AssetClassId,
		u32,
		ValueQuery,
	>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		pub units: Vec<(AssetClassId, UnitId, T::AccountId)>,
	}
	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			GenesisConfig {
				units: Default::default(),
			}
		}
	}
	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			for (asset_class, unit_id, owner) in self.units.iter() {
				if let Err(e) = Pallet::<T>::check_mint(*asset_class, *unit_id) {
					log::error!("genesis unit {}/{} skipped: {:?}", asset_class, unit_id, e);
					continue;
				}
				Pallet::<T>::mint_inner(*asset_class, *unit_id, owner);
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Params:
		/// 1. Asset class
		/// 2. Unit id
		/// 3. Owner account
		Minted(AssetClassId, UnitId, T::AccountId),

		/// Params:
		/// 1. Asset class
		/// 2. Unit id
		/// 3. From account
		/// 4. To account
		Transferred(AssetClassId, UnitId, T::AccountId, T::AccountId),
	}

	// Errors inform users that something went wrong.
	#[pallet::error]
	pub enum Error<T> {
		/// A unit with the same asset class and id has been minted.
		UnitAlreadyExists,
		/// Could not find the unit in the registry.
		UnitNotFound,
		/// Trying to operate a unit not belongs to the user.
		NotUnitOwner,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		#[pallet::weight(195_000_000)]
		pub fn mint(
			sender: OriginFor<T>,
			asset_class: AssetClassId,
			unit_id: UnitId,
			owner: T::AccountId,
		) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Self::check_mint(asset_class, unit_id),
				|_| {
					Self::mint_inner(asset_class, unit_id, &owner);
					Self::deposit_event(Event::Minted(asset_class, unit_id, owner));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn transfer(
			sender: OriginFor<T>,
			asset_class: AssetClassId,
			unit_id: UnitId,
			to: T::AccountId,
		) -> DispatchResult {
			let who = ensure_signed(sender)?;

			extrinsic_procedure(
				&who,
				|who| Self::check_belongs(asset_class, unit_id, who),
				|who| {
					Self::transfer_inner(asset_class, unit_id, who, &to);
					Self::deposit_event(Event::Transferred(asset_class, unit_id, who.clone(), to));
				},
			)
		}
	}
}
