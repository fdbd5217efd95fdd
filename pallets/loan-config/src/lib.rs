#![cfg_attr(not(feature = "std"), no_std)]

pub use loan_config::*;

#[cfg(test)]
mod mock;


mod functions;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use pallet_utils::{extrinsic_procedure, AssetClassId, CurrencyId};
use sp_runtime::{
	traits::{AtLeast32BitUnsigned, MaybeSerializeDeserialize, Member},
	Percent,
};
use sp_std::prelude::*;

#[frame_support::pallet]
pub mod loan_config {
	use super::*;

	/// Configure the pallet by specifying the parameters and types on which it depends.
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Because this pallet emits events, it depends on the runtime's definition of an event.
		type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;
		/// The balance type loan caps are expressed in, should match the token ledger.
		type Balance: Parameter
			+ Member
			+ AtLeast32BitUnsigned
			+ Default
			+ Copy
			+ MaybeSerializeDeserialize;
	}

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	/// Asset classes that may be pledged as collateral.
	#[pallet::storage]
	#[pallet::getter(fn accepted_collaterals)]
	pub type AcceptedCollaterals<T: Config> =
		StorageMap<_, Twox64Concat, AssetClassId, (), ValueQuery>;

	/// Yearly interest rate per accepted asset class.
	#[pallet::storage]
	#[pallet::getter(fn collateral_rates)]
	pub type CollateralRates<T: Config> =
		StorageMap<_, Twox64Concat, AssetClassId, Percent, ValueQuery>;

	/// Largest principal per loan for each accepted asset class.
	#[pallet::storage]
	#[pallet::getter(fn max_loan_amounts)]
	pub type MaxLoanAmounts<T: Config> =
		StorageMap<_, Twox64Concat, AssetClassId, T::Balance, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn loan_currency)]
	pub type LoanCurrency<T: Config> = StorageValue<_, CurrencyId, ValueQuery>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		pub loan_currency: CurrencyId,
		pub collaterals: Vec<(AssetClassId, Percent, T::Balance)>,
	}
	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			GenesisConfig {
				loan_currency: Default::default(),
				collaterals: Default::default(),
			}
		}
	}
	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			LoanCurrency::<T>::set(self.loan_currency);
			for (asset_class, rate, max_amount) in self.collaterals.iter() {
				Pallet::<T>::insert_collateral(*asset_class, *rate, *max_amount);
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Fired after an asset class joined the allowlist, event parameters:
		/// 1. Asset class
		/// 2. Yearly interest rate
		/// 3. Max loan amount
		CollateralAccepted(AssetClassId, Percent, T::Balance),

		/// Fired after an asset class left the allowlist.
		CollateralRemoved(AssetClassId),

		/// Params:
		/// 1. Asset class
		/// 2. New yearly interest rate
		CollateralRateChanged(AssetClassId, Percent),

		/// Params:
		/// 1. Asset class
		/// 2. New max loan amount
		MaxLoanAmountChanged(AssetClassId, T::Balance),

		LoanCurrencyChanged(CurrencyId),
	}

	// Errors inform users that something went wrong.
	#[pallet::error]
	pub enum Error<T> {
		/// The asset class is already on the allowlist.
		CollateralAlreadyAccepted,
		/// The asset class is not on the allowlist.
		CollateralNotAccepted,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		#[pallet::weight(195_000_000)]
		pub fn accept_collateral(
			sender: OriginFor<T>,
			asset_class: AssetClassId,
			rate: Percent,
			max_loan_amount: T::Balance,
		) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| {
					ensure!(
						!AcceptedCollaterals::<T>::contains_key(asset_class),
						Error::<T>::CollateralAlreadyAccepted
					);
					Ok(())
				},
				|_| {
					Self::insert_collateral(asset_class, rate, max_loan_amount);
					Self::deposit_event(Event::CollateralAccepted(
						asset_class,
						rate,
						max_loan_amount,
					));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn remove_collateral(sender: OriginFor<T>, asset_class: AssetClassId) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Self::check_accepted(asset_class),
				|_| {
					AcceptedCollaterals::<T>::remove(asset_class);
					CollateralRates::<T>::remove(asset_class);
					MaxLoanAmounts::<T>::remove(asset_class);
					Self::deposit_event(Event::CollateralRemoved(asset_class));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn set_collateral_rate(
			sender: OriginFor<T>,
			asset_class: AssetClassId,
			rate: Percent,
		) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Self::check_accepted(asset_class),
				|_| {
					CollateralRates::<T>::insert(asset_class, rate);
					Self::deposit_event(Event::CollateralRateChanged(asset_class, rate));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn set_max_loan_amount(
			sender: OriginFor<T>,
			asset_class: AssetClassId,
			max_loan_amount: T::Balance,
		) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Self::check_accepted(asset_class),
				|_| {
					MaxLoanAmounts::<T>::insert(asset_class, max_loan_amount);
					Self::deposit_event(Event::MaxLoanAmountChanged(asset_class, max_loan_amount));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn set_loan_currency(sender: OriginFor<T>, currency: CurrencyId) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Ok(()),
				|_| {
					LoanCurrency::<T>::set(currency);
					Self::deposit_event(Event::LoanCurrencyChanged(currency));
				},
			)
		}
	}
}
