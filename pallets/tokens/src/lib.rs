#![cfg_attr(not(feature = "std"), no_std)]

pub use tokens::*;

#[cfg(test)]
mod mock;


mod functions;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use pallet_utils::{extrinsic_procedure, CurrencyId};
use sp_runtime::traits::{
	AtLeast32BitUnsigned, CheckedAdd, MaybeSerializeDeserialize, Member, Saturating, Zero,
};
use sp_std::prelude::*;

#[frame_support::pallet]
pub mod tokens {
	use super::*;

	/// Configure the pallet by specifying the parameters and types on which it depends.
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Because this pallet emits events, it depends on the runtime's definition of an event.
		type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;
		/// The balance of an account.
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

	/// Balance of every (currency, account) pair.
	#[pallet::storage]
	#[pallet::getter(fn accounts)]
	pub type Accounts<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		CurrencyId,
		Twox64Concat,
		T::AccountId,
		T::Balance,
		ValueQuery,
	>;

	#[pallet::storage]
	#[pallet::getter(fn total_issuance)]
	pub type TotalIssuance<T: Config> =
		StorageMap<_, Twox64Concat, CurrencyId, T::Balance, ValueQuery>;

	/// Accounts that can not send the given currency until thawed.
	#[pallet::storage]
	#[pallet::getter(fn frozen)]
	pub type Frozen<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		CurrencyId,
		Twox64Concat,
		T::AccountId,
		(),
		ValueQuery,
	>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		pub balances: Vec<(CurrencyId, T::AccountId, T::Balance)>,
	}
	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			GenesisConfig {
				balances: Default::default(),
			}
		}
	}
	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			for (currency, who, amount) in self.balances.iter() {
				if let Err(e) = Pallet::<T>::check_mint(*currency, who, *amount) {
					log::error!("genesis token balance skipped: {:?}", e);
					continue;
				}
				Pallet::<T>::mint_inner(*currency, who, *amount);
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Fired after transfer successfully, event parameters:
		/// 1. Currency
		/// 2. From account
		/// 3. To account
		/// 4. Transfer amount
		Transferred(CurrencyId, T::AccountId, T::AccountId, T::Balance),

		/// Params:
		/// 1. Currency
		/// 2. Receiver account
		/// 3. Minted amount
		Minted(CurrencyId, T::AccountId, T::Balance),

		Frozen(CurrencyId, T::AccountId),

		Thawed(CurrencyId, T::AccountId),
	}

	// Errors inform users that something went wrong.
	#[pallet::error]
	pub enum Error<T> {
		/// Sender has not enough balance of the currency.
		InsufficientBalance,
		/// Sender account is frozen for the currency.
		AccountFrozen,
		/// Receiver balance or total issuance would overflow.
		BalanceOverflow,
		/// Amount should larger than zero.
		ZeroAmount,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		#[pallet::weight(195_000_000)]
		pub fn transfer(
			sender: OriginFor<T>,
			currency: CurrencyId,
			to: T::AccountId,
			amount: T::Balance,
		) -> DispatchResult {
			let who = ensure_signed(sender)?;

			extrinsic_procedure(
				&who,
				|who| Self::check_transfer(currency, who, &to, amount),
				|who| {
					Self::transfer_inner(currency, who, &to, amount);
					Self::deposit_event(Event::Transferred(currency, who.clone(), to, amount));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn mint(
			sender: OriginFor<T>,
			currency: CurrencyId,
			to: T::AccountId,
			amount: T::Balance,
		) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Self::check_mint(currency, &to, amount),
				|_| {
					Self::mint_inner(currency, &to, amount);
					Self::deposit_event(Event::Minted(currency, to, amount));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn freeze(
			sender: OriginFor<T>,
			currency: CurrencyId,
			who: T::AccountId,
		) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Ok(()),
				|_| {
					Frozen::<T>::insert(currency, &who, ());
					Self::deposit_event(Event::Frozen(currency, who));
				},
			)
		}

		#[pallet::weight(195_000_000)]
		pub fn thaw(sender: OriginFor<T>, currency: CurrencyId, who: T::AccountId) -> DispatchResult {
			let root = ensure_root(sender)?;

			extrinsic_procedure(
				&root,
				|_| Ok(()),
				|_| {
					Frozen::<T>::remove(currency, &who);
					Self::deposit_event(Event::Thawed(currency, who));
				},
			)
		}
	}
}
