#![cfg_attr(not(feature = "std"), no_std)]

pub use collateral_loan::*;

#[cfg(test)]
mod mock;


mod functions;
mod rpc;
mod types;

use frame_support::{pallet_prelude::*, traits::UnixTime, transactional};
use frame_system::pallet_prelude::*;
use pallet_utils::{
	fallible_extrinsic_procedure, AssetClassId, CurrencyId, FungibleOperations, LoanConfiguration,
	LoanIndex, NonFungibleOperations, UnitId,
};
use sp_runtime::Percent;
use sp_std::prelude::*;
pub use types::*;

/// The balance type of this module.
pub type BalanceOf<T> = <<T as Config>::Tokens as FungibleOperations>::Balance;

#[frame_support::pallet]
pub mod collateral_loan {
	use super::*;

	/// Configure the pallet by specifying the parameters and types on which it depends.
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Because this pallet emits events, it depends on the runtime's definition of an event.
		type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;
		/// Ledger loans are disbursed from and repaid to.
		type Tokens: FungibleOperations<AccountId = Self::AccountId>;
		/// Registry of the collateral units.
		type Nft: NonFungibleOperations<AccountId = Self::AccountId>;
		/// Accepted collaterals, their rates and loan caps.
		type LoanConfig: LoanConfiguration<Balance = BalanceOf<Self>>;
		type TimeProvider: UnixTime;
		/// Penalty charged per whole overdue day, as a share of the principal.
		#[pallet::constant]
		type OverduePenaltyRate: Get<Percent>;
	}

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	/// Account that keeps locked collateral and funds the loans.
	#[pallet::storage]
	#[pallet::getter(fn operation_account)]
	pub type OperationAccount<T: Config> = StorageValue<_, T::AccountId, ValueQuery>;

	/// Number of units of an asset class each user has locked as collateral.
	#[pallet::storage]
	#[pallet::getter(fn collateral_ledger)]
	pub type CollateralLedger<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		T::AccountId,
		Twox64Concat,
		AssetClassId,
		u32,
		ValueQuery,
	>;

	/// Which loan holds a unit in custody.
	#[pallet::storage]
	#[pallet::getter(fn collateral_custody)]
	pub type CollateralCustody<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		AssetClassId,
		Twox64Concat,
		UnitId,
		(T::AccountId, LoanIndex),
		OptionQuery,
	>;

	/// Loans of each user, closed loans are kept.
	#[pallet::storage]
	#[pallet::getter(fn user_loans)]
	pub type UserLoans<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		T::AccountId,
		Twox64Concat,
		LoanIndex,
		Loan<T::AccountId, BalanceOf<T>>,
		OptionQuery,
	>;

	#[pallet::storage]
	#[pallet::getter(fn next_loan_index)]
	pub type NextLoanIndex<T: Config> =
		StorageMap<_, Twox64Concat, T::AccountId, LoanIndex, ValueQuery>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		pub operation_account: T::AccountId,
	}
	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			GenesisConfig {
				operation_account: Default::default(),
			}
		}
	}
	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			OperationAccount::<T>::set(self.operation_account.clone());
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Fired after a loan is originated, event parameters:
		/// 1. Borrower
		/// 2. Collateral asset class
		/// 3. Collateral unit id
		/// 4. Loan currency
		/// 5. Principal
		/// 6. Duration in seconds
		/// 7. Interest
		/// 8. Timestamp of origination
		/// 9. Loan index
		LoanOriginated(
			T::AccountId,
			AssetClassId,
			UnitId,
			CurrencyId,
			BalanceOf<T>,
			u64,
			BalanceOf<T>,
			u64,
			LoanIndex,
		),

		/// Fired after a loan is repaid, event parameters:
		/// 1. Borrower
		/// 2. Collateral asset class
		/// 3. Collateral unit id
		/// 4. Loan currency
		/// 5. Principal
		/// 6. Duration in seconds
		/// 7. Interest
		/// 8. Timestamp of settlement
		/// 9. Loan index
		/// 10. Overdue penalty
		LoanRepaid(
			T::AccountId,
			AssetClassId,
			UnitId,
			CurrencyId,
			BalanceOf<T>,
			u64,
			BalanceOf<T>,
			u64,
			LoanIndex,
			BalanceOf<T>,
		),
	}

	// Errors inform users that something went wrong.
	#[pallet::error]
	pub enum Error<T> {
		/// Caller is not a signed, non-null account.
		InvalidCaller,
		/// Principal is larger than the cap of the collateral asset class.
		MaxLoanAmountExceeded,
		/// Asset class is not accepted as collateral.
		UnacceptedCollateral,
		/// User holds no unit of the collateral asset class.
		InsufficientCollateralBalance,
		/// Collateral unit not belongs to the user.
		NotOwner,
		/// No loan at the given index for the user.
		LoanNotFound,
		/// Loan has been repaid already.
		LoanAlreadyClosed,
		/// User have not enough balance to repay the loan.
		InsufficientTokenBalance,
		/// Moving tokens or collateral failed.
		TransferFailed,
		/// Interest, penalty or due time overflowed.
		ArithmeticOverflow,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		#[pallet::weight(195_000_000)]
		#[transactional]
		pub fn request_loan(
			sender: OriginFor<T>,
			collateral_asset: AssetClassId,
			principal: BalanceOf<T>,
			duration: u64,
			collateral_id: UnitId,
		) -> DispatchResult {
			let who = Self::ensure_valid_caller(sender)?;

			fallible_extrinsic_procedure(
				&who,
				|who| Self::check_before_request(who, collateral_asset, principal, collateral_id),
				|who| {
					Self::originate_loan(who, collateral_asset, principal, duration, collateral_id)
				},
			)
		}

		#[pallet::weight(195_000_000)]
		#[transactional]
		pub fn repay_loan(sender: OriginFor<T>, loan_index: LoanIndex) -> DispatchResult {
			let who = Self::ensure_valid_caller(sender)?;

			fallible_extrinsic_procedure(
				&who,
				|who| Self::check_before_repay(who, loan_index),
				|who| Self::settle_loan(who, loan_index),
			)
		}
	}
}
