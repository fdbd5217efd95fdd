use crate::types::*;
use frame_support::{dispatch::DispatchResult, Parameter};
use sp_runtime::{
	traits::{AtLeast32BitUnsigned, MaybeSerializeDeserialize, Member},
	Percent,
};

/// Operations of the fungible token ledger used to disburse and collect loans.
pub trait FungibleOperations {
	type AccountId;
	/// The balance of an account in any currency.
	type Balance: Parameter
		+ Member
		+ AtLeast32BitUnsigned
		+ Default
		+ Copy
		+ MaybeSerializeDeserialize;

	/// Spendable amount of `currency` held by `who`.
	fn balance_of(who: &Self::AccountId, currency: CurrencyId) -> Self::Balance;

	/// Move `amount` of `currency` from `from` to `to`.
	///
	/// Either the whole amount moves or nothing changes and an error is returned.
	fn transfer(
		currency: CurrencyId,
		from: &Self::AccountId,
		to: &Self::AccountId,
		amount: Self::Balance,
	) -> DispatchResult;
}

/// Operations of the non-fungible asset registry that holds collateral units.
pub trait NonFungibleOperations {
	type AccountId;

	/// Number of units of `asset_class` owned by `who`.
	fn balance_of(who: &Self::AccountId, asset_class: AssetClassId) -> u32;

	/// Current owner of the unit, `None` if the unit does not exist.
	fn owner_of(asset_class: AssetClassId, unit_id: UnitId) -> Option<Self::AccountId>;

	/// Move the unit from `from` to `to`, `from` must be the current owner.
	fn transfer(
		asset_class: AssetClassId,
		from: &Self::AccountId,
		to: &Self::AccountId,
		unit_id: UnitId,
	) -> DispatchResult;
}

/// Lending parameters governed outside of the loan core.
pub trait LoanConfiguration {
	type Balance;

	/// Whether `asset_class` is on the accepted-collateral allowlist.
	fn is_accepted(asset_class: AssetClassId) -> bool;

	/// Yearly interest rate charged against loans backed by `asset_class`.
	fn collateral_rate(asset_class: AssetClassId) -> Percent;

	/// Largest principal that may be borrowed against one unit of `asset_class`.
	fn max_loan_amount(asset_class: AssetClassId) -> Self::Balance;

	/// The currency loans are disbursed and repaid in.
	fn loan_currency() -> CurrencyId;
}
