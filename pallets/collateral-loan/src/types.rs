use codec::{Decode, Encode};
use pallet_utils::{AssetClassId, CurrencyId, UnitId};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

#[derive(Encode, Decode, Clone, Copy, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub enum LoanStatus {
	Open,
	Closed,
}

/// A loan originated against one collateral unit.
///
/// `interest` and `due_at` are fixed when the loan is originated, only the overdue penalty is
/// computed at settlement.
#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Loan<AccountId, Balance> {
	pub borrower: AccountId,
	pub collateral_asset: AssetClassId,
	pub collateral_id: UnitId,
	pub currency: CurrencyId,
	pub principal: Balance,
	/// Loan term in seconds.
	pub duration: u64,
	pub interest: Balance,
	/// Unix timestamp in seconds when the loan was originated.
	pub start_at: u64,
	/// Unix timestamp in seconds after which overdue penalty accrues.
	pub due_at: u64,
	pub status: LoanStatus,
}

impl<AccountId, Balance> Loan<AccountId, Balance> {
	pub fn is_open(&self) -> bool {
		self.status == LoanStatus::Open
	}
}
