use super::*;

impl<T: collateral_loan::Config> collateral_loan::Pallet<T> {
	/// Amount the borrower has to pay if the loan is repaid at `at` (unix seconds), `None` if
	/// there is no open loan at `loan_index`.
	pub fn amount_to_repay(
		who: &T::AccountId,
		loan_index: LoanIndex,
		at: u64,
	) -> Option<BalanceOf<T>> {
		let loan = UserLoans::<T>::get(who, loan_index)?;
		if !loan.is_open() {
			return None;
		}
		Self::repay_amounts(&loan, at).ok().map(|(total, _)| total)
	}

	pub fn user_open_loans(who: &T::AccountId) -> Vec<(LoanIndex, Loan<T::AccountId, BalanceOf<T>>)> {
		let mut loans: Vec<(LoanIndex, Loan<T::AccountId, BalanceOf<T>>)> =
			UserLoans::<T>::iter_prefix(who)
				.filter(|(_, loan)| loan.is_open())
				.collect();
		loans.sort_by_key(|(index, _)| *index);
		loans
	}

	pub fn collateral_holder(
		collateral_asset: AssetClassId,
		collateral_id: UnitId,
	) -> Option<(T::AccountId, LoanIndex)> {
		CollateralCustody::<T>::get(collateral_asset, collateral_id)
	}
}
