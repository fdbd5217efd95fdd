use super::*;
use pallet_utils::LoanConfiguration;

impl<T: loan_config::Config> loan_config::Pallet<T> {
	pub(crate) fn insert_collateral(
		asset_class: AssetClassId,
		rate: Percent,
		max_loan_amount: T::Balance,
	) {
		AcceptedCollaterals::<T>::insert(asset_class, ());
		CollateralRates::<T>::insert(asset_class, rate);
		MaxLoanAmounts::<T>::insert(asset_class, max_loan_amount);
	}

	pub(crate) fn check_accepted(asset_class: AssetClassId) -> DispatchResult {
		ensure!(
			AcceptedCollaterals::<T>::contains_key(asset_class),
			Error::<T>::CollateralNotAccepted
		);
		Ok(())
	}
}

impl<T: loan_config::Config> LoanConfiguration for loan_config::Pallet<T> {
	type Balance = T::Balance;

	fn is_accepted(asset_class: AssetClassId) -> bool {
		AcceptedCollaterals::<T>::contains_key(asset_class)
	}

	fn collateral_rate(asset_class: AssetClassId) -> Percent {
		CollateralRates::<T>::get(asset_class)
	}

	fn max_loan_amount(asset_class: AssetClassId) -> Self::Balance {
		MaxLoanAmounts::<T>::get(asset_class)
	}

	fn loan_currency() -> CurrencyId {
		LoanCurrency::<T>::get()
	}
}
