use super::*;
use pallet_utils::FungibleOperations;

impl<T: tokens::Config> tokens::Pallet<T> {
	pub(crate) fn check_transfer(
		currency: CurrencyId,
		from: &T::AccountId,
		to: &T::AccountId,
		amount: T::Balance,
	) -> DispatchResult {
		ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
		ensure!(
			!Frozen::<T>::contains_key(currency, from),
			Error::<T>::AccountFrozen
		);
		ensure!(
			Accounts::<T>::get(currency, from) >= amount,
			Error::<T>::InsufficientBalance
		);
		if from != to {
			ensure!(
				Accounts::<T>::get(currency, to)
					.checked_add(&amount)
					.is_some(),
				Error::<T>::BalanceOverflow
			);
		}
		Ok(())
	}

	/// Should be called after `check_transfer`.
	pub(crate) fn transfer_inner(
		currency: CurrencyId,
		from: &T::AccountId,
		to: &T::AccountId,
		amount: T::Balance,
	) {
		if from == to {
			return;
		}
		Accounts::<T>::mutate(currency, from, |balance| {
			*balance = balance.saturating_sub(amount);
		});
		Accounts::<T>::mutate(currency, to, |balance| {
			*balance = balance.saturating_add(amount);
		});
	}

	pub(crate) fn check_mint(
		currency: CurrencyId,
		to: &T::AccountId,
		amount: T::Balance,
	) -> DispatchResult {
		ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
		ensure!(
			TotalIssuance::<T>::get(currency)
				.checked_add(&amount)
				.is_some(),
			Error::<T>::BalanceOverflow
		);
		ensure!(
			Accounts::<T>::get(currency, to)
				.checked_add(&amount)
				.is_some(),
			Error::<T>::BalanceOverflow
		);
		Ok(())
	}

	/// Should be called after `check_mint`.
	pub(crate) fn mint_inner(currency: CurrencyId, to: &T::AccountId, amount: T::Balance) {
		TotalIssuance::<T>::mutate(currency, |issuance| {
			*issuance = issuance.saturating_add(amount);
		});
		Accounts::<T>::mutate(currency, to, |balance| {
			*balance = balance.saturating_add(amount);
		});
	}
}

impl<T: tokens::Config> FungibleOperations for tokens::Pallet<T> {
	type AccountId = T::AccountId;
	type Balance = T::Balance;

	fn balance_of(who: &Self::AccountId, currency: CurrencyId) -> Self::Balance {
		Accounts::<T>::get(currency, who)
	}

	fn transfer(
		currency: CurrencyId,
		from: &Self::AccountId,
		to: &Self::AccountId,
		amount: Self::Balance,
	) -> DispatchResult {
		if amount.is_zero() {
			return Ok(());
		}
		Self::check_transfer(currency, from, to, amount)?;
		Self::transfer_inner(currency, from, to, amount);
		Self::deposit_event(Event::Transferred(
			currency,
			from.clone(),
			to.clone(),
			amount,
		));
		Ok(())
	}
}
