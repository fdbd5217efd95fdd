use super::*;
use pallet_utils::{SECONDS_PER_DAY, SECONDS_PER_YEAR};
use sp_core::U256;
use sp_runtime::{
	traits::{CheckedAdd, Zero},
	DispatchError, PerThing,
};
use sp_std::convert::TryInto;

impl<T: collateral_loan::Config> collateral_loan::Pallet<T> {
	/// Interest of a loan of `principal` against `collateral_asset` for `duration` seconds.
	pub fn estimate_interest(
		collateral_asset: AssetClassId,
		principal: BalanceOf<T>,
		duration: u64,
	) -> Result<BalanceOf<T>, DispatchError> {
		ensure!(
			T::LoanConfig::is_accepted(collateral_asset),
			Error::<T>::UnacceptedCollateral
		);
		Self::calculate_interest(
			principal,
			T::LoanConfig::collateral_rate(collateral_asset),
			duration,
		)
	}

	/// `principal * rate * duration / (100 * SECONDS_PER_YEAR)`, rounded down.
	pub(crate) fn calculate_interest(
		principal: BalanceOf<T>,
		rate: Percent,
		duration: u64,
	) -> Result<BalanceOf<T>, DispatchError> {
		let numerator = Self::balance_to_u256(principal)?
			.checked_mul(U256::from(rate.deconstruct()))
			.and_then(|v| v.checked_mul(U256::from(duration)))
			.ok_or(Error::<T>::ArithmeticOverflow)?;
		Self::u256_to_balance(numerator / U256::from(100 * SECONDS_PER_YEAR))
	}

	/// Penalty for every whole day past `due_at`, zero if not overdue.
	pub(crate) fn calculate_penalty(
		principal: BalanceOf<T>,
		due_at: u64,
		now: u64,
	) -> Result<BalanceOf<T>, DispatchError> {
		if now <= due_at {
			return Ok(Zero::zero());
		}
		let overdue_days = (now - due_at) / SECONDS_PER_DAY;
		let numerator = Self::balance_to_u256(principal)?
			.checked_mul(U256::from(T::OverduePenaltyRate::get().deconstruct()))
			.and_then(|v| v.checked_mul(U256::from(overdue_days)))
			.ok_or(Error::<T>::ArithmeticOverflow)?;
		Self::u256_to_balance(numerator / U256::from(100u32))
	}

	/// Total due and the overdue penalty part of it, if `loan` is settled at `now`.
	pub(crate) fn repay_amounts(
		loan: &Loan<T::AccountId, BalanceOf<T>>,
		now: u64,
	) -> Result<(BalanceOf<T>, BalanceOf<T>), DispatchError> {
		let penalty = Self::calculate_penalty(loan.principal, loan.due_at, now)?;
		let total = loan
			.principal
			.checked_add(&loan.interest)
			.and_then(|v| v.checked_add(&penalty))
			.ok_or(Error::<T>::ArithmeticOverflow)?;
		Ok((total, penalty))
	}

	fn balance_to_u256(amount: BalanceOf<T>) -> Result<U256, DispatchError> {
		let amount: u128 = amount
			.try_into()
			.map_err(|_| Error::<T>::ArithmeticOverflow)?;
		Ok(U256::from(amount))
	}

	fn u256_to_balance(value: U256) -> Result<BalanceOf<T>, DispatchError> {
		ensure!(
			value <= U256::from(u128::MAX),
			Error::<T>::ArithmeticOverflow
		);
		value
			.low_u128()
			.try_into()
			.map_err(|_| Error::<T>::ArithmeticOverflow.into())
	}

	pub(crate) fn now() -> u64 {
		T::TimeProvider::now().as_secs()
	}

	pub(crate) fn ensure_valid_caller(sender: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
		let who = ensure_signed(sender).map_err(|_| Error::<T>::InvalidCaller)?;
		ensure!(who != T::AccountId::default(), Error::<T>::InvalidCaller);
		Ok(who)
	}

	pub(crate) fn check_before_request(
		who: &T::AccountId,
		collateral_asset: AssetClassId,
		principal: BalanceOf<T>,
		collateral_id: UnitId,
	) -> DispatchResult {
		// the custody account can not borrow from itself
		ensure!(
			who != &OperationAccount::<T>::get(),
			Error::<T>::InvalidCaller
		);
		ensure!(
			principal <= T::LoanConfig::max_loan_amount(collateral_asset),
			Error::<T>::MaxLoanAmountExceeded
		);
		ensure!(
			T::LoanConfig::is_accepted(collateral_asset),
			Error::<T>::UnacceptedCollateral
		);
		ensure!(
			T::Nft::balance_of(who, collateral_asset) >= 1,
			Error::<T>::InsufficientCollateralBalance
		);
		ensure!(
			T::Nft::owner_of(collateral_asset, collateral_id).as_ref() == Some(who),
			Error::<T>::NotOwner
		);
		ensure!(
			!CollateralCustody::<T>::contains_key(collateral_asset, collateral_id),
			Error::<T>::NotOwner
		);
		Ok(())
	}

	/// Should be called after `check_before_request`, inside a storage transaction.
	pub(crate) fn originate_loan(
		who: &T::AccountId,
		collateral_asset: AssetClassId,
		principal: BalanceOf<T>,
		duration: u64,
		collateral_id: UnitId,
	) -> DispatchResult {
		let interest = Self::estimate_interest(collateral_asset, principal, duration)?;
		let now = Self::now();
		let due_at = now
			.checked_add(duration)
			.ok_or(Error::<T>::ArithmeticOverflow)?;
		let loan_index = NextLoanIndex::<T>::get(who);
		let next_index = loan_index
			.checked_add(1)
			.ok_or(Error::<T>::ArithmeticOverflow)?;
		let currency = T::LoanConfig::loan_currency();
		let custody = OperationAccount::<T>::get();

		CollateralLedger::<T>::mutate(who, collateral_asset, |count| {
			*count = count.saturating_add(1);
		});
		UserLoans::<T>::insert(
			who,
			loan_index,
			Loan {
				borrower: who.clone(),
				collateral_asset,
				collateral_id,
				currency,
				principal,
				duration,
				interest,
				start_at: now,
				due_at,
				status: LoanStatus::Open,
			},
		);
		NextLoanIndex::<T>::insert(who, next_index);
		CollateralCustody::<T>::insert(collateral_asset, collateral_id, (who.clone(), loan_index));

		T::Nft::transfer(collateral_asset, who, &custody, collateral_id).map_err(|e| {
			log::error!(
				"lock collateral {}/{} of {:?} failed: {:?}",
				collateral_asset,
				collateral_id,
				who,
				e
			);
			Error::<T>::TransferFailed
		})?;
		T::Tokens::transfer(currency, &custody, who, principal).map_err(|e| {
			log::error!("disburse loan {} of {:?} failed: {:?}", loan_index, who, e);
			Error::<T>::TransferFailed
		})?;

		log::debug!(
			"loan {} of {:?} originated, principal {:?}, interest {:?}, due at {}",
			loan_index,
			who,
			principal,
			interest,
			due_at
		);
		Self::deposit_event(Event::LoanOriginated(
			who.clone(),
			collateral_asset,
			collateral_id,
			currency,
			principal,
			duration,
			interest,
			now,
			loan_index,
		));
		Ok(())
	}

	pub(crate) fn check_before_repay(who: &T::AccountId, loan_index: LoanIndex) -> DispatchResult {
		let loan = UserLoans::<T>::get(who, loan_index).ok_or(Error::<T>::LoanNotFound)?;
		ensure!(loan.is_open(), Error::<T>::LoanAlreadyClosed);

		let (total, _) = Self::repay_amounts(&loan, Self::now())?;
		ensure!(
			T::Tokens::balance_of(who, loan.currency) >= total,
			Error::<T>::InsufficientTokenBalance
		);

		ensure!(
			!CollateralLedger::<T>::get(who, loan.collateral_asset).is_zero(),
			Error::<T>::InsufficientCollateralBalance
		);
		ensure!(
			CollateralCustody::<T>::get(loan.collateral_asset, loan.collateral_id)
				== Some((who.clone(), loan_index)),
			Error::<T>::InsufficientCollateralBalance
		);
		Ok(())
	}

	/// Should be called after `check_before_repay`, inside a storage transaction.
	pub(crate) fn settle_loan(who: &T::AccountId, loan_index: LoanIndex) -> DispatchResult {
		let loan = UserLoans::<T>::get(who, loan_index).ok_or(Error::<T>::LoanNotFound)?;
		let now = Self::now();
		let (total, penalty) = Self::repay_amounts(&loan, now)?;
		let custody = OperationAccount::<T>::get();

		CollateralLedger::<T>::mutate(who, loan.collateral_asset, |count| {
			*count = count.saturating_sub(1);
		});

		T::Tokens::transfer(loan.currency, who, &custody, total).map_err(|e| {
			log::error!("collect loan {} of {:?} failed: {:?}", loan_index, who, e);
			Error::<T>::TransferFailed
		})?;
		T::Nft::transfer(loan.collateral_asset, &custody, who, loan.collateral_id).map_err(|e| {
			log::error!(
				"release collateral {}/{} to {:?} failed: {:?}",
				loan.collateral_asset,
				loan.collateral_id,
				who,
				e
			);
			Error::<T>::TransferFailed
		})?;

		CollateralCustody::<T>::remove(loan.collateral_asset, loan.collateral_id);
		UserLoans::<T>::mutate(who, loan_index, |loan| {
			if let Some(loan) = loan {
				loan.status = LoanStatus::Closed;
			}
		});

		log::debug!(
			"loan {} of {:?} repaid {:?} with penalty {:?}",
			loan_index,
			who,
			total,
			penalty
		);
		Self::deposit_event(Event::LoanRepaid(
			who.clone(),
			loan.collateral_asset,
			loan.collateral_id,
			loan.currency,
			loan.principal,
			loan.duration,
			loan.interest,
			now,
			loan_index,
			penalty,
		));
		Ok(())
	}
}
