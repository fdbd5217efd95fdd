use super::*;
use pallet_utils::NonFungibleOperations;

impl<T: nft::Config> nft::Pallet<T> {
	pub(crate) fn check_mint(asset_class: AssetClassId, unit_id: UnitId) -> DispatchResult {
		ensure!(
			!UnitOwners::<T>::contains_key(asset_class, unit_id),
			Error::<T>::UnitAlreadyExists
		);
		Ok(())
	}

	pub(crate) fn mint_inner(asset_class: AssetClassId, unit_id: UnitId, owner: &T::AccountId) {
		UnitOwners::<T>::insert(asset_class, unit_id, owner);
		OwnedCount::<T>::mutate(owner, asset_class, |count| {
			*count = count.saturating_add(1);
		});
	}

	/// Check if the given unit exists and belongs to `who`.
	pub(crate) fn check_belongs(
		asset_class: AssetClassId,
		unit_id: UnitId,
		who: &T::AccountId,
	) -> DispatchResult {
		let owner = UnitOwners::<T>::get(asset_class, unit_id).ok_or(Error::<T>::UnitNotFound)?;
		ensure!(owner.eq(who), Error::<T>::NotUnitOwner);
		Ok(())
	}

	/// Should be called after `check_belongs`.
	pub(crate) fn transfer_inner(
		asset_class: AssetClassId,
		unit_id: UnitId,
		from: &T::AccountId,
		to: &T::AccountId,
	) {
		if from == to {
			return;
		}
		UnitOwners::<T>::insert(asset_class, unit_id, to);
		OwnedCount::<T>::mutate(from, asset_class, |count| {
			*count = count.saturating_sub(1);
		});
		OwnedCount::<T>::mutate(to, asset_class, |count| {
			*count = count.saturating_add(1);
		});
	}
}

impl<T: nft::Config> NonFungibleOperations for nft::Pallet<T> {
	type AccountId = T::AccountId;

	fn balance_of(who: &Self::AccountId, asset_class: AssetClassId) -> u32 {
		OwnedCount::<T>::get(who, asset_class)
	}

	fn owner_of(asset_class: AssetClassId, unit_id: UnitId) -> Option<Self::AccountId> {
		UnitOwners::<T>::get(asset_class, unit_id)
	}

	fn transfer(
		asset_class: AssetClassId,
		from: &Self::AccountId,
		to: &Self::AccountId,
		unit_id: UnitId,
	) -> DispatchResult {
		Self::check_belongs(asset_class, unit_id, from)?;
		Self::transfer_inner(asset_class, unit_id, from, to);
		Self::deposit_event(Event::Transferred(
			asset_class,
			unit_id,
			from.clone(),
			to.clone(),
		));
		Ok(())
	}
}
