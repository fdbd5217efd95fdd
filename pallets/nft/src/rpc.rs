use super::*;

impl<T: nft::Config> nft::Pallet<T> {
	/// All units of `asset_class` currently owned by `who`, in storage order.
	pub fn user_unit_list(who: &T::AccountId, asset_class: AssetClassId) -> Vec<UnitId> {
		UnitOwners::<T>::iter_prefix(asset_class)
			.filter(|(_, owner)| owner.eq(who))
			.map(|(unit_id, _)| unit_id)
			.collect()
	}
}
