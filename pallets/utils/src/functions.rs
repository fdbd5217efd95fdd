use frame_support::dispatch::DispatchResult;

/// Run an extrinsic in two phases: `check_fn` validates everything without touching storage,
/// `set_fn` applies the changes and is expected not to fail.
pub fn extrinsic_procedure<AccountId, CheckFn, SetFn>(
	who: &AccountId,
	check_fn: CheckFn,
	set_fn: SetFn,
) -> DispatchResult
where
	CheckFn: FnOnce(&AccountId) -> DispatchResult,
	SetFn: FnOnce(&AccountId),
{
	check_fn(who)?;
	set_fn(who);
	Ok(())
}

/// Same as [`extrinsic_procedure`] except that the set phase may fail, e.g. because it calls
/// into other pallets.
///
/// The caller must run inside a storage transaction (`#[transactional]`), so that an error from
/// `set_fn` discards whatever it had already written.
pub fn fallible_extrinsic_procedure<AccountId, CheckFn, SetFn>(
	who: &AccountId,
	check_fn: CheckFn,
	set_fn: SetFn,
) -> DispatchResult
where
	CheckFn: FnOnce(&AccountId) -> DispatchResult,
	SetFn: FnOnce(&AccountId) -> DispatchResult,
{
	check_fn(who)?;
	set_fn(who)
}
