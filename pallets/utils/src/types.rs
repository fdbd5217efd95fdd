/// Identifier of a non-fungible asset class (a collection).
pub type AssetClassId = u64;

/// Identifier of a single unit inside an asset class.
pub type UnitId = u64;

/// Identifier of a fungible currency kept by the token ledger.
pub type CurrencyId = u32;

/// Position of a loan inside its borrower's loan list.
pub type LoanIndex = u64;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;
