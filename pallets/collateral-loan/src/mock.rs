use crate as pallet_collateral_loan;
use frame_support::{
	parameter_types,
	traits::{Everything, GenesisBuild},
};
use frame_system as system;
use node_primitives::Balance;
use pallet_utils::{AssetClassId, CurrencyId, UnitId};
use sp_core::H256;
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
	PerThing, Percent,
};

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

pub const OPERATION_ACCOUNT: u64 = 100;
pub const BORROWER: u64 = 1;
pub const OTHER_USER: u64 = 2;

pub const LOAN_CURRENCY: CurrencyId = 1;
pub const ACCEPTED_ASSET: AssetClassId = 10;
pub const ACCEPTED_RATE_PERCENT: u8 = 10;
pub const MAX_LOAN_AMOUNT: Balance = 5_000;
pub const UNACCEPTED_ASSET: AssetClassId = 20;

pub const BORROWER_UNIT: UnitId = 1;
pub const BORROWER_SECOND_UNIT: UnitId = 2;
pub const OTHER_USER_UNIT: UnitId = 3;

pub const OPERATION_ACCOUNT_BALANCE: Balance = 1_000_000;
pub const BORROWER_BALANCE: Balance = 500;

/// Unix time (seconds) every test starts at.
pub const GENESIS_TIMESTAMP: u64 = 1_600_000_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
	pub enum Test where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system::{Pallet, Call, Config, Storage, Event<T>},
		Timestamp: pallet_timestamp::{Pallet, Call, Storage, Inherent},
		Tokens: pallet_tokens::{Pallet, Call, Config<T>, Storage, Event<T>},
		Nft: pallet_nft::{Pallet, Call, Config<T>, Storage, Event<T>},
		LoanConfig: pallet_loan_config::{Pallet, Call, Config<T>, Storage, Event<T>},
		CollateralLoan: pallet_collateral_loan::{Pallet, Call, Config<T>, Storage, Event<T>},
	}
);

parameter_types! {
	pub const BlockHashCount: u64 = 250;
	pub const SS58Prefix: u8 = 42;
}

impl system::Config for Test {
	type BaseCallFilter = Everything;
	type BlockWeights = ();
	type BlockLength = ();
	type DbWeight = ();
	type Origin = Origin;
	type Call = Call;
	type Index = u64;
	type BlockNumber = u64;
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type AccountId = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Header = Header;
	type Event = Event;
	type BlockHashCount = BlockHashCount;
	type Version = ();
	type PalletInfo = PalletInfo;
	type AccountData = ();
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type SS58Prefix = SS58Prefix;
	type OnSetCode = ();
}

parameter_types! {
	pub const MinimumPeriod: u64 = 1;
}

impl pallet_timestamp::Config for Test {
	/// A timestamp: milliseconds since the unix epoch.
	type Moment = u64;
	type OnTimestampSet = ();
	type MinimumPeriod = MinimumPeriod;
	type WeightInfo = ();
}

impl pallet_tokens::Config for Test {
	type Event = Event;
	type Balance = Balance;
}

impl pallet_nft::Config for Test {
	type Event = Event;
}

impl pallet_loan_config::Config for Test {
	type Event = Event;
	type Balance = Balance;
}

parameter_types! {
	pub OverduePenaltyRate: Percent = Percent::from_percent(5);
}

impl pallet_collateral_loan::Config for Test {
	type Event = Event;
	type Tokens = Tokens;
	type Nft = Nft;
	type LoanConfig = LoanConfig;
	type TimeProvider = Timestamp;
	type OverduePenaltyRate = OverduePenaltyRate;
}

/// Move the clock to `secs` unix seconds.
pub fn set_now(secs: u64) {
	Timestamp::set_timestamp(secs * 1000);
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
	let mut t = system::GenesisConfig::default()
		.build_storage::<Test>()
		.unwrap();

	pallet_tokens::GenesisConfig::<Test> {
		balances: vec![
			(LOAN_CURRENCY, OPERATION_ACCOUNT, OPERATION_ACCOUNT_BALANCE),
			(LOAN_CURRENCY, BORROWER, BORROWER_BALANCE),
		],
	}
	.assimilate_storage(&mut t)
	.unwrap();

	pallet_nft::GenesisConfig::<Test> {
		units: vec![
			(ACCEPTED_ASSET, BORROWER_UNIT, BORROWER),
			(ACCEPTED_ASSET, BORROWER_SECOND_UNIT, BORROWER),
			(ACCEPTED_ASSET, OTHER_USER_UNIT, OTHER_USER),
			(UNACCEPTED_ASSET, BORROWER_UNIT, BORROWER),
		],
	}
	.assimilate_storage(&mut t)
	.unwrap();

	pallet_loan_config::GenesisConfig::<Test> {
		loan_currency: LOAN_CURRENCY,
		collaterals: vec![(
			ACCEPTED_ASSET,
			Percent::from_percent(ACCEPTED_RATE_PERCENT),
			MAX_LOAN_AMOUNT,
		)],
	}
	.assimilate_storage(&mut t)
	.unwrap();

	pallet_collateral_loan::GenesisConfig::<Test> {
		operation_account: OPERATION_ACCOUNT,
	}
	.assimilate_storage(&mut t)
	.unwrap();

	let mut ext = sp_io::TestExternalities::new(t);
	ext.execute_with(|| {
		System::set_block_number(1);
		set_now(GENESIS_TIMESTAMP);
	});
	ext
}
