// Storage TTLs, expressed in ledgers (~5s each)
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Time, in seconds
pub const ONE_DAY: u64 = 86_400;

/// Fixed-point scale of vesting ratios and the dividends adjustment (1.0 == 1e18)
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Fixed-point scale of the per-share reward accumulator
pub const ACC_PRECISION: i128 = 1_000_000_000_000;

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Emission split percentages are expressed in tenths of a percent
pub const PERCENT_DENOMINATOR: i128 = 1_000;
