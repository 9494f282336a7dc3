#![no_std]

/// Base of the interest indexes: an index of `INDEX_BASE` means 1 Par == 1 Wei.
pub const INDEX_BASE: u128 = 1_000_000_000_000_000_000;

/// Fixed point one for fractions (spreads, premiums, margin ratio, rates).
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// Expiry timestamps are stored on 32 bits.
pub const MAX_EXPIRY_TIMESTAMP: u64 = u32::MAX as u64;

/// Upper bound for the liquidation spread and for any single margin premium (100%).
pub const MAX_LIQUIDATION_SPREAD: u128 = WAD;
pub const MAX_MARGIN_PREMIUM: u128 = WAD;

/// Margin ratio bounds: at least 1%, at most 200%.
pub const MIN_MARGIN_RATIO: u128 = 10_000_000_000_000_000;
pub const MAX_MARGIN_RATIO: u128 = 2 * WAD;

/// A single price submission can move at most 100%.
pub const MAX_PRICE_DEVIATION: u128 = WAD;

/// Suppliers can never earn more than what borrowers pay.
pub const MAX_EARNINGS_RATE: u128 = WAD;

/// Per-second borrow rate cap (roughly 1000% APR).
pub const MAX_BORROW_RATE_PER_SECOND: u128 = 317_097_919_837;

/// The expiration ramp can not be longer than a week.
pub const MAX_EXPIRATION_RAMP_SECONDS: u64 = 7 * SECONDS_PER_DAY;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Default staleness window for oracle prices.
pub const DEFAULT_MAX_PRICE_STALE_SECONDS: u64 = 15 * SECONDS_PER_MINUTE;
