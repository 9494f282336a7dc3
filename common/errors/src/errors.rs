#![no_std]

// Structural invariants of a liquidation request.

pub static ERROR_SAME_MARKET: &[u8] = b"Held market can not equal the owed market.";

pub static ERROR_OWED_BALANCE_POSITIVE: &[u8] =
    b"Owed market balance of the liquid account can not be positive.";

pub static ERROR_HELD_BALANCE_NEGATIVE: &[u8] =
    b"Held market balance of the liquid account can not be negative.";

pub static ERROR_EXPIRY_OVERFLOW: &[u8] = b"Expiry timestamp overflows 32 bits.";

pub static ERROR_ACCOUNT_NOT_LIQUIDATABLE: &[u8] = b"Liquid account is not liquidatable.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Price can not be zero.";

pub static ERROR_SAME_ACCOUNT: &[u8] = b"Solid account can not be the liquid account.";

// Authorization.

pub static ERROR_NOT_OPERATOR: &[u8] =
    b"Caller is not the solid account owner or an approved operator.";

pub static ERROR_NOT_LEDGER: &[u8] = b"Only ledger feeders are allowed.";

pub static ERROR_NOT_ORACLE: &[u8] = b"Only oracles are allowed.";

// Expiry.

pub static ERROR_EXPIRY_MISMATCH: &[u8] = b"Expiry mismatch.";

pub static ERROR_BORROW_NOT_EXPIRED: &[u8] = b"Borrow not yet expired.";

pub static ERROR_EXPIRY_IN_THE_PAST: &[u8] = b"Expiry must be in the future.";

pub static ERROR_EXPIRY_WITHOUT_DEBT: &[u8] = b"Expiry can only be set on a negative balance.";

// Snapshot.

pub static ERROR_MARKET_NOT_FOUND: &[u8] = b"Market not found in the snapshot.";

// Configuration.

pub static ERROR_MARKET_NOT_SUPPORTED: &[u8] = b"Market not supported.";

pub static ERROR_MARKET_ALREADY_SUPPORTED: &[u8] = b"Market already supported.";

pub static ERROR_INVALID_LIQUIDATION_SPREAD: &[u8] = b"Invalid liquidation spread.";

pub static ERROR_INVALID_MARGIN_PREMIUM: &[u8] = b"Invalid margin premium.";

pub static ERROR_INVALID_MARGIN_RATIO: &[u8] = b"Invalid margin ratio.";

pub static ERROR_INVALID_EARNINGS_RATE: &[u8] = b"Invalid earnings rate.";

pub static ERROR_INVALID_BORROW_RATE: &[u8] = b"Invalid borrow rate.";

pub static ERROR_INVALID_RAMP_TIME: &[u8] = b"Invalid expiration ramp time.";

pub static ERROR_INVALID_PRICE_DEVIATION: &[u8] = b"Invalid price deviation bound.";

pub static ERROR_INVALID_STALENESS: &[u8] = b"Staleness window can not be zero.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

// Feeders.

pub static ERROR_INVALID_INDEX: &[u8] = b"Index can not be lower than the interest index base.";

pub static ERROR_INDEX_DECREASED: &[u8] = b"Interest index can not decrease.";

pub static ERROR_PRICE_FEED_STALE: &[u8] = b"Price feed is stale.";

pub static ERROR_PRICE_NOT_SET: &[u8] = b"No price submitted for this market.";

pub static ERROR_PRICE_DEVIATION: &[u8] = b"Price deviates too much from the last submission.";

pub static ERROR_INVALID_SUBMISSION_TIMESTAMP: &[u8] = b"Submission timestamp is in the future.";

pub static ERROR_SUBMISSION_OUTDATED: &[u8] = b"Submission is older than the stored price.";
