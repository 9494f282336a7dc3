pub mod account;
pub mod expiry;
pub mod liquidation;
