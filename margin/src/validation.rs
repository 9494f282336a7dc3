multiversx_sc::imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_MARKET_NOT_SUPPORTED, ERROR_NOT_LEDGER, ERROR_NOT_OPERATOR,
    ERROR_NOT_ORACLE,
};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Whether `caller` may act for the accounts of `owner`.
    ///
    /// True for the owner itself, for operators the owner approved and for
    /// global operators.
    fn is_authorized(&self, caller: &ManagedAddress, owner: &ManagedAddress) -> bool {
        caller == owner
            || self.local_operators(owner).contains(caller)
            || self.global_operators().contains(caller)
    }

    /// # Errors
    /// - `ERROR_NOT_OPERATOR`: `caller` is neither the owner nor a trusted operator.
    fn require_authorized(&self, caller: &ManagedAddress, owner: &ManagedAddress) {
        require!(self.is_authorized(caller, owner), ERROR_NOT_OPERATOR);
    }

    fn require_is_ledger(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.ledgers().contains(&caller), ERROR_NOT_LEDGER);
    }

    fn require_is_oracle(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.oracles().contains(&caller), ERROR_NOT_ORACLE);
    }

    fn require_market_supported(&self, market_id: u32) {
        require!(
            self.markets().contains(&market_id),
            ERROR_MARKET_NOT_SUPPORTED
        );
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    /// Checks a raw WAD fraction against inclusive bounds.
    fn require_fraction_in_range(
        &self,
        value: &BigUint,
        min: u128,
        max: u128,
        error: &'static [u8],
    ) {
        require!(
            value >= &BigUint::from(min) && value <= &BigUint::from(max),
            error
        );
    }
}
