use common_constants::MAX_EXPIRY_TIMESTAMP;
use common_errors::{ERROR_EXPIRY_IN_THE_PAST, ERROR_EXPIRY_OVERFLOW, ERROR_EXPIRY_WITHOUT_DEBT};
use common_structs::AccountInfo;

use crate::{storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionExpiryModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    /// Sets the time after which a borrow can be liquidated regardless of collateral.
    /// A zero `expiry` clears the record.
    ///
    /// # Arguments
    /// - `owner`, `number`: Account holding the borrow.
    /// - `market_id`: Borrowed market.
    /// - `expiry`: Future timestamp fitting in 32 bits, or zero.
    ///
    /// # Errors
    /// - `ERROR_NOT_OPERATOR`: Caller is not the owner or a trusted operator.
    /// - `ERROR_EXPIRY_OVERFLOW`, `ERROR_EXPIRY_IN_THE_PAST`.
    /// - `ERROR_EXPIRY_WITHOUT_DEBT`: The account does not owe this market.
    #[endpoint(setExpiry)]
    fn set_expiry(&self, owner: ManagedAddress, number: u64, market_id: u32, expiry: u64) {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller, &owner);
        self.require_market_supported(market_id);

        let account = AccountInfo::new(owner, number);
        if expiry == 0 {
            self.clear_expiry(&account, market_id);
            return;
        }

        require!(expiry <= MAX_EXPIRY_TIMESTAMP, ERROR_EXPIRY_OVERFLOW);
        require!(
            expiry > self.blockchain().get_block_timestamp(),
            ERROR_EXPIRY_IN_THE_PAST
        );

        let par_mapper = self.account_par(&account.owner, account.number, market_id);
        require!(
            !par_mapper.is_empty() && par_mapper.get().is_negative(),
            ERROR_EXPIRY_WITHOUT_DEBT
        );

        self.expiry(&account.owner, account.number, market_id)
            .set(expiry);
        self.set_expiry_event(&account, market_id, expiry);
    }

    fn clear_expiry(&self, account: &AccountInfo<Self::Api>, market_id: u32) {
        let mapper = self.expiry(&account.owner, account.number, market_id);
        if mapper.is_empty() {
            return;
        }

        mapper.clear();
        self.set_expiry_event(account, market_id, 0);
    }

    fn get_expiry(&self, account: &AccountInfo<Self::Api>, market_id: u32) -> u64 {
        self.expiry(&account.owner, account.number, market_id).get()
    }
}
