multiversx_sc::imports!();

use common_constants::INDEX_BASE;
use common_errors::{ERROR_INDEX_DECREASED, ERROR_INVALID_INDEX};
use common_structs::{AccountInfo, MarketIndex, Par};

use crate::{oracle, positions::expiry, storage, validation};

/// Entry points of the balance ledger. Balances and indexes are owned by the
/// ledger; this contract keeps a mirror of them to value accounts.
#[multiversx_sc::module]
pub trait LedgerModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + expiry::PositionExpiryModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Mirrors the Par balance of an account on a market.
    ///
    /// The market index is accrued before the aggregate Par changes. A balance
    /// that stops being negative clears the expiry of that borrow.
    #[endpoint(setAccountPar)]
    fn set_account_par(
        &self,
        owner: ManagedAddress,
        number: u64,
        market_id: u32,
        sign: bool,
        value: BigUint,
    ) {
        self.require_is_ledger();
        self.require_market_supported(market_id);
        self.require_non_zero_address(&owner);

        self.accrue_market_index(market_id);

        let account = AccountInfo::new(owner, number);
        let new_par = Par::new(sign, value);
        let par_mapper = self.account_par(&account.owner, account.number, market_id);
        let old_par = if par_mapper.is_empty() {
            Par::zero()
        } else {
            par_mapper.get()
        };

        self.total_par(market_id).update(|total| {
            if old_par.sign {
                total.supply -= &old_par.value;
            } else {
                total.borrow -= &old_par.value;
            }

            if new_par.sign {
                total.supply += &new_par.value;
            } else {
                total.borrow += &new_par.value;
            }
        });

        let mut markets = self.account_markets(&account.owner, account.number);
        if new_par.is_zero() {
            par_mapper.clear();
            markets.swap_remove(&market_id);
        } else {
            par_mapper.set(&new_par);
            markets.insert(market_id);
        }

        if !new_par.is_negative() {
            self.clear_expiry(&account, market_id);
        }

        self.update_account_par_event(&account, market_id, &new_par);
    }

    /// Pushes the ledger's view of a market index.
    ///
    /// # Errors
    /// - `ERROR_INVALID_INDEX`: An index below `INDEX_BASE`.
    /// - `ERROR_INDEX_DECREASED`: An index below the stored one.
    #[endpoint(setMarketIndex)]
    fn set_market_index(&self, market_id: u32, borrow_index: BigUint, supply_index: BigUint) {
        self.require_is_ledger();
        self.require_market_supported(market_id);

        let base = BigUint::from(INDEX_BASE);
        require!(
            borrow_index >= base && supply_index >= base,
            ERROR_INVALID_INDEX
        );

        let index_mapper = self.market_index(market_id);
        let current = index_mapper.get();
        require!(
            borrow_index >= current.borrow && supply_index >= current.supply,
            ERROR_INDEX_DECREASED
        );

        let timestamp = self.blockchain().get_block_timestamp();
        let index = MarketIndex {
            borrow: borrow_index,
            supply: supply_index,
            last_update: timestamp,
        };

        self.update_market_index_event(market_id, &index.borrow, &index.supply, timestamp);
        index_mapper.set(index);
    }
}
