use common_errors::ERROR_MARKET_NOT_FOUND;
use common_structs::{MarketInfo, RiskParams};
use multiversx_sc::api::{ErrorApi, ErrorApiImpl};

multiversx_sc::imports!();

/// Per-call snapshot of the markets a liquidation touches.
///
/// Every market is priced and indexed exactly once, then kept sorted by id so
/// later lookups are a binary search. Asking for a market that was not loaded
/// up front is an error.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    sc_ref: &'a C,

    pub markets: ManagedVec<C::Api, MarketInfo<C::Api>>,
    pub risk_params: RiskParams<C::Api>,
    pub current_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            markets: ManagedVec::new(),
            risk_params: sc_ref.risk_params().get(),
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    /// Adds the given markets to the snapshot. Ids already loaded are skipped,
    /// so loading the union of several lists fetches each market once.
    pub fn load_markets<I>(&mut self, market_ids: I)
    where
        I: IntoIterator<Item = u32>,
    {
        for market_id in market_ids {
            self.load_market(market_id);
        }
    }

    pub fn load_market(&mut self, market_id: u32) {
        let position = match self.search(market_id) {
            Ok(_) => return,
            Err(position) => position,
        };

        let info = self.sc_ref.fetch_market_info(
            market_id,
            self.current_timestamp,
            &self.risk_params.earnings_rate,
        );

        if position == self.markets.len() {
            self.markets.push(info);
            return;
        }

        let mut markets = ManagedVec::new();
        for (index, existing) in self.markets.iter().enumerate() {
            if index == position {
                markets.push(info.clone());
            }
            markets.push(existing.clone());
        }
        self.markets = markets;
    }

    /// Looks a market up in the snapshot.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_FOUND`: The market was not loaded for this call.
    pub fn get_market_info(&self, market_id: u32) -> MarketInfo<C::Api> {
        match self.search(market_id) {
            Ok(index) => self.markets.get(index).clone(),
            Err(_) => C::Api::error_api_impl().signal_error(ERROR_MARKET_NOT_FOUND),
        }
    }

    /// Binary search over the sorted snapshot, same contract as `slice::binary_search`.
    fn search(&self, market_id: u32) -> Result<usize, usize> {
        let mut low = 0usize;
        let mut high = self.markets.len();

        while low < high {
            let mid = low + (high - low) / 2;
            let current = self.markets.get(mid).market_id;
            if current == market_id {
                return Ok(mid);
            }

            if current < market_id {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        Err(low)
    }
}
