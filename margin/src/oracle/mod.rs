multiversx_sc::imports!();
use common_errors::{
    ERROR_INVALID_PRICE, ERROR_INVALID_SUBMISSION_TIMESTAMP, ERROR_PRICE_DEVIATION,
    ERROR_PRICE_FEED_STALE, ERROR_PRICE_NOT_SET, ERROR_SUBMISSION_OUTDATED,
};
use common_structs::{MarketIndex, MarketInfo, PriceFeed};

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Stores a price for a market. Only whitelisted oracles can submit.
    ///
    /// # Arguments
    /// - `market_id`: Priced market.
    /// - `submission_timestamp`: Time the price was observed, not in the future.
    /// - `price`: USD price per Wei unit, non-zero.
    ///
    /// # Errors
    /// - `ERROR_NOT_ORACLE`, `ERROR_MARKET_NOT_SUPPORTED`, `ERROR_INVALID_PRICE`.
    /// - `ERROR_INVALID_SUBMISSION_TIMESTAMP`: Timestamp ahead of the block.
    /// - `ERROR_SUBMISSION_OUTDATED`: Older than the stored price.
    /// - `ERROR_PRICE_DEVIATION`: Moves more than the market's `max_deviation`.
    #[endpoint(submitPrice)]
    fn submit_price(&self, market_id: u32, submission_timestamp: u64, price: BigUint) {
        self.require_is_oracle();
        self.require_market_supported(market_id);
        require!(price > 0u64, ERROR_INVALID_PRICE);
        require!(
            submission_timestamp <= self.blockchain().get_block_timestamp(),
            ERROR_INVALID_SUBMISSION_TIMESTAMP
        );

        let feed_mapper = self.price_feed(market_id);
        if !feed_mapper.is_empty() {
            let last = feed_mapper.get();
            require!(
                submission_timestamp >= last.timestamp,
                ERROR_SUBMISSION_OUTDATED
            );
            self.require_within_deviation(market_id, &last.price, &price);
        }

        self.submit_price_event(
            &self.blockchain().get_caller(),
            market_id,
            &price,
            submission_timestamp,
        );
        feed_mapper.set(PriceFeed {
            price,
            timestamp: submission_timestamp,
        });
    }

    /// `|new - last| <= last * max_deviation`. A zero bound accepts any move.
    fn require_within_deviation(&self, market_id: u32, last_price: &BigUint, new_price: &BigUint) {
        let max_deviation = self.oracle_config(market_id).get().max_deviation;
        if max_deviation.into_raw_units() == &BigUint::zero() {
            return;
        }

        let difference = if new_price > last_price {
            new_price - last_price
        } else {
            last_price - new_price
        };
        let allowed = self.mul_fraction(last_price, &max_deviation);

        require!(difference <= allowed, ERROR_PRICE_DEVIATION);
    }

    /// Returns the price of a market, rejecting feeds older than the market's
    /// staleness window.
    fn get_market_price(&self, market_id: u32, timestamp: u64) -> BigUint {
        let feed_mapper = self.price_feed(market_id);
        require!(!feed_mapper.is_empty(), ERROR_PRICE_NOT_SET);

        let feed = feed_mapper.get();
        let max_seconds_stale = self.oracle_config(market_id).get().max_price_stale_seconds;
        require!(
            timestamp - feed.timestamp < max_seconds_stale,
            ERROR_PRICE_FEED_STALE
        );

        feed.price
    }

    /// Stored index accrued to `timestamp`. Nothing is written.
    fn get_current_index(
        &self,
        market_id: u32,
        timestamp: u64,
        earnings_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> MarketIndex<Self::Api> {
        let index = self.market_index(market_id).get();
        let config = self.market_config(market_id).get();
        let total_par = self.total_par(market_id).get();

        self.calculate_new_index(
            &index,
            &config.borrow_rate,
            &total_par,
            earnings_rate,
            timestamp,
        )
    }

    /// One price read and one index read for a market.
    fn fetch_market_info(
        &self,
        market_id: u32,
        timestamp: u64,
        earnings_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> MarketInfo<Self::Api> {
        self.require_market_supported(market_id);

        MarketInfo {
            market_id,
            price: self.get_market_price(market_id, timestamp),
            index: self.get_current_index(market_id, timestamp, earnings_rate),
        }
    }

    /// Rebases a market onto its accrued index.
    fn accrue_market_index(&self, market_id: u32) -> MarketIndex<Self::Api> {
        let timestamp = self.blockchain().get_block_timestamp();
        let earnings_rate = self.risk_params().get().earnings_rate;
        let index = self.get_current_index(market_id, timestamp, &earnings_rate);

        self.market_index(market_id).set(&index);
        self.update_market_index_event(market_id, &index.borrow, &index.supply, timestamp);

        index
    }
}
