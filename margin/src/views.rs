use common_structs::{AccountInfo, MarketIndex, MarketInfo, Wei};

use crate::{cache::Cache, helpers, oracle, positions, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + common_events::EventsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + positions::liquidation::PositionLiquidationModule
    + positions::account::PositionAccountModule
    + positions::expiry::PositionExpiryModule
    + validation::ValidationModule
{
    /// Supply and borrow value of an account, 36 decimals.
    #[view(getAccountValues)]
    fn get_account_values_view(
        &self,
        owner: ManagedAddress,
        number: u64,
    ) -> MultiValue2<BigUint, BigUint> {
        let account = AccountInfo::new(owner, number);
        let mut cache = Cache::new(self);
        self.load_account_markets(&mut cache, &account);

        let values = self.get_account_values(&cache, &account);
        (values.supply_value, values.borrow_value).into()
    }

    /// Same as `getAccountValues` with borrows scaled by their market premium.
    #[view(getAdjustedAccountValues)]
    fn get_adjusted_account_values_view(
        &self,
        owner: ManagedAddress,
        number: u64,
    ) -> MultiValue2<BigUint, BigUint> {
        let account = AccountInfo::new(owner, number);
        let mut cache = Cache::new(self);
        self.load_account_markets(&mut cache, &account);

        let values = self.get_adjusted_account_values(&cache, &account);
        (values.supply_value, values.borrow_value).into()
    }

    #[view(isAccountCollateralized)]
    fn is_account_collateralized_view(&self, owner: ManagedAddress, number: u64) -> bool {
        let account = AccountInfo::new(owner, number);
        let mut cache = Cache::new(self);
        self.load_account_markets(&mut cache, &account);

        self.is_account_collateralized(&cache, &account)
    }

    /// Whether the borrow of an account on `owed_market` can be liquidated now,
    /// either for lack of collateral or because it expired.
    #[view(canBeLiquidated)]
    fn can_be_liquidated(&self, owner: ManagedAddress, number: u64, owed_market: u32) -> bool {
        let account = AccountInfo::new(owner, number);
        let mut cache = Cache::new(self);
        self.load_account_markets(&mut cache, &account);

        let expiry = self.get_expiry(&account, owed_market);
        let expired = expiry != 0 && expiry <= cache.current_timestamp;

        expired || !self.is_account_collateralized(&cache, &account)
    }

    #[view(getAccountWei)]
    fn get_account_wei_view(
        &self,
        owner: ManagedAddress,
        number: u64,
        market_id: u32,
    ) -> Wei<Self::Api> {
        let account = AccountInfo::new(owner, number);
        let mut cache = Cache::new(self);
        cache.load_market(market_id);

        let info = cache.get_market_info(market_id);
        self.get_account_wei(&account, &info)
    }

    /// Market index accrued to the current block.
    #[view(getMarketIndex)]
    fn get_market_index(&self, market_id: u32) -> MarketIndex<Self::Api> {
        self.require_market_supported(market_id);
        let timestamp = self.blockchain().get_block_timestamp();
        let earnings_rate = self.risk_params().get().earnings_rate;

        self.get_current_index(market_id, timestamp, &earnings_rate)
    }

    #[view(getMarketPrice)]
    fn get_market_price_view(&self, market_id: u32) -> BigUint {
        self.require_market_supported(market_id);
        self.get_market_price(market_id, self.blockchain().get_block_timestamp())
    }

    /// Snapshot over the given markets, sorted by id and without duplicates.
    #[view(getMarketInfos)]
    fn get_market_infos(
        &self,
        market_ids: MultiValueEncoded<u32>,
    ) -> ManagedVec<MarketInfo<Self::Api>> {
        let mut cache = Cache::new(self);
        cache.load_markets(market_ids);

        cache.markets
    }

    /// Liquidation spread plus both margin premiums.
    #[view(getMarketPairSpread)]
    fn get_market_pair_spread_view(
        &self,
        held_market: u32,
        owed_market: u32,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_market_supported(held_market);
        self.require_market_supported(owed_market);
        let cache = Cache::new(self);

        self.get_market_pair_spread(&cache, held_market, owed_market)
    }

    /// Reward-adjusted owed price at the current block. A zero `expiry` prices
    /// an under-collateralization liquidation.
    #[view(getOwedPriceAdjusted)]
    fn get_owed_price_adjusted_view(
        &self,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        cache.load_market(held_market);
        cache.load_market(owed_market);

        let owed_price = cache.get_market_info(owed_market).price;
        self.get_owed_price_adjusted(&owed_price, held_market, owed_market, expiry, &cache)
    }

    #[view(isOperator)]
    fn is_operator(&self, owner: ManagedAddress, operator: ManagedAddress) -> bool {
        self.is_authorized(&operator, &owner)
    }
}
