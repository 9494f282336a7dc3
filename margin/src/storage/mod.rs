use common_structs::{
    MarketConfig, MarketIndex, OracleConfig, Par, PriceFeed, RiskParams, TotalPar,
};
multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the supported markets
    /// This storage mapper holds the ids of every market the engine can value.
    #[view(getMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> UnorderedSetMapper<u32>;

    /// Get the market configuration
    /// This storage mapper holds the margin premium and the borrow rate of a market.
    #[view(getMarketConfig)]
    #[storage_mapper("market_config")]
    fn market_config(&self, market_id: u32) -> SingleValueMapper<MarketConfig<Self::Api>>;

    /// Get the last persisted market index
    /// Reads accrue it to the current timestamp without writing it back.
    #[view(getStoredMarketIndex)]
    #[storage_mapper("market_index")]
    fn market_index(&self, market_id: u32) -> SingleValueMapper<MarketIndex<Self::Api>>;

    /// Get the aggregate Par of a market, split by sign
    #[view(getTotalPar)]
    #[storage_mapper("total_par")]
    fn total_par(&self, market_id: u32) -> SingleValueMapper<TotalPar<Self::Api>>;

    /// Get the last submitted price of a market
    #[view(getPriceFeed)]
    #[storage_mapper("price_feed")]
    fn price_feed(&self, market_id: u32) -> SingleValueMapper<PriceFeed<Self::Api>>;

    #[view(getOracleConfig)]
    #[storage_mapper("oracle_config")]
    fn oracle_config(&self, market_id: u32) -> SingleValueMapper<OracleConfig<Self::Api>>;

    /// Get the Par balance of an account on a market
    #[view(getAccountPar)]
    #[storage_mapper("account_par")]
    fn account_par(
        &self,
        owner: &ManagedAddress,
        number: u64,
        market_id: u32,
    ) -> SingleValueMapper<Par<Self::Api>>;

    /// Get the markets an account holds a non-zero balance on
    #[view(getAccountMarkets)]
    #[storage_mapper("account_markets")]
    fn account_markets(&self, owner: &ManagedAddress, number: u64) -> UnorderedSetMapper<u32>;

    /// Get the expiry of a borrow
    /// Zero means the borrow never expires.
    #[view(getExpiry)]
    #[storage_mapper("expiry")]
    fn expiry(
        &self,
        owner: &ManagedAddress,
        number: u64,
        market_id: u32,
    ) -> SingleValueMapper<u64>;

    /// Get the operators an account owner trusts to liquidate on their behalf
    #[view(getLocalOperators)]
    #[storage_mapper("local_operators")]
    fn local_operators(&self, owner: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the operators trusted for every account
    #[view(getGlobalOperators)]
    #[storage_mapper("global_operators")]
    fn global_operators(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the protocol-wide risk parameters
    #[view(getRiskParams)]
    #[storage_mapper("risk_params")]
    fn risk_params(&self) -> SingleValueMapper<RiskParams<Self::Api>>;

    /// Get the addresses allowed to push balances and indexes
    #[view(getLedgers)]
    #[storage_mapper("ledgers")]
    fn ledgers(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the addresses allowed to submit prices
    #[view(getOracles)]
    #[storage_mapper("oracles")]
    fn oracles(&self) -> UnorderedSetMapper<ManagedAddress>;
}
