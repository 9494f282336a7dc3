#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("liquidation_amounts")]
    fn liquidation_amounts_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] solid_account: &AccountInfo<Self::Api>,
        #[indexed] liquid_account: &AccountInfo<Self::Api>,
        #[indexed] held_market: u32,
        #[indexed] owed_market: u32,
        #[indexed] expiry: u64,
        #[indexed] amounts: &LiquidationAmounts<Self::Api>,
    );

    #[event("set_expiry")]
    fn set_expiry_event(
        &self,
        #[indexed] account: &AccountInfo<Self::Api>,
        #[indexed] market_id: u32,
        #[indexed] expiry: u64,
    );

    // Empty `account_owner` means a global operator.
    #[event("set_operator")]
    fn set_operator_event(
        &self,
        #[indexed] account_owner: &ManagedAddress,
        #[indexed] operator: &ManagedAddress,
        #[indexed] trusted: bool,
    );

    #[event("update_market_index")]
    fn update_market_index_event(
        &self,
        #[indexed] market_id: u32,
        #[indexed] borrow_index: &BigUint,
        #[indexed] supply_index: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("submit_price")]
    fn submit_price_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        #[indexed] market_id: u32,
        #[indexed] price: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("update_account_par")]
    fn update_account_par_event(
        &self,
        #[indexed] account: &AccountInfo<Self::Api>,
        #[indexed] market_id: u32,
        #[indexed] par: &Par<Self::Api>,
    );

    #[event("update_risk_params")]
    fn update_risk_params_event(&self, #[indexed] params: &RiskParams<Self::Api>);

    #[event("update_market_config")]
    fn update_market_config_event(
        &self,
        #[indexed] market_id: u32,
        #[indexed] config: &MarketConfig<Self::Api>,
        #[indexed] oracle_config: &OracleConfig<Self::Api>,
    );
}
