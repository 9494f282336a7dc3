#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod helpers;
pub mod ledger;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Margin:
    positions::account::PositionAccountModule
    + positions::expiry::PositionExpiryModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + ledger::LedgerModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + views::ViewsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the margin engine with its risk parameters.
    ///
    /// # Arguments
    /// - `liquidation_spread`: Raw WAD reward of a liquidation, at most 100%.
    /// - `margin_ratio`: Raw WAD collateral surplus, between 1% and 200%.
    /// - `earnings_rate`: Raw WAD share of borrow interest paid to suppliers.
    /// - `expiration_ramp_seconds`: Time for an expiration reward to reach the full spread.
    #[init]
    fn init(
        &self,
        liquidation_spread: BigUint,
        margin_ratio: BigUint,
        earnings_rate: BigUint,
        expiration_ramp_seconds: u64,
    ) {
        self.set_risk_params(
            liquidation_spread,
            margin_ratio,
            earnings_rate,
            expiration_ramp_seconds,
        );
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Sizes a liquidation without moving any balance.
    ///
    /// # Arguments
    /// - `solid_owner`, `solid_number`: Liquidator account, owned by or operated for the caller.
    /// - `liquid_owner`, `liquid_number`: Account being liquidated.
    /// - `held_market`: Collateral market the liquidator receives.
    /// - `owed_market`: Debt market the liquidator repays.
    /// - `expiry`: Zero for an under-collateralized account, otherwise the expiry on record.
    /// - `opt_input_held_wei`: Most collateral the liquidator wants, `None` for all.
    /// - `opt_min_output_owed_wei`: Most debt the liquidator repays, `None` for all.
    ///
    /// # Returns
    /// - `(input_held_wei, min_output_owed_wei)`: Amounts for the settlement layer.
    #[endpoint(getLiquidationAmounts)]
    fn get_liquidation_amounts(
        &self,
        solid_owner: ManagedAddress,
        solid_number: u64,
        liquid_owner: ManagedAddress,
        liquid_number: u64,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
        opt_input_held_wei: Option<BigUint>,
        opt_min_output_owed_wei: Option<BigUint>,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let solid = AccountInfo::new(solid_owner, solid_number);
        let liquid = AccountInfo::new(liquid_owner, liquid_number);

        let amounts = self.process_liquidation_sizing(
            &caller,
            &solid,
            &liquid,
            held_market,
            owed_market,
            expiry,
            opt_input_held_wei,
            opt_min_output_owed_wei,
        );

        self.liquidation_amounts_event(
            &caller,
            &solid,
            &liquid,
            held_market,
            owed_market,
            expiry,
            &amounts,
        );

        (amounts.input_held_wei, amounts.min_output_owed_wei).into()
    }

    /// Persists the accrued index of the given markets.
    #[endpoint(updateIndexes)]
    fn update_indexes(&self, market_ids: MultiValueEncoded<u32>) {
        for market_id in market_ids {
            self.require_market_supported(market_id);
            self.accrue_market_index(market_id);
        }
    }
}
