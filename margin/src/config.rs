multiversx_sc::imports!();

use crate::oracle;
use crate::storage;
use crate::validation;
use common_constants::{
    DEFAULT_MAX_PRICE_STALE_SECONDS, MAX_BORROW_RATE_PER_SECOND, MAX_EARNINGS_RATE,
    MAX_EXPIRATION_RAMP_SECONDS, MAX_LIQUIDATION_SPREAD, MAX_MARGIN_PREMIUM, MAX_MARGIN_RATIO,
    MAX_PRICE_DEVIATION, MIN_MARGIN_RATIO,
};
use common_errors::*;
pub use common_events::*;

/// Configuration module of the margin engine.
///
/// Governs the protocol-wide risk parameters, the supported markets and the
/// trusted addresses: ledgers pushing balances, oracles pushing prices and
/// operators liquidating on behalf of account owners.
///
/// # Security Considerations
/// Everything here except `setOperators` is restricted to the contract owner.
/// Fractions are passed as raw WAD values (`1e18` is 100%) and bounded before
/// they are stored.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + oracle::OracleModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Validates and stores the risk parameters.
    fn set_risk_params(
        &self,
        liquidation_spread: BigUint,
        margin_ratio: BigUint,
        earnings_rate: BigUint,
        expiration_ramp_seconds: u64,
    ) {
        self.require_fraction_in_range(
            &liquidation_spread,
            0,
            MAX_LIQUIDATION_SPREAD,
            ERROR_INVALID_LIQUIDATION_SPREAD,
        );
        self.require_fraction_in_range(
            &margin_ratio,
            MIN_MARGIN_RATIO,
            MAX_MARGIN_RATIO,
            ERROR_INVALID_MARGIN_RATIO,
        );
        self.require_fraction_in_range(
            &earnings_rate,
            0,
            MAX_EARNINGS_RATE,
            ERROR_INVALID_EARNINGS_RATE,
        );
        require!(
            expiration_ramp_seconds <= MAX_EXPIRATION_RAMP_SECONDS,
            ERROR_INVALID_RAMP_TIME
        );

        let params = RiskParams {
            liquidation_spread: self.to_decimal_wad(liquidation_spread),
            margin_ratio: self.to_decimal_wad(margin_ratio),
            earnings_rate: self.to_decimal_wad(earnings_rate),
            expiration_ramp_seconds,
        };

        self.update_risk_params_event(&params);
        self.risk_params().set(params);
    }

    /// Sets the base reward of a liquidation.
    ///
    /// # Arguments
    /// - `liquidation_spread`: Raw WAD fraction, at most 100%.
    #[only_owner]
    #[endpoint(setLiquidationSpread)]
    fn set_liquidation_spread(&self, liquidation_spread: BigUint) {
        let params = self.risk_params().get();
        self.set_risk_params(
            liquidation_spread,
            params.margin_ratio.into_raw_units().clone(),
            params.earnings_rate.into_raw_units().clone(),
            params.expiration_ramp_seconds,
        );
    }

    /// Sets the collateral surplus an account must keep over its borrows.
    ///
    /// # Arguments
    /// - `margin_ratio`: Raw WAD fraction between 1% and 200%.
    #[only_owner]
    #[endpoint(setMarginRatio)]
    fn set_margin_ratio(&self, margin_ratio: BigUint) {
        let params = self.risk_params().get();
        self.set_risk_params(
            params.liquidation_spread.into_raw_units().clone(),
            margin_ratio,
            params.earnings_rate.into_raw_units().clone(),
            params.expiration_ramp_seconds,
        );
    }

    /// Sets the share of borrow interest passed to suppliers.
    /// Every market is accrued at the old rate first.
    #[only_owner]
    #[endpoint(setEarningsRate)]
    fn set_earnings_rate(&self, earnings_rate: BigUint) {
        for market_id in self.markets().iter() {
            self.accrue_market_index(market_id);
        }

        let params = self.risk_params().get();
        self.set_risk_params(
            params.liquidation_spread.into_raw_units().clone(),
            params.margin_ratio.into_raw_units().clone(),
            earnings_rate,
            params.expiration_ramp_seconds,
        );
    }

    #[only_owner]
    #[endpoint(setExpirationRampTime)]
    fn set_expiration_ramp_time(&self, expiration_ramp_seconds: u64) {
        let params = self.risk_params().get();
        self.set_risk_params(
            params.liquidation_spread.into_raw_units().clone(),
            params.margin_ratio.into_raw_units().clone(),
            params.earnings_rate.into_raw_units().clone(),
            expiration_ramp_seconds,
        );
    }

    /// Lists a new market. Its indexes start at `INDEX_BASE`.
    ///
    /// # Arguments
    /// - `market_id`: New market id.
    /// - `margin_premium`: Raw WAD fraction added to the liquidation spread and
    ///   to the borrow value of collateralization checks.
    /// - `borrow_rate`: Raw WAD per-second borrow rate.
    /// - `opt_max_price_stale_seconds`: Staleness window, 15 minutes by default.
    /// - `opt_max_deviation`: Raw WAD bound between two price submissions, 0 disables it.
    ///
    /// # Errors
    /// - `ERROR_MARKET_ALREADY_SUPPORTED`.
    #[only_owner]
    #[endpoint(addMarket)]
    fn add_market(
        &self,
        market_id: u32,
        margin_premium: BigUint,
        borrow_rate: BigUint,
        opt_max_price_stale_seconds: OptionalValue<u64>,
        opt_max_deviation: OptionalValue<BigUint>,
    ) {
        require!(
            !self.markets().contains(&market_id),
            ERROR_MARKET_ALREADY_SUPPORTED
        );

        let timestamp = self.blockchain().get_block_timestamp();
        self.market_index(market_id)
            .set(MarketIndex::new_base(timestamp));
        self.total_par(market_id).set(TotalPar::default());
        self.markets().insert(market_id);

        self.store_market_config(
            market_id,
            margin_premium,
            borrow_rate,
            opt_max_price_stale_seconds
                .into_option()
                .unwrap_or(DEFAULT_MAX_PRICE_STALE_SECONDS),
            opt_max_deviation.into_option().unwrap_or_default(),
        );
    }

    /// Updates the configuration of a listed market. The index is accrued at the
    /// old borrow rate first.
    #[only_owner]
    #[endpoint(editMarket)]
    fn edit_market(
        &self,
        market_id: u32,
        margin_premium: BigUint,
        borrow_rate: BigUint,
        max_price_stale_seconds: u64,
        max_deviation: BigUint,
    ) {
        self.require_market_supported(market_id);
        self.accrue_market_index(market_id);

        self.store_market_config(
            market_id,
            margin_premium,
            borrow_rate,
            max_price_stale_seconds,
            max_deviation,
        );
    }

    fn store_market_config(
        &self,
        market_id: u32,
        margin_premium: BigUint,
        borrow_rate: BigUint,
        max_price_stale_seconds: u64,
        max_deviation: BigUint,
    ) {
        self.require_fraction_in_range(
            &margin_premium,
            0,
            MAX_MARGIN_PREMIUM,
            ERROR_INVALID_MARGIN_PREMIUM,
        );
        self.require_fraction_in_range(
            &borrow_rate,
            0,
            MAX_BORROW_RATE_PER_SECOND,
            ERROR_INVALID_BORROW_RATE,
        );
        self.require_fraction_in_range(
            &max_deviation,
            0,
            MAX_PRICE_DEVIATION,
            ERROR_INVALID_PRICE_DEVIATION,
        );
        require!(max_price_stale_seconds > 0, ERROR_INVALID_STALENESS);

        let config = MarketConfig {
            margin_premium: self.to_decimal_wad(margin_premium),
            borrow_rate: self.to_decimal_wad(borrow_rate),
        };
        let oracle_config = OracleConfig {
            max_price_stale_seconds,
            max_deviation: self.to_decimal_wad(max_deviation),
        };

        self.update_market_config_event(market_id, &config, &oracle_config);
        self.market_config(market_id).set(config);
        self.oracle_config(market_id).set(oracle_config);
    }

    #[only_owner]
    #[endpoint(addLedgers)]
    fn add_ledgers(&self, ledgers: MultiValueEncoded<ManagedAddress>) {
        for ledger in ledgers {
            self.require_non_zero_address(&ledger);
            self.ledgers().insert(ledger);
        }
    }

    #[only_owner]
    #[endpoint(removeLedgers)]
    fn remove_ledgers(&self, ledgers: MultiValueEncoded<ManagedAddress>) {
        for ledger in ledgers {
            self.ledgers().swap_remove(&ledger);
        }
    }

    #[only_owner]
    #[endpoint(addOracles)]
    fn add_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        for oracle in oracles {
            self.require_non_zero_address(&oracle);
            self.oracles().insert(oracle);
        }
    }

    #[only_owner]
    #[endpoint(removeOracles)]
    fn remove_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        for oracle in oracles {
            self.oracles().swap_remove(&oracle);
        }
    }

    /// Trusts or distrusts an operator for every account.
    #[only_owner]
    #[endpoint(setGlobalOperator)]
    fn set_global_operator(&self, operator: ManagedAddress, trusted: bool) {
        self.require_non_zero_address(&operator);
        if trusted {
            self.global_operators().insert(operator.clone());
        } else {
            self.global_operators().swap_remove(&operator);
        }

        self.set_operator_event(&ManagedAddress::zero(), &operator, trusted);
    }

    /// Lets the caller trust or distrust operators for its own accounts.
    #[endpoint(setOperators)]
    fn set_operators(&self, operators: MultiValueEncoded<MultiValue2<ManagedAddress, bool>>) {
        let caller = self.blockchain().get_caller();
        let mut local_operators = self.local_operators(&caller);
        for entry in operators {
            let (operator, trusted) = entry.into_tuple();
            self.require_non_zero_address(&operator);
            if trusted {
                local_operators.insert(operator.clone());
            } else {
                local_operators.swap_remove(&operator);
            }

            self.set_operator_event(&caller, &operator, trusted);
        }
    }
}
