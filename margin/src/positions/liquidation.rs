use common_constants::MAX_EXPIRY_TIMESTAMP;
use common_errors::{
    ERROR_ACCOUNT_NOT_LIQUIDATABLE, ERROR_BORROW_NOT_EXPIRED, ERROR_EXPIRY_MISMATCH,
    ERROR_EXPIRY_OVERFLOW, ERROR_HELD_BALANCE_NEGATIVE, ERROR_INVALID_PRICE,
    ERROR_OWED_BALANCE_POSITIVE, ERROR_SAME_ACCOUNT, ERROR_SAME_MARKET,
};
use common_structs::{AccountInfo, LiquidationAmounts, LiquidationCache};

use crate::{cache::Cache, helpers, oracle, storage, validation};

use super::{account, expiry};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + helpers::math::MathsModule
    + account::PositionAccountModule
    + expiry::PositionExpiryModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Sizes a liquidation of `liquid` by `solid` on a held/owed market pair.
    ///
    /// The snapshot covers the held and owed markets plus every market either
    /// account holds. Nothing is written: the result is handed to the settlement
    /// layer as is.
    ///
    /// # Arguments
    /// - `caller`: Liquidator, the solid owner or one of its operators.
    /// - `solid`, `liquid`: Liquidator and liquidated accounts.
    /// - `held_market`, `owed_market`: Collateral seized and debt repaid.
    /// - `expiry`: Zero for an under-collateralization liquidation, otherwise the
    ///   expiry the caller expects on record.
    /// - `opt_input_held_wei`, `opt_min_output_owed_wei`: Liquidator bounds,
    ///   `None` meaning "as much as possible".
    ///
    /// # Returns
    /// - `LiquidationAmounts`: Final held input, final owed output and the flip flag.
    #[allow(clippy::too_many_arguments)]
    fn process_liquidation_sizing(
        &self,
        caller: &ManagedAddress,
        solid: &AccountInfo<Self::Api>,
        liquid: &AccountInfo<Self::Api>,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
        opt_input_held_wei: Option<BigUint>,
        opt_min_output_owed_wei: Option<BigUint>,
    ) -> LiquidationAmounts<Self::Api> {
        let mut cache = Cache::new(self);
        cache.load_market(held_market);
        cache.load_market(owed_market);
        self.load_account_markets(&mut cache, solid);
        self.load_account_markets(&mut cache, liquid);

        let mut liquidation =
            self.initialize_cache(&cache, solid, liquid, held_market, owed_market, expiry);
        self.check_constants(
            &liquidation,
            held_market,
            owed_market,
            expiry,
            cache.current_timestamp,
        );
        self.check_basic_requirements(caller, solid, liquid, owed_market, expiry);

        if expiry == 0 {
            require!(
                !self.is_account_collateralized(&cache, liquid),
                ERROR_ACCOUNT_NOT_LIQUIDATABLE
            );
        }

        self.calculate_max_liquidation_amount(&mut liquidation);
        let (input_held_wei, min_output_owed_wei) = self
            .calculate_and_set_actual_liquidation_amount(
                opt_input_held_wei,
                opt_min_output_owed_wei,
                &mut liquidation,
            );

        LiquidationAmounts {
            input_held_wei,
            min_output_owed_wei,
            flip_markets_for_expiration: liquidation.flip_markets_for_expiration,
        }
    }

    /// Reads prices and balances from the snapshot and prices the owed market
    /// with the liquidation reward.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_FOUND`: A market is missing from the snapshot.
    /// - `ERROR_INVALID_PRICE`: A zero price.
    fn initialize_cache(
        &self,
        cache: &Cache<Self>,
        solid: &AccountInfo<Self::Api>,
        liquid: &AccountInfo<Self::Api>,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
    ) -> LiquidationCache<Self::Api> {
        let held_info = cache.get_market_info(held_market);
        let owed_info = cache.get_market_info(owed_market);
        require!(
            held_info.price > 0u64 && owed_info.price > 0u64,
            ERROR_INVALID_PRICE
        );

        let owed_price_adj = self.get_owed_price_adjusted(
            &owed_info.price,
            held_market,
            owed_market,
            expiry,
            cache,
        );

        LiquidationCache::new(
            held_info.price.clone(),
            owed_info.price.clone(),
            owed_price_adj,
            self.get_account_wei(solid, &held_info),
            self.get_account_wei(solid, &owed_info),
            self.get_account_wei(liquid, &held_info),
            self.get_account_wei(liquid, &owed_info),
        )
    }

    /// Reward-adjusted owed price.
    ///
    /// Without expiry the full pair spread applies; with an expiry the pair
    /// spread ramps up over `expiration_ramp_seconds` after the expiry.
    fn get_owed_price_adjusted(
        &self,
        owed_price: &BigUint,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
        cache: &Cache<Self>,
    ) -> BigUint {
        let pair_spread = self.get_market_pair_spread(cache, held_market, owed_market);
        let spread = if expiry == 0 {
            pair_spread
        } else {
            self.expiry_spread(
                &pair_spread,
                expiry,
                cache.current_timestamp,
                cache.risk_params.expiration_ramp_seconds,
            )
        };

        self.owed_price_adjusted(owed_price, &spread)
    }

    fn get_market_pair_spread(
        &self,
        cache: &Cache<Self>,
        held_market: u32,
        owed_market: u32,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let held_premium = self.market_config(held_market).get().margin_premium;
        let owed_premium = self.market_config(owed_market).get().margin_premium;

        self.pair_spread(
            &cache.risk_params.liquidation_spread,
            &held_premium,
            &owed_premium,
        )
    }

    /// Structural invariants of a liquidation.
    ///
    /// # Errors
    /// - `ERROR_SAME_MARKET`, `ERROR_OWED_BALANCE_POSITIVE`, `ERROR_HELD_BALANCE_NEGATIVE`.
    /// - `ERROR_EXPIRY_OVERFLOW`: `expiry` does not fit in 32 bits.
    /// - `ERROR_BORROW_NOT_EXPIRED`: `expiry` is in the future.
    fn check_constants(
        &self,
        liquidation: &LiquidationCache<Self::Api>,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
        timestamp: u64,
    ) {
        require!(held_market != owed_market, ERROR_SAME_MARKET);
        require!(
            !liquidation.liquid_owed_wei.is_positive(),
            ERROR_OWED_BALANCE_POSITIVE
        );
        require!(
            !liquidation.liquid_held_wei.is_negative(),
            ERROR_HELD_BALANCE_NEGATIVE
        );
        require!(expiry <= MAX_EXPIRY_TIMESTAMP, ERROR_EXPIRY_OVERFLOW);
        if expiry != 0 {
            require!(expiry <= timestamp, ERROR_BORROW_NOT_EXPIRED);
        }
    }

    /// Caller authorization and expiry agreement.
    ///
    /// # Errors
    /// - `ERROR_NOT_OPERATOR`: Caller can not act for the solid account.
    /// - `ERROR_SAME_ACCOUNT`: An account can not liquidate itself.
    /// - `ERROR_EXPIRY_MISMATCH`: A non-zero `expiry` differs from the one on record.
    fn check_basic_requirements(
        &self,
        caller: &ManagedAddress,
        solid: &AccountInfo<Self::Api>,
        liquid: &AccountInfo<Self::Api>,
        owed_market: u32,
        expiry: u64,
    ) {
        self.require_authorized(caller, &solid.owner);
        require!(solid != liquid, ERROR_SAME_ACCOUNT);

        if expiry != 0 {
            require!(
                self.get_expiry(liquid, owed_market) == expiry,
                ERROR_EXPIRY_MISMATCH
            );
        }
    }
}
