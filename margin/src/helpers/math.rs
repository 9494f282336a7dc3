use common_constants::WAD;
use common_structs::LiquidationCache;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    /// Combines the protocol spread with the margin premiums of both markets.
    ///
    /// Premiums are additive: `spread + premium(held) + premium(owed)`.
    fn pair_spread(
        &self,
        liquidation_spread: &ManagedDecimal<Self::Api, NumDecimals>,
        held_premium: &ManagedDecimal<Self::Api, NumDecimals>,
        owed_premium: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.rescale_wad(liquidation_spread)
            + self.rescale_wad(held_premium)
            + self.rescale_wad(owed_premium)
    }

    /// Spread of an expiration liquidation at `timestamp`.
    ///
    /// Grows linearly from zero at `expiry` to `full_spread` once `ramp_seconds`
    /// have elapsed, rounded down. A zero ramp applies the full spread at once.
    fn expiry_spread(
        &self,
        full_spread: &ManagedDecimal<Self::Api, NumDecimals>,
        expiry: u64,
        timestamp: u64,
        ramp_seconds: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let full_spread = self.rescale_wad(full_spread);
        if ramp_seconds == 0 {
            return full_spread;
        }

        let elapsed = core::cmp::min(timestamp.saturating_sub(expiry), ramp_seconds);
        let effective = self.get_partial(
            full_spread.into_raw_units(),
            &BigUint::from(elapsed),
            &BigUint::from(ramp_seconds),
        );

        self.to_decimal_wad(effective)
    }

    /// `owed_price * (1 + spread)`, rounded down.
    fn owed_price_adjusted(
        &self,
        owed_price: &BigUint,
        spread: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        owed_price + &self.mul_fraction(owed_price, spread)
    }

    /// Sizes the largest liquidation the liquid account supports.
    ///
    /// **Formula**:
    /// - `held * held_price >= owed * owed_price_adj`: the whole debt is repaid and
    ///   `floor(owed * owed_price_adj / held_price)` collateral is seized.
    /// - Otherwise all collateral is seized against
    ///   `ceil(held * held_price / owed_price_adj)` debt and the markets are flagged
    ///   for a follow-up pass.
    ///
    /// Both roundings leave the protocol with at least as much value as it hands out.
    fn calculate_max_liquidation_amount(&self, cache: &mut LiquidationCache<Self::Api>) {
        let liquid_held = &cache.liquid_held_wei.value;
        let liquid_owed = &cache.liquid_owed_wei.value;

        let held_value = liquid_held * &cache.held_price;
        let owed_value = liquid_owed * &cache.owed_price_adj;

        if held_value >= owed_value {
            cache.solid_held_update_with_reward =
                self.get_partial(liquid_owed, &cache.owed_price_adj, &cache.held_price);
            cache.owed_wei_to_liquidate = liquid_owed.clone();
            cache.flip_markets_for_expiration = false;
        } else {
            cache.owed_wei_to_liquidate =
                self.get_partial_round_up(liquid_held, &cache.held_price, &cache.owed_price_adj);
            cache.solid_held_update_with_reward = liquid_held.clone();
            cache.flip_markets_for_expiration = true;
        }
    }

    /// Clamps the liquidator's bounds to the sized maximum.
    ///
    /// `None` asks for the maximum on that side. The side that is relatively
    /// smaller against its maximum wins and the other side is derived from the
    /// maximum held:owed ratio: owed is rounded up, held is rounded down.
    ///
    /// # Returns
    /// - `(input_held_wei, min_output_owed_wei)`, also written back to the cache.
    fn calculate_and_set_actual_liquidation_amount(
        &self,
        opt_input_held_wei: Option<BigUint>,
        opt_min_output_owed_wei: Option<BigUint>,
        cache: &mut LiquidationCache<Self::Api>,
    ) -> (BigUint, BigUint) {
        let max_held = cache.solid_held_update_with_reward.clone();
        let max_owed = cache.owed_wei_to_liquidate.clone();

        if max_held == 0u64 || max_owed == 0u64 {
            cache.solid_held_update_with_reward = BigUint::zero();
            cache.owed_wei_to_liquidate = BigUint::zero();
            return (BigUint::zero(), BigUint::zero());
        }

        let new_input = match opt_input_held_wei {
            Some(requested) => self.get_min(requested, max_held.clone()),
            None => max_held.clone(),
        };
        let new_min_output = match opt_min_output_owed_wei {
            Some(requested) => self.get_min(requested, max_owed.clone()),
            None => max_owed.clone(),
        };

        let (held, owed) = if &new_input * &max_owed < &new_min_output * &max_held {
            let owed = self.get_partial_round_up(&max_owed, &new_input, &max_held);
            (new_input, owed)
        } else {
            let held = self.get_partial(&max_held, &new_min_output, &max_owed);
            (held, new_min_output)
        };

        cache.solid_held_update_with_reward = held.clone();
        cache.owed_wei_to_liquidate = owed.clone();

        (held, owed)
    }

    /// `supply_value * WAD >= borrow_value * (WAD + margin_ratio)`.
    fn is_collateralized(
        &self,
        supply_value: &BigUint,
        borrow_value: &BigUint,
        margin_ratio: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> bool {
        if borrow_value == &BigUint::zero() {
            return true;
        }

        let wad = BigUint::from(WAD);
        let required = self.one_plus(margin_ratio);

        supply_value * &wad >= borrow_value * required.into_raw_units()
    }
}
