#![no_std]
use common_constants::{INDEX_BASE, WAD};
use common_structs::{MarketIndex, Par, TotalPar, Wei};

multiversx_sc::imports!();

/// The InterestRates module converts balances between Par and Wei through the
/// market interest indexes and accrues those indexes over time.
///
/// **Scope**: Every conversion between the stored, index-normalized principal (Par)
/// and the liability-adjusted amount (Wei) goes through this module.
///
/// **Goal**: Both directions round down, so Par is always the floor of
/// `wei * INDEX_BASE / index` and converting back never creates Wei.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Converts a signed Par balance to Wei.
    ///
    /// **Formula**:
    /// - Positive: `floor(par * supply_index / INDEX_BASE)`.
    /// - Negative: `floor(par * borrow_index / INDEX_BASE)`.
    ///
    /// # Arguments
    /// - `index`: Market index the balance is valued at.
    /// - `par`: Signed principal.
    ///
    /// # Returns
    /// - `Wei<Self::Api>`: Same sign as `par`, canonical zero for a zero input.
    fn par_to_wei(&self, index: &MarketIndex<Self::Api>, par: &Par<Self::Api>) -> Wei<Self::Api> {
        if par.is_zero() {
            return Wei::zero();
        }

        let base = BigUint::from(INDEX_BASE);
        let index_value = if par.sign { &index.supply } else { &index.borrow };

        Wei::new(par.sign, self.get_partial(&par.value, index_value, &base))
    }

    /// Converts a signed Wei amount to Par.
    ///
    /// **Formula**:
    /// - Positive: `floor(wei * INDEX_BASE / supply_index)`.
    /// - Negative: `floor(wei * INDEX_BASE / borrow_index)`.
    ///
    /// # Returns
    /// - `Par<Self::Api>`: Same sign as `wei`, canonical zero for a zero input.
    fn wei_to_par(&self, index: &MarketIndex<Self::Api>, wei: &Wei<Self::Api>) -> Par<Self::Api> {
        if wei.is_zero() {
            return Par::zero();
        }

        let base = BigUint::from(INDEX_BASE);
        let index_value = if wei.sign { &index.supply } else { &index.borrow };

        Par::new(wei.sign, self.get_partial(&wei.value, &base, index_value))
    }

    /// Values the aggregate principal of a market.
    ///
    /// # Returns
    /// - `(borrow_wei, supply_wei)`: both rounded down.
    fn total_par_to_wei(
        &self,
        index: &MarketIndex<Self::Api>,
        total_par: &TotalPar<Self::Api>,
    ) -> (BigUint, BigUint) {
        let borrow_wei = self.par_to_wei(index, &Par::new(false, total_par.borrow.clone()));
        let supply_wei = self.par_to_wei(index, &Par::new(true, total_par.supply.clone()));

        (borrow_wei.value, supply_wei.value)
    }

    /// Accrues both indexes of a market up to `timestamp`.
    ///
    /// **Scope**: Linear interest between `index.last_update` and `timestamp`.
    ///
    /// **Formula**:
    /// - `borrow_interest = borrow_rate * elapsed_seconds`.
    /// - `supply_interest = borrow_interest * earnings_rate`, scaled by
    ///   `borrow_wei / supply_wei` when the market is not fully utilized.
    /// - `new_index = index + floor(index * interest / WAD)`.
    ///
    /// A market without borrows pays nothing to suppliers. A timestamp that is
    /// not after `last_update` returns the index untouched.
    ///
    /// # Arguments
    /// - `index`: Last persisted index.
    /// - `borrow_rate`: Per-second borrow rate.
    /// - `total_par`: Aggregate principal used for the utilization scaling.
    /// - `earnings_rate`: Share of borrow interest passed to suppliers.
    /// - `timestamp`: Target time, in seconds.
    fn calculate_new_index(
        &self,
        index: &MarketIndex<Self::Api>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        total_par: &TotalPar<Self::Api>,
        earnings_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        timestamp: u64,
    ) -> MarketIndex<Self::Api> {
        if timestamp <= index.last_update {
            return index.clone();
        }

        let elapsed = timestamp - index.last_update;
        let wad = BigUint::from(WAD);

        let borrow_rate = self.rescale_wad(borrow_rate);
        let borrow_interest = borrow_rate.into_raw_units() * &BigUint::from(elapsed);

        let (borrow_wei, supply_wei) = self.total_par_to_wei(index, total_par);
        let supply_interest = if borrow_wei == 0u64 {
            BigUint::zero()
        } else {
            let earned = self.mul_fraction(&borrow_interest, earnings_rate);
            if borrow_wei < supply_wei {
                self.get_partial(&earned, &borrow_wei, &supply_wei)
            } else {
                earned
            }
        };

        let borrow = &index.borrow + &self.get_partial(&index.borrow, &borrow_interest, &wad);
        let supply = &index.supply + &self.get_partial(&index.supply, &supply_interest, &wad);

        MarketIndex {
            borrow,
            supply,
            last_update: timestamp,
        }
    }
}
