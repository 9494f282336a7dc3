#![no_std]

use common_constants::{WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Fixed point helpers shared by the rate and liquidation modules.
///
/// Every helper states its rounding direction in its name: the plain variant
/// rounds down, `_round_up` rounds up. Callers pick the direction that leaves
/// the protocol whole.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `floor(target * numerator / denominator)`.
    fn get_partial(
        &self,
        target: &BigUint,
        numerator: &BigUint,
        denominator: &BigUint,
    ) -> BigUint {
        (target * numerator) / denominator
    }

    /// `ceil(target * numerator / denominator)`.
    fn get_partial_round_up(
        &self,
        target: &BigUint,
        numerator: &BigUint,
        denominator: &BigUint,
    ) -> BigUint {
        if target == &BigUint::zero() || numerator == &BigUint::zero() {
            // Keep the division even for zero inputs so a zero denominator still fails.
            return BigUint::zero() / denominator;
        }

        let one = BigUint::from(1u64);
        let product = target * numerator;
        (product - &one) / denominator + one
    }

    /// Applies a WAD fraction to an amount, rounding down.
    fn mul_fraction(
        &self,
        target: &BigUint,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let fraction = self.rescale_wad(fraction);
        self.get_partial(target, fraction.into_raw_units(), &BigUint::from(WAD))
    }

    /// Applies a WAD fraction to an amount, rounding up.
    fn mul_fraction_round_up(
        &self,
        target: &BigUint,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let fraction = self.rescale_wad(fraction);
        self.get_partial_round_up(target, fraction.into_raw_units(), &BigUint::from(WAD))
    }

    /// `1 + fraction`, in WAD precision.
    fn one_plus(
        &self,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.wad() + self.rescale_wad(fraction)
    }

    fn rescale_wad(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if value.scale() == WAD_PRECISION {
            return value.clone();
        }

        value.clone().rescale(WAD_PRECISION)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
