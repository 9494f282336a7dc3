#![no_std]

use common_constants::INDEX_BASE;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A margin account: one owner can hold any number of numbered accounts.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct AccountInfo<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub number: u64,
}

impl<M: ManagedTypeApi> AccountInfo<M> {
    pub fn new(owner: ManagedAddress<M>, number: u64) -> Self {
        AccountInfo { owner, number }
    }
}

/// Interest-index-normalized principal. Zero never carries a sign.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct Par<M: ManagedTypeApi> {
    pub sign: bool,
    pub value: BigUint<M>,
}

impl<M: ManagedTypeApi> Par<M> {
    pub fn new(sign: bool, value: BigUint<M>) -> Self {
        let sign = sign && value > 0u64;
        Par { sign, value }
    }

    pub fn zero() -> Self {
        Par {
            sign: false,
            value: BigUint::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0u64
    }

    pub fn is_positive(&self) -> bool {
        self.sign && !self.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.sign && !self.is_zero()
    }
}

impl<M: ManagedTypeApi> Default for Par<M> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Liability-adjusted balance, the unit liquidations settle in.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct Wei<M: ManagedTypeApi> {
    pub sign: bool,
    pub value: BigUint<M>,
}

impl<M: ManagedTypeApi> Wei<M> {
    pub fn new(sign: bool, value: BigUint<M>) -> Self {
        let sign = sign && value > 0u64;
        Wei { sign, value }
    }

    pub fn zero() -> Self {
        Wei {
            sign: false,
            value: BigUint::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0u64
    }

    pub fn is_positive(&self) -> bool {
        self.sign && !self.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.sign && !self.is_zero()
    }
}

impl<M: ManagedTypeApi> Default for Wei<M> {
    fn default() -> Self {
        Self::zero()
    }
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct MarketIndex<M: ManagedTypeApi> {
    pub borrow: BigUint<M>,
    pub supply: BigUint<M>,
    pub last_update: u64,
}

impl<M: ManagedTypeApi> MarketIndex<M> {
    /// Fresh market: both indexes at `INDEX_BASE`.
    pub fn new_base(timestamp: u64) -> Self {
        MarketIndex {
            borrow: BigUint::from(INDEX_BASE),
            supply: BigUint::from(INDEX_BASE),
            last_update: timestamp,
        }
    }
}

/// Aggregate principal of a market, split by sign.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct TotalPar<M: ManagedTypeApi> {
    pub borrow: BigUint<M>,
    pub supply: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for TotalPar<M> {
    fn default() -> Self {
        TotalPar {
            borrow: BigUint::zero(),
            supply: BigUint::zero(),
        }
    }
}

/// One entry of the per-call market snapshot.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct MarketInfo<M: ManagedTypeApi> {
    pub market_id: u32,
    pub price: BigUint<M>,
    pub index: MarketIndex<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct OracleConfig<M: ManagedTypeApi> {
    pub max_price_stale_seconds: u64,
    /// Largest relative move accepted between two submissions, zero disables the check.
    pub max_deviation: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub margin_premium: ManagedDecimal<M, NumDecimals>,
    /// Per-second borrow rate used for index accrual.
    pub borrow_rate: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RiskParams<M: ManagedTypeApi> {
    pub liquidation_spread: ManagedDecimal<M, NumDecimals>,
    pub margin_ratio: ManagedDecimal<M, NumDecimals>,
    pub earnings_rate: ManagedDecimal<M, NumDecimals>,
    pub expiration_ramp_seconds: u64,
}

/// Transient state of a single liquidation sizing call.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct LiquidationCache<M: ManagedTypeApi> {
    pub held_price: BigUint<M>,
    pub owed_price: BigUint<M>,
    pub owed_price_adj: BigUint<M>,
    pub solid_held_wei: Wei<M>,
    pub solid_owed_wei: Wei<M>,
    pub liquid_held_wei: Wei<M>,
    pub liquid_owed_wei: Wei<M>,
    pub owed_wei_to_liquidate: BigUint<M>,
    pub solid_held_update_with_reward: BigUint<M>,
    pub flip_markets_for_expiration: bool,
}

impl<M: ManagedTypeApi> LiquidationCache<M> {
    pub fn new(
        held_price: BigUint<M>,
        owed_price: BigUint<M>,
        owed_price_adj: BigUint<M>,
        solid_held_wei: Wei<M>,
        solid_owed_wei: Wei<M>,
        liquid_held_wei: Wei<M>,
        liquid_owed_wei: Wei<M>,
    ) -> Self {
        LiquidationCache {
            held_price,
            owed_price,
            owed_price_adj,
            solid_held_wei,
            solid_owed_wei,
            liquid_held_wei,
            liquid_owed_wei,
            owed_wei_to_liquidate: BigUint::zero(),
            solid_held_update_with_reward: BigUint::zero(),
            flip_markets_for_expiration: false,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct AccountValues<M: ManagedTypeApi> {
    pub supply_value: BigUint<M>,
    pub borrow_value: BigUint<M>,
}

/// Result of a sizing call, as handed to the settlement layer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct LiquidationAmounts<M: ManagedTypeApi> {
    pub input_held_wei: BigUint<M>,
    pub min_output_owed_wei: BigUint<M>,
    pub flip_markets_for_expiration: bool,
}
