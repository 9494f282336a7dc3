use crate::constants::*;

use margin::{
    config::ConfigModule, ledger::LedgerModule, oracle::OracleModule,
    positions::expiry::PositionExpiryModule, *,
};
use multiversx_sc::{
    imports::{MultiValue2, OptionalValue},
    types::{BigUint, ManagedAddress, MultiValueEncoded},
};
use multiversx_sc_scenario::{
    imports::{ExpectMessage, TestAddress},
    ScenarioTxWhitebox, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(MARGIN_PATH, margin::ContractBuilder);

    blockchain
}

pub fn error_message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub struct MarginTestState {
    pub world: ScenarioWorld,
    pub timestamp: u64,
}

impl MarginTestState {
    /// Deploys the engine with two zero-rate markets priced at 1830 and 1925,
    /// one ledger and one oracle.
    pub fn new() -> Self {
        let mut world = world();
        for account in [
            OWNER_ADDRESS,
            LEDGER_ADDRESS,
            ORACLE_ADDRESS,
            LIQUIDATOR_ADDRESS,
            OPERATOR_ADDRESS,
            BORROWER_ADDRESS,
            SUPPLIER_ADDRESS,
        ] {
            world.account(account).nonce(1);
        }
        world.current_block().block_timestamp(START_TIMESTAMP);

        world
            .tx()
            .from(OWNER_ADDRESS)
            .raw_deploy()
            .code(MARGIN_PATH)
            .new_address(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.init(
                    BigUint::from(LIQUIDATION_SPREAD),
                    BigUint::from(MARGIN_RATIO),
                    BigUint::from(EARNINGS_RATE),
                    EXPIRATION_RAMP_SECONDS,
                );

                let mut ledgers = MultiValueEncoded::new();
                ledgers.push(ManagedAddress::from(LEDGER_ADDRESS.to_address()));
                sc.add_ledgers(ledgers);

                let mut oracles = MultiValueEncoded::new();
                oracles.push(ManagedAddress::from(ORACLE_ADDRESS.to_address()));
                sc.add_oracles(oracles);
            });

        let mut state = Self {
            world,
            timestamp: START_TIMESTAMP,
        };
        state.add_market(HELD_MARKET, 0, 0);
        state.add_market(OWED_MARKET, 0, 0);
        state.submit_price(HELD_MARKET, HELD_PRICE);
        state.submit_price(OWED_MARKET, OWED_PRICE);

        state
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
        self.world.current_block().block_timestamp(timestamp);
    }

    /// Lists a market with default oracle settings.
    pub fn add_market(&mut self, market_id: u32, margin_premium: u128, borrow_rate: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.add_market(
                    market_id,
                    BigUint::from(margin_premium),
                    BigUint::from(borrow_rate),
                    OptionalValue::None,
                    OptionalValue::None,
                );
            });
    }

    pub fn edit_market(
        &mut self,
        market_id: u32,
        margin_premium: u128,
        borrow_rate: u128,
        max_price_stale_seconds: u64,
        max_deviation: u128,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.edit_market(
                    market_id,
                    BigUint::from(margin_premium),
                    BigUint::from(borrow_rate),
                    max_price_stale_seconds,
                    BigUint::from(max_deviation),
                );
            });
    }

    /// Submits a price observed at the current block.
    pub fn submit_price(&mut self, market_id: u32, price: u128) {
        let timestamp = self.timestamp;
        self.world
            .tx()
            .from(ORACLE_ADDRESS)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.submit_price(market_id, timestamp, BigUint::from(price));
            });
    }

    pub fn submit_price_error(
        &mut self,
        from: TestAddress,
        market_id: u32,
        timestamp: u64,
        price: u128,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(MARGIN_ADDRESS)
            .returns(ExpectMessage(error_message(error)))
            .whitebox(margin::contract_obj, |sc| {
                sc.submit_price(market_id, timestamp, BigUint::from(price));
            });
    }

    /// Pushes a Par balance for account number 0 of `owner`.
    pub fn set_par(&mut self, owner: TestAddress, market_id: u32, sign: bool, value: u128) {
        self.world
            .tx()
            .from(LEDGER_ADDRESS)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.set_account_par(
                    ManagedAddress::from(owner.to_address()),
                    0,
                    market_id,
                    sign,
                    BigUint::from(value),
                );
            });
    }

    pub fn set_market_index(&mut self, market_id: u32, borrow_index: u128, supply_index: u128) {
        self.world
            .tx()
            .from(LEDGER_ADDRESS)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.set_market_index(
                    market_id,
                    BigUint::from(borrow_index),
                    BigUint::from(supply_index),
                );
            });
    }

    pub fn set_expiry(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        market_id: u32,
        expiry: u64,
    ) {
        self.world
            .tx()
            .from(from)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                sc.set_expiry(ManagedAddress::from(owner.to_address()), 0, market_id, expiry);
            });
    }

    pub fn set_expiry_error(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        market_id: u32,
        expiry: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(MARGIN_ADDRESS)
            .returns(ExpectMessage(error_message(error)))
            .whitebox(margin::contract_obj, |sc| {
                sc.set_expiry(ManagedAddress::from(owner.to_address()), 0, market_id, expiry);
            });
    }

    pub fn trust_operator(&mut self, owner: TestAddress, operator: TestAddress) {
        self.world
            .tx()
            .from(owner)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                let mut operators = MultiValueEncoded::new();
                operators.push(MultiValue2::from((
                    ManagedAddress::from(operator.to_address()),
                    true,
                )));
                sc.set_operators(operators);
            });
    }

    /// Sizes a liquidation of the borrower by the liquidator (both account 0)
    /// and checks the returned amounts.
    #[allow(clippy::too_many_arguments)]
    pub fn check_liquidation_amounts(
        &mut self,
        caller: TestAddress,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
        opt_input_held_wei: Option<u128>,
        opt_min_output_owed_wei: Option<u128>,
        expected_input_held_wei: u128,
        expected_min_output_owed_wei: u128,
    ) {
        self.world
            .tx()
            .from(caller)
            .to(MARGIN_ADDRESS)
            .whitebox(margin::contract_obj, |sc| {
                let (input_held_wei, min_output_owed_wei) = sc
                    .get_liquidation_amounts(
                        ManagedAddress::from(LIQUIDATOR_ADDRESS.to_address()),
                        0,
                        ManagedAddress::from(BORROWER_ADDRESS.to_address()),
                        0,
                        held_market,
                        owed_market,
                        expiry,
                        opt_input_held_wei.map(BigUint::from),
                        opt_min_output_owed_wei.map(BigUint::from),
                    )
                    .into_tuple();

                assert_eq!(input_held_wei, BigUint::from(expected_input_held_wei));
                assert_eq!(
                    min_output_owed_wei,
                    BigUint::from(expected_min_output_owed_wei)
                );
            });
    }

    pub fn liquidation_amounts_error(
        &mut self,
        caller: TestAddress,
        held_market: u32,
        owed_market: u32,
        expiry: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(MARGIN_ADDRESS)
            .returns(ExpectMessage(error_message(error)))
            .whitebox(margin::contract_obj, |sc| {
                let _ = sc.get_liquidation_amounts(
                    ManagedAddress::from(LIQUIDATOR_ADDRESS.to_address()),
                    0,
                    ManagedAddress::from(BORROWER_ADDRESS.to_address()),
                    0,
                    held_market,
                    owed_market,
                    expiry,
                    None,
                    None,
                );
            });
    }
}

impl Default for MarginTestState {
    fn default() -> Self {
        Self::new()
    }
}
