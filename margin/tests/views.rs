use margin::views::ViewsModule;
use multiversx_sc::types::{BigUint, ManagedAddress, MultiValueEncoded};
use multiversx_sc_scenario::{DebugApi, ScenarioTxWhitebox};

pub mod setup;

use constants::*;
use setup::*;

fn borrower_with_debt(owed_par: u128) -> MarginTestState {
    let mut state = MarginTestState::new();
    state.set_par(BORROWER_ADDRESS, HELD_MARKET, true, WAD);
    state.set_par(BORROWER_ADDRESS, OWED_MARKET, false, owed_par);
    state
}

fn borrower() -> ManagedAddress<DebugApi> {
    ManagedAddress::from(BORROWER_ADDRESS.to_address())
}

#[test]
fn test_account_values() {
    let mut state = borrower_with_debt(WAD / 2);
    state.edit_market(OWED_MARKET, WAD / 10, 0, 900, 0);

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            let wad = BigUint::from(WAD);

            let (supply, borrow) = sc.get_account_values_view(borrower(), 0).into_tuple();
            assert_eq!(supply, BigUint::from(HELD_PRICE) * &wad);
            assert_eq!(borrow, BigUint::from(OWED_PRICE / 2) * &wad);

            // Premium only scales the borrow side
            let (supply, borrow) = sc
                .get_adjusted_account_values_view(borrower(), 0)
                .into_tuple();
            assert_eq!(supply, BigUint::from(HELD_PRICE) * &wad);
            assert_eq!(borrow, BigUint::from(OWED_PRICE * 11 / 20) * &wad);
        });
}

#[test]
fn test_empty_account_values() {
    let mut state = MarginTestState::new();

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            let (supply, borrow) = sc.get_account_values_view(borrower(), 0).into_tuple();
            assert_eq!(supply, BigUint::zero());
            assert_eq!(borrow, BigUint::zero());
            assert!(sc.is_account_collateralized_view(borrower(), 0));
        });
}

#[test]
fn test_collateralization_views() {
    let mut state = borrower_with_debt(WAD / 2);

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            assert!(sc.is_account_collateralized_view(borrower(), 0));
            assert!(!sc.can_be_liquidated(borrower(), 0, OWED_MARKET));
        });

    state.set_par(BORROWER_ADDRESS, OWED_MARKET, false, WAD * 85 / 100);
    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            assert!(!sc.is_account_collateralized_view(borrower(), 0));
            assert!(sc.can_be_liquidated(borrower(), 0, OWED_MARKET));
        });
}

#[test]
fn test_can_be_liquidated_once_expired() {
    let mut state = borrower_with_debt(WAD / 2);
    let expiry = START_TIMESTAMP + 100;
    state.set_expiry(BORROWER_ADDRESS, BORROWER_ADDRESS, OWED_MARKET, expiry);

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            assert!(!sc.can_be_liquidated(borrower(), 0, OWED_MARKET));
        });

    state.set_timestamp(expiry);
    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            assert!(sc.is_account_collateralized_view(borrower(), 0));
            assert!(sc.can_be_liquidated(borrower(), 0, OWED_MARKET));
            assert!(!sc.can_be_liquidated(borrower(), 0, HELD_MARKET));
        });
}

#[test]
fn test_market_infos_sorted_and_deduplicated() {
    let mut state = MarginTestState::new();

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            let mut ids = MultiValueEncoded::new();
            for id in [OWED_MARKET, HELD_MARKET, OWED_MARKET] {
                ids.push(id);
            }

            let infos = sc.get_market_infos(ids);
            assert_eq!(infos.len(), 2);

            let first = infos.get(0);
            let second = infos.get(1);
            assert_eq!(first.market_id, HELD_MARKET);
            assert_eq!(first.price, BigUint::from(HELD_PRICE));
            assert_eq!(second.market_id, OWED_MARKET);
            assert_eq!(second.price, BigUint::from(OWED_PRICE));
            assert_eq!(second.index.borrow, BigUint::from(WAD));
        });
}

#[test]
fn test_spread_and_adjusted_price_views() {
    let mut state = MarginTestState::new();
    state.edit_market(HELD_MARKET, WAD / 50, 0, 900, 0);
    state.edit_market(OWED_MARKET, WAD * 3 / 100, 0, 900, 0);

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            let spread = sc.get_market_pair_spread_view(HELD_MARKET, OWED_MARKET);
            assert_eq!(spread.into_raw_units(), &BigUint::from(WAD / 10));

            let adjusted = sc.get_owed_price_adjusted_view(HELD_MARKET, OWED_MARKET, 0);
            assert_eq!(adjusted, BigUint::from(OWED_PRICE + OWED_PRICE / 10));
        });
}

#[test]
fn test_operator_views() {
    let mut state = MarginTestState::new();
    state.trust_operator(BORROWER_ADDRESS, OPERATOR_ADDRESS);

    state
        .world
        .query()
        .to(MARGIN_ADDRESS)
        .whitebox(margin::contract_obj, |sc| {
            let operator = ManagedAddress::from(OPERATOR_ADDRESS.to_address());
            let liquidator = ManagedAddress::from(LIQUIDATOR_ADDRESS.to_address());

            assert!(sc.is_operator(borrower(), operator.clone()));
            assert!(sc.is_operator(borrower(), borrower()));
            assert!(!sc.is_operator(borrower(), liquidator.clone()));
            // Trust is per owner
            assert!(!sc.is_operator(liquidator, operator));
        });
}
