//! Property tests: cart invariants hold for arbitrary command sequences.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use cart::{
    CartAction, CartEnvironment, CartReducer, CartState, DecreasePolicy, Guitar, GuitarId,
    MAX_QUANTITY, MIN_QUANTITY,
};
use proptest::prelude::*;
use shelf_core::reducer::Reducer;
use shelf_core::snapshot::Snapshot;
use std::collections::HashSet;

fn price_of(id: u32) -> u32 {
    100 + id * 25
}

fn guitar(id: u32) -> Guitar {
    Guitar::new(id, format!("Guitar {id}"), price_of(id))
}

fn action_strategy() -> impl Strategy<Value = CartAction> {
    let id = 1u32..6;
    prop_oneof![
        4 => id.clone().prop_map(|id| CartAction::AddToCart { guitar: guitar(id) }),
        1 => id.clone().prop_map(|id| CartAction::RemoveFromCart { id: GuitarId::new(id) }),
        2 => id.clone().prop_map(|id| CartAction::IncreaseQuantity { id: GuitarId::new(id) }),
        2 => id.prop_map(|id| CartAction::DecreaseQuantity { id: GuitarId::new(id) }),
        1 => Just(CartAction::ClearCart),
    ]
}

fn policy_strategy() -> impl Strategy<Value = DecreasePolicy> {
    prop_oneof![
        Just(DecreasePolicy::FloorAtMinimum),
        Just(DecreasePolicy::RemoveAtMinimum),
    ]
}

fn run(actions: &[CartAction], policy: DecreasePolicy) -> CartState {
    let reducer = CartReducer::new();
    let env = CartEnvironment::new(policy);
    let mut state = CartState::new();
    for action in actions {
        let _ = reducer.reduce(&mut state, action.clone(), &env);
    }
    state
}

fn assert_well_formed(state: &CartState) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for item in state.items() {
        prop_assert!(seen.insert(item.id()), "duplicate line for {}", item.id());
        prop_assert!((MIN_QUANTITY..=MAX_QUANTITY).contains(&item.quantity));
    }

    let expected_total: u64 = state
        .items()
        .iter()
        .map(|item| u64::from(price_of(item.id().get())) * u64::from(item.quantity))
        .sum();
    prop_assert_eq!(state.total(), expected_total);
    prop_assert_eq!(state.is_empty(), state.len() == 0);
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(
        actions in prop::collection::vec(action_strategy(), 0..60),
        policy in policy_strategy(),
    ) {
        let state = run(&actions, policy);
        assert_well_formed(&state)?;
    }

    #[test]
    fn repeated_adds_cap_at_maximum(n in 1u32..20) {
        let actions: Vec<_> = (0..n)
            .map(|_| CartAction::AddToCart { guitar: guitar(3) })
            .collect();
        let state = run(&actions, DecreasePolicy::default());

        prop_assert_eq!(state.len(), 1);
        prop_assert_eq!(state.get(GuitarId::new(3)).unwrap().quantity, n.min(MAX_QUANTITY));
    }

    #[test]
    fn transitions_leave_the_receiver_untouched(
        setup in prop::collection::vec(action_strategy(), 0..20),
        action in action_strategy(),
    ) {
        let before = run(&setup, DecreasePolicy::default());
        let snapshot = before.clone();

        let _ = match action {
            CartAction::AddToCart { guitar } => before.add(&guitar),
            CartAction::RemoveFromCart { id } => before.remove(id),
            CartAction::IncreaseQuantity { id } => before.increase_quantity(id),
            CartAction::DecreaseQuantity { id } => {
                before.decrease_quantity(id, DecreasePolicy::RemoveAtMinimum)
            }
            CartAction::ClearCart => before.clear(),
        };

        prop_assert_eq!(before, snapshot);
    }

    #[test]
    fn rejected_commands_are_idempotent(
        setup in prop::collection::vec(action_strategy(), 0..20),
        id in 1u32..6,
    ) {
        let state = run(&setup, DecreasePolicy::default());
        let id = GuitarId::new(id);

        let once = state.remove(id);
        prop_assert_eq!(once.remove(id), once);

        let capped = (0..MAX_QUANTITY).fold(state.clone(), |s, _| s.increase_quantity(id));
        prop_assert_eq!(capped.increase_quantity(id), capped.clone());

        let floored = (0..MAX_QUANTITY)
            .fold(state, |s, _| s.decrease_quantity(id, DecreasePolicy::FloorAtMinimum));
        prop_assert_eq!(
            floored.decrease_quantity(id, DecreasePolicy::FloorAtMinimum),
            floored.clone()
        );
    }

    #[test]
    fn snapshot_restores_the_same_cart(
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let state = run(&actions, DecreasePolicy::default());
        let raw = state.encode().unwrap();
        prop_assert_eq!(CartState::decode(&raw).unwrap(), state);
    }
}
