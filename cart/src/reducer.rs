//! Reducer logic for the cart.
//!
//! The reducer computes the next cart with the pure transitions on
//! [`CartState`]. It only asks for persistence when the cart actually
//! changed, so rejected commands (quantity at a bound, unknown id) cost
//! nothing.

use crate::types::{CartAction, CartState, DecreasePolicy};
use shelf_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Environment dependencies for the cart reducer
#[derive(Clone, Copy, Debug, Default)]
pub struct CartEnvironment {
    /// What decrementing an item at the minimum quantity does
    pub decrease_policy: DecreasePolicy,
}

impl CartEnvironment {
    /// Creates a new `CartEnvironment`
    #[must_use]
    pub const fn new(decrease_policy: DecreasePolicy) -> Self {
        Self { decrease_policy }
    }
}

/// Reducer for the cart
#[derive(Clone, Debug)]
pub struct CartReducer;

impl CartReducer {
    /// Creates a new `CartReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Installs `next` if it differs from the current cart
    fn commit(state: &mut CartState, next: CartState, action: &'static str) -> SmallVec<[Effect; 4]> {
        if next == *state {
            tracing::debug!(action, "Cart unchanged");
            return smallvec![Effect::None];
        }

        *state = next;
        tracing::info!(
            action,
            lines = state.len(),
            total = state.total(),
            "Cart updated"
        );
        smallvec![Effect::Persist]
    }
}

impl Default for CartReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Environment = CartEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            CartAction::AddToCart { guitar } => {
                let next = state.add(&guitar);
                Self::commit(state, next, "add_to_cart")
            }
            CartAction::RemoveFromCart { id } => {
                let next = state.remove(id);
                Self::commit(state, next, "remove_from_cart")
            }
            CartAction::IncreaseQuantity { id } => {
                let next = state.increase_quantity(id);
                Self::commit(state, next, "increase_quantity")
            }
            CartAction::DecreaseQuantity { id } => {
                let next = state.decrease_quantity(id, env.decrease_policy);
                Self::commit(state, next, "decrease_quantity")
            }
            CartAction::ClearCart => {
                let next = state.clear();
                Self::commit(state, next, "clear_cart")
            }
        }
    }
}
