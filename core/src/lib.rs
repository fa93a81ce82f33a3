//! # Shelf Core
//!
//! Core traits and types for shelf, a small state core shared by a shopping
//! cart and an activity log.
//!
//! Both applications reduce to the same problem: keep an ordered,
//! identity-keyed collection in memory, apply bounded mutations to it, derive
//! aggregates from it, and persist it between sessions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (a cart, an activity log)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//! - **Snapshot**: How a state is written to and restored from [`storage::Storage`]
//!
//! ## Example
//!
//! ```ignore
//! use shelf_core::*;
//!
//! impl Reducer for CartReducer {
//!     type State = CartState;
//!     type Action = CartAction;
//!     type Environment = CartEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CartState,
//!         action: CartAction,
//!         env: &CartEnvironment,
//!     ) -> SmallVec<[Effect; 4]> {
//!         // Business logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Durable key-value storage abstraction
pub mod storage;

/// Whole-state snapshots written to [`storage::Storage`]
pub mod snapshot;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ActivityReducer {
    ///     type State = ActivityState;
    ///     type Action = ActivityAction;
    ///     type Environment = ();
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut ActivityState,
    ///         action: ActivityAction,
    ///         _env: &(),
    ///     ) -> SmallVec<[Effect; 4]> {
    ///         match action {
    ///             ActivityAction::SaveActivity { new_activity } => {
    ///                 state.append(new_activity);
    ///                 smallvec![Effect::Persist]
    ///             }
    ///             ActivityAction::Unknown => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Computes the next state
        /// 2. Writes it into `state`
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values, never execution: a reducer that returns
/// [`Effect::Persist`] has not touched storage.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Effect {
        /// No-op effect
        None,

        /// Write a full snapshot of the current state to durable storage,
        /// replacing whatever was stored under the state's key.
        Persist,
    }

    impl Effect {
        /// Returns `true` if this effect writes to storage
        #[must_use]
        pub const fn is_persist(&self) -> bool {
            matches!(self, Self::Persist)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter (or handed to the component that needs them).
pub mod environment {
    use uuid::Uuid;

    /// Generates fresh, unique identities
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - random v4 UUIDs
    /// let ids = UuidGenerator;
    ///
    /// // Test - predictable identities
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Returns an identity that has never been returned before
        fn next_id(&self) -> Uuid;
    }

    /// Production id generator backed by random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
