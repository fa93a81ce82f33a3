//! # Shelf Runtime
//!
//! Runtime implementation for shelf.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and persistence.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, executes the returned effects
//! - **`FileStorage`**: Durable [`Storage`](shelf_core::storage::Storage) backed by one file per key
//! - **Config**: Environment-driven settings for binaries
//!
//! ## Example
//!
//! ```ignore
//! use shelf_runtime::{Config, Store};
//! use std::sync::Arc;
//!
//! let config = Config::from_env();
//! let store = Store::restore(
//!     CartReducer::new(),
//!     CartEnvironment::default(),
//!     Arc::new(config.storage()),
//! );
//!
//! // Send an action (the snapshot is on disk when this returns)
//! store.send(CartAction::ClearCart).await;
//!
//! // Read state
//! let total = store.state(CartState::total).await;
//! ```

/// Environment-driven configuration
pub mod config;

/// Metric names and descriptions
pub mod metrics;

/// File-backed durable storage
pub mod storage;

/// Store module - The runtime for reducers
///
/// The Store is the "state transition + persist" pipeline: the reducer stays
/// pure and returns [`Effect`]s; the Store applies them. Persistence happens
/// while the state write lock is still held, so nothing can observe a
/// committed state whose snapshot has not been written yet.
pub mod store {
    use crate::metrics::{ACTIONS_TOTAL, PERSIST_FAILURES, PERSIST_TOTAL, REDUCER_DURATION};
    use shelf_core::effect::Effect;
    use shelf_core::reducer::Reducer;
    use shelf_core::snapshot::Snapshot;
    use shelf_core::storage::Storage;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Storage (where [`Effect::Persist`] writes the snapshot)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::restore(ActivityReducer::new(), (), storage);
    ///
    /// store.send(ActivityAction::SaveActivity { new_activity }).await;
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: RwLock<R::State>,
        reducer: R,
        environment: R::Environment,
        storage: Arc<dyn Storage>,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::State: Snapshot,
    {
        /// Create a new store with initial state, reducer, environment and storage
        ///
        /// Nothing is read from or written to storage until the first
        /// persisting action.
        #[must_use]
        pub fn new(
            initial_state: R::State,
            reducer: R,
            environment: R::Environment,
            storage: Arc<dyn Storage>,
        ) -> Self {
            Self {
                state: RwLock::new(initial_state),
                reducer,
                environment,
                storage,
            }
        }

        /// Create a store seeded from the last persisted snapshot
        ///
        /// Absent or unusable snapshots fall back to the default state; this
        /// never fails.
        #[must_use]
        pub fn restore(reducer: R, environment: R::Environment, storage: Arc<dyn Storage>) -> Self {
            let initial_state = R::State::restore(storage.as_ref());
            Self::new(initial_state, reducer, environment, storage)
        }

        /// Send an action to the store
        ///
        /// Runs the reducer and every returned effect to completion before
        /// returning. Persistence failures are logged and counted; they never
        /// roll back or otherwise touch the in-memory state.
        ///
        /// [`Storage`] is synchronous, so a persisting action blocks the
        /// calling task for the duration of the write (for `FileStorage`,
        /// including the fsync). The write lock is held throughout, which
        /// keeps snapshots in commit order.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: R::Action) {
            ::metrics::counter!(ACTIONS_TOTAL).increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let start = std::time::Instant::now();
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            ::metrics::histogram!(REDUCER_DURATION)
                .record(start.elapsed().as_secs_f64());

            tracing::trace!("Reducer completed, returned {} effects", effects.len());

            for effect in effects {
                self.execute_effect(effect, &state);
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let total = store.state(CartState::total).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&R::State) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        fn execute_effect(&self, effect: Effect, state: &R::State) {
            match effect {
                Effect::None => {}
                Effect::Persist => self.persist(state),
            }
        }

        fn persist(&self, state: &R::State) {
            let key = R::State::STORAGE_KEY;

            let written = state
                .encode()
                .map_err(|e| e.to_string())
                .and_then(|raw| self.storage.set(key, &raw).map_err(|e| e.to_string()));

            match written {
                Ok(()) => {
                    ::metrics::counter!(PERSIST_TOTAL).increment(1);
                    tracing::debug!(key, "Persisted snapshot");
                }
                Err(error) => {
                    ::metrics::counter!(PERSIST_FAILURES).increment(1);
                    tracing::error!(key, error = %error, "Failed to persist snapshot");
                }
            }
        }
    }
}

pub use config::Config;
pub use storage::FileStorage;
pub use store::Store;
