//! # Shelf Testing
//!
//! Testing utilities and helpers for shelf reducers and stores.
//!
//! This crate provides:
//! - Mock implementations of environment and storage traits
//! - A Given-When-Then builder for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use shelf_runtime::Store;
//! use shelf_testing::InMemoryStorage;
//! use std::sync::Arc;
//!
//! #[tokio::test]
//! async fn test_add_persists() {
//!     let storage = Arc::new(InMemoryStorage::new());
//!     let store = Store::restore(CartReducer::new(), CartEnvironment::default(), storage.clone());
//!
//!     store.send(CartAction::AddToCart { guitar: guitar(1, 100) }).await;
//!
//!     assert!(storage.contains_key("cart"));
//! }
//! ```

pub mod reducer_test;

/// Mock implementations for testing.
pub mod mocks {
    use shelf_core::environment::IdGenerator;
    use shelf_core::storage::{Storage, StorageError, validate_key};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::{PoisonError, RwLock};
    use uuid::Uuid;

    /// In-memory storage for fast, deterministic testing.
    ///
    /// Validates keys exactly like file-backed storage so tests catch bad keys.
    /// Also counts writes, which makes "did this mutation persist?" a one-line
    /// assertion.
    ///
    /// # Example
    ///
    /// ```
    /// use shelf_core::storage::Storage;
    /// use shelf_testing::InMemoryStorage;
    ///
    /// let storage = InMemoryStorage::new();
    /// storage.set("cart", "[]").unwrap();
    /// assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));
    /// assert_eq!(storage.write_count(), 1);
    /// ```
    #[derive(Debug, Default)]
    pub struct InMemoryStorage {
        data: RwLock<HashMap<String, String>>,
        writes: AtomicUsize,
    }

    impl InMemoryStorage {
        /// Create a new empty in-memory storage
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a storage that already holds `value` under `key`
        ///
        /// Useful for seeding persisted (or deliberately corrupted) state.
        /// Seeding does not count as a write.
        #[must_use]
        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage
                .data
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_string(), value.to_string());
            storage
        }

        /// Raw value stored under `key`, if any
        #[must_use]
        pub fn raw(&self, key: &str) -> Option<String> {
            self.data
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned()
        }

        /// Check if a key exists in the store
        #[must_use]
        pub fn contains_key(&self, key: &str) -> bool {
            self.data
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(key)
        }

        /// Number of successful `set` calls so far
        #[must_use]
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl Storage for InMemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            validate_key(key)?;
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            validate_key(key)?;
            self.data
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Storage whose every operation fails.
    ///
    /// Stands in for a full disk or a revoked permission.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("failing storage".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("failing storage".to_string()))
        }
    }

    /// Predictable ids: `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `Uuid::from_u128(1)`
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of ids handed out so far
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.next.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }
}

// Re-export commonly used items
pub use mocks::{FailingStorage, InMemoryStorage, SequentialIdGenerator};
pub use reducer_test::{ReducerTest, assertions};
