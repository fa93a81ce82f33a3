//! Whole-state snapshots.
//!
//! A [`Snapshot`] state is stored as JSON under a single, stable key. Writing
//! replaces the previous value entirely; restoring is total: absent,
//! unreadable, malformed, or invariant-violating data all degrade to
//! `Default::default()` instead of failing the caller.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use shelf_core::snapshot::Snapshot;
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! #[serde(transparent)]
//! struct Tags {
//!     tags: Vec<String>,
//! }
//!
//! impl Snapshot for Tags {
//!     const STORAGE_KEY: &'static str = "tags";
//! }
//!
//! let tags = Tags { tags: vec!["a".to_string()] };
//! let raw = tags.encode().unwrap();
//! assert_eq!(raw, r#"["a"]"#);
//! assert_eq!(Tags::decode(&raw).unwrap(), tags);
//! assert_eq!(Tags::decode("{not json").ok(), None);
//! ```

use crate::storage::Storage;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors produced while encoding or decoding a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The stored text is not valid JSON for this state.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The stored text parsed but breaks an invariant of the state.
    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

/// A state that can be written to and restored from [`Storage`].
pub trait Snapshot: Serialize + DeserializeOwned + Default {
    /// The key this state owns in storage. No other state writes it.
    const STORAGE_KEY: &'static str;

    /// Check invariants after decoding.
    ///
    /// The default accepts anything that parsed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Invalid`] describing the broken invariant.
    fn validate(&self) -> Result<(), SnapshotError> {
        Ok(())
    }

    /// Serialize the full state.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] if serialization fails.
    fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a stored state.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the text does not parse or breaks an invariant.
    fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let state: Self = serde_json::from_str(raw)?;
        state.validate()?;
        Ok(state)
    }

    /// Load the last persisted state, falling back to the default.
    ///
    /// Never fails: problems are logged and treated as "no prior state".
    fn restore(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match Self::decode(&raw) {
                Ok(state) => {
                    tracing::debug!(key = Self::STORAGE_KEY, "Restored snapshot");
                    state
                }
                Err(error) => {
                    tracing::warn!(
                        key = Self::STORAGE_KEY,
                        error = %error,
                        "Discarding unusable snapshot"
                    );
                    Self::default()
                }
            },
            Ok(None) => {
                tracing::debug!(key = Self::STORAGE_KEY, "No snapshot stored");
                Self::default()
            }
            Err(error) => {
                tracing::warn!(
                    key = Self::STORAGE_KEY,
                    error = %error,
                    "Failed to read snapshot"
                );
                Self::default()
            }
        }
    }
}
