//! Durable key-value storage.
//!
//! Every persisted state owns exactly one key (see
//! [`Snapshot::STORAGE_KEY`](crate::snapshot::Snapshot::STORAGE_KEY)) and
//! overwrites the whole value on every committed mutation. Storage never sees
//! partial updates.
//!
//! # Implementations
//!
//! - `FileStorage` (in `shelf-runtime`): one file per key in a data directory
//! - `InMemoryStorage` (in `shelf-testing`): fast, deterministic testing

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem I/O error.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// The key is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The backend cannot serve requests right now.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string store addressable by stable keys that survives process restarts.
///
/// Writes are synchronous: once `set` returns `Ok`, a following `get` for the
/// same key observes the new value.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Check that `key` is usable by every backend (including as a file name).
///
/// # Errors
///
/// Returns [`StorageError::InvalidKey`] for empty keys and keys containing
/// anything other than ASCII letters, digits, `-` or `_`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let well_formed = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if well_formed {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_simple_keys() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("activities").is_ok());
        assert!(validate_key("cart_v2-backup").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_paths_and_empty() {
        assert!(matches!(validate_key(""), Err(StorageError::InvalidKey(_))));
        assert!(matches!(
            validate_key("../cart"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            validate_key("a/b"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            validate_key("cart.json"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
