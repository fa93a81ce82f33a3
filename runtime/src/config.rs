//! Configuration management for shelf binaries.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Binaries load a `.env` file with `dotenvy` before calling
//! [`Config::from_env`].

use crate::storage::FileStorage;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default directory for snapshot files
pub const DEFAULT_DATA_DIR: &str = ".shelf";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one snapshot file per store (`SHELF_DATA_DIR`)
    pub data_dir: PathBuf,
    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            data_dir: var("SHELF_DATA_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from),
            log_filter: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Tracing filter for the configured directives
    ///
    /// An unparseable `RUST_LOG` falls back to [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|error| {
            eprintln!("Ignoring invalid RUST_LOG {:?}: {error}", self.log_filter);
            EnvFilter::new(DEFAULT_LOG_FILTER)
        })
    }

    /// File storage rooted at the configured data directory
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
