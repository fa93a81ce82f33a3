//! File-backed durable storage.
//!
//! # File Layout
//!
//! ```text
//! {data_dir}/
//! ├── cart.json        <- latest cart snapshot
//! └── activities.json  <- latest activity log snapshot
//! ```
//!
//! Writes go to `{key}.json.tmp` first and are renamed over the live file, so
//! a crash mid-write leaves the previous snapshot intact. The directory is
//! synced after the rename so the new entry itself is durable.
//!
//! All operations are blocking `std::fs` calls.

use shelf_core::storage::{Storage, StorageError, validate_key};
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Durable storage with one JSON file per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    /// Root directory for all snapshots.
    data_dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `data_dir`.
    ///
    /// The directory is created on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;

        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        fs::create_dir_all(&self.data_dir)?;

        let path = self.path_for(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));

        let mut file = File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &path)?;
        sync_dir(&self.data_dir)?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "Wrote snapshot file");
        Ok(())
    }
}

/// Flushes directory entries (creations, renames) in `dir` to disk.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

/// Directories cannot be opened as files here; the rename is as durable as
/// the platform makes it.
#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
