//! Persistence boundary
//!
//! The controller treats its backing store as an opaque key-value map of
//! strings. Backends decide where the bytes live.
//!
//! - [`MemoryStore`]: process-local map, for ephemeral sessions and tests
//! - [`FileStore`]: one JSON file per key under a directory

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "ghost-machine-state";

/// Key-value store holding serialized game progress.
pub trait StateStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Checks that `key` is non-empty and limited to `[A-Za-z0-9._-]`.
///
/// # Errors
///
/// Returns `StoreError::InvalidKey` otherwise.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
