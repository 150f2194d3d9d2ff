//! Key-value storage port backing task persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type KeyValueResult<T> = Result<T, KeyValueStoreError>;

/// Durable string-to-string store.
///
/// Mirrors the surface of a browser-local storage area: one string value
/// per key, whole-value reads and overwrites.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::QuotaExceeded`] when the backend is out
    /// of space, or another [`KeyValueStoreError`] when the write fails.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the backend cannot be written.
    fn remove(&self, key: &str) -> KeyValueResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The key cannot be represented by this backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The write would exceed the backend's capacity.
    #[error("storage quota exceeded: {required} bytes required, limit is {limit} bytes")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        required: usize,
        /// Maximum bytes the store may hold.
        limit: usize,
    },

    /// Backend failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
