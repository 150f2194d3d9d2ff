//! In-memory key-value store for tests and ephemeral boards.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueResult, KeyValueStore, KeyValueStoreError};

/// Thread-safe in-memory key-value store.
///
/// An optional byte quota mimics the capacity limit of browser storage. Usage
/// is counted as the sum of key and value lengths across all entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes beyond `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            state: Arc::default(),
            quota: Some(limit),
        }
    }

    /// Returns the number of bytes currently held.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] if the lock is poisoned.
    pub fn used_bytes(&self) -> KeyValueResult<usize> {
        let state = self.state.read().map_err(|err| {
            KeyValueStoreError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(usage(&state))
    }
}

fn usage(entries: &HashMap<String, String>) -> usize {
    entries
        .iter()
        .map(|(key, value)| key.len().saturating_add(value.len()))
        .sum()
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let state = self.state.read().map_err(|err| {
            KeyValueStoreError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut state = self.state.write().map_err(|err| {
            KeyValueStoreError::backend(std::io::Error::other(err.to_string()))
        })?;

        if let Some(limit) = self.quota {
            let replaced = state
                .get(key)
                .map_or(0, |previous| key.len().saturating_add(previous.len()));
            let required = usage(&state)
                .saturating_sub(replaced)
                .saturating_add(key.len())
                .saturating_add(value.len());
            if required > limit {
                return Err(KeyValueStoreError::QuotaExceeded { required, limit });
            }
        }

        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let mut state = self.state.write().map_err(|err| {
            KeyValueStoreError::backend(std::io::Error::other(err.to_string()))
        })?;
        state.remove(key);
        Ok(())
    }
}
