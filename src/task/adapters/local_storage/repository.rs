//! Task collection repository over a key-value store.

use std::collections::HashSet;
use std::sync::Arc;

use mockable::Clock;
use serde_json::Value;
use tracing::{debug, warn};

use super::migration::migrate;
use super::models::StoredTask;
use crate::task::{
    domain::Task,
    ports::{KeyValueStore, TaskCollectionRepository, TaskPersistenceError, TaskPersistenceResult},
    services::{TaskStore, TaskStoreConfig},
};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "modern-todo-list";

/// Persists the whole task collection as one JSON array under a single key.
///
/// Loading migrates older records forward and skips records that cannot be
/// repaired, so one bad entry never hides the rest of the board.
#[derive(Debug, Clone)]
pub struct KeyValueTaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    key: String,
}

impl<S, C> KeyValueTaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a repository using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }

    /// Creates a repository using the configured storage key.
    #[must_use]
    pub fn from_config(store: Arc<S>, clock: Arc<C>, config: &TaskStoreConfig) -> Self {
        Self::new(store, clock).with_key(config.storage_key.clone())
    }

    /// Opens a task store persisted under the configured key.
    ///
    /// The store also takes its description preview length from `config`.
    #[must_use]
    pub fn open_store(
        store: Arc<S>,
        clock: Arc<C>,
        config: &TaskStoreConfig,
    ) -> TaskStore<Self, C> {
        let repository = Arc::new(Self::from_config(store, Arc::clone(&clock), config));
        TaskStore::open(repository, clock).with_preview_limit(config.description_preview_limit)
    }

    /// Overrides the storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying key-value store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn decode(&self, position: usize, value: Value) -> Option<Task> {
        let record = match serde_json::from_value::<StoredTask>(value) {
            Ok(record) => record,
            Err(err) => {
                warn!(key = %self.key, position, error = %err, "skipping undecodable task record");
                return None;
            }
        };
        match migrate(record, self.clock.utc()) {
            Ok(task) => Some(task),
            Err(err) => {
                warn!(key = %self.key, position, error = %err, "skipping invalid task record");
                None
            }
        }
    }
}

impl<S, C> TaskCollectionRepository for KeyValueTaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    fn load(&self) -> TaskPersistenceResult<Vec<Task>> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "no stored task collection");
            return Ok(Vec::new());
        };
        let records: Vec<Value> =
            serde_json::from_str(&raw).map_err(TaskPersistenceError::serialization)?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut tasks = Vec::with_capacity(records.len());
        for (position, value) in records.into_iter().enumerate() {
            let Some(task) = self.decode(position, value) else {
                continue;
            };
            if !seen.insert(task.id().clone()) {
                warn!(key = %self.key, task_id = %task.id(), "skipping duplicate task id");
                continue;
            }
            tasks.push(task);
        }

        debug!(key = %self.key, count = tasks.len(), "loaded task collection");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()> {
        let records: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
        let encoded =
            serde_json::to_string(&records).map_err(TaskPersistenceError::serialization)?;
        self.store.set(&self.key, &encoded)?;
        debug!(key = %self.key, count = tasks.len(), "saved task collection");
        Ok(())
    }
}
