//! Configuration for the task store and its persistence.

use serde::Deserialize;

use crate::task::adapters::local_storage::DEFAULT_STORAGE_KEY;

/// Description preview length used when none is configured.
pub const DEFAULT_DESCRIPTION_PREVIEW_LIMIT: usize = 10;

/// Settings shared by the task store and its repository.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use todo_board::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert_eq!(config.storage_key, "modern-todo-list");
/// assert_eq!(config.description_preview_limit, 10);
///
/// let scoped = TaskStoreConfig::scoped("work-board");
/// assert_eq!(scoped.storage_key, "work-board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskStoreConfig {
    /// Key the collection is stored under.
    pub storage_key: String,
    /// Characters of a description shown before it is cut off.
    pub description_preview_limit: usize,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            description_preview_limit: DEFAULT_DESCRIPTION_PREVIEW_LIMIT,
        }
    }
}

impl TaskStoreConfig {
    /// Creates a configuration storing the collection under `key`.
    ///
    /// Useful for keeping several boards in one store.
    #[must_use]
    pub fn scoped(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            ..Default::default()
        }
    }
}
