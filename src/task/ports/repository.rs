//! Repository port for whole-collection task persistence.

use super::KeyValueStoreError;
use crate::task::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task persistence operations.
pub type TaskPersistenceResult<T> = Result<T, TaskPersistenceError>;

/// Task collection persistence contract.
///
/// The collection is always read and written as a whole; there is no
/// per-record access.
pub trait TaskCollectionRepository: Send + Sync {
    /// Loads the stored collection in insertion order.
    ///
    /// A store that has never been written yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError`] when the store cannot be read or the
    /// stored value cannot be decoded at all.
    fn load(&self) -> TaskPersistenceResult<Vec<Task>>;

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError`] when the collection cannot be encoded
    /// or written.
    fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()>;
}

/// Errors returned by task collection repositories.
#[derive(Debug, Clone, Error)]
pub enum TaskPersistenceError {
    /// The underlying store failed.
    #[error("storage error: {0}")]
    Storage(#[from] KeyValueStoreError),

    /// The collection could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskPersistenceError {
    /// Wraps an encoding or decoding error.
    pub fn serialization(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
