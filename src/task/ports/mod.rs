//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod repository;
pub mod storage;

pub use repository::{TaskCollectionRepository, TaskPersistenceError, TaskPersistenceResult};
pub use storage::{KeyValueResult, KeyValueStore, KeyValueStoreError};
