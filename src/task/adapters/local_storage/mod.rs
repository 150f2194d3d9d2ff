//! Local storage persistence for the task collection.
//!
//! The whole collection lives as one JSON array under a single key of a
//! [`KeyValueStore`](crate::task::ports::KeyValueStore). Records written by
//! older versions are migrated forward on load.

mod migration;
pub mod models;
mod repository;

pub use models::StoredTask;
pub use repository::{DEFAULT_STORAGE_KEY, KeyValueTaskRepository};
