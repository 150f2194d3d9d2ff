//! Application services owning the task collection.

mod config;
mod store;

pub use config::{DEFAULT_DESCRIPTION_PREVIEW_LIMIT, TaskStoreConfig};
pub use store::{EditTaskRequest, MutationOutcome, TaskStore};
