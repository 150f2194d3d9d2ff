//! Persistence adapters for the task board.
//!
//! # Available Adapters
//!
//! - [`local_storage::KeyValueTaskRepository`]: the task collection as one
//!   JSON document over any key-value store
//! - [`memory::InMemoryKeyValueStore`]: thread-safe in-memory key-value
//!   storage with an optional quota
//! - [`fs::DirectoryKeyValueStore`]: one file per key inside a
//!   capability-scoped directory

pub mod fs;
pub mod local_storage;
pub mod memory;
