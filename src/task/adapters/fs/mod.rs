//! Filesystem adapters for task persistence.

mod key_value;

pub use key_value::DirectoryKeyValueStore;
