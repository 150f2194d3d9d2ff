//! Task collection management for the board.
//!
//! This module owns the task records a board displays: creating, editing,
//! advancing and deleting tasks, projecting them into filtered and sorted
//! columns, and synchronizing the collection with a local key-value store.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store and its configuration in [`services`]
//! - Derived board views in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;
