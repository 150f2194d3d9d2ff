//! Todo board: task collection state for a personal kanban board.
//!
//! This crate provides the core of a client-side task tracker: task records
//! with status, priority, tags and deadlines, a forward-only status policy,
//! derived board views, and persistence of the whole collection to a local
//! key-value store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete storage backends (in-memory, directory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the task store, board views and persistence

pub mod task;
