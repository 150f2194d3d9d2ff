//! Derived board views.
//!
//! Views borrow the task collection and never modify it. They are recomputed
//! on demand from a [`ViewQuery`].

mod projector;
mod query;

pub use projector::{GroupedView, board_columns, collect_tags, compare_titles, project};
pub use query::{ParseSortKeyError, ParseStatusFilterError, SortKey, StatusFilter, ViewQuery};
