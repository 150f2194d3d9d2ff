//! Forward-advance policy for task statuses.
//!
//! The workflow is a strict linear chain. Every status has exactly one
//! designated next status, and `archived` loops back onto itself:
//!
//! ```text
//! untouched -> in-progress -> completed -> archived -> archived
//! ```
//!
//! This table is the only definition of what a one-click "advance" means.
//! Direct status assignment through an edit is not constrained by it.

use super::TaskStatus;

/// Adjacency table, indexed by the `from` status.
const NEXT_STATUS: [(TaskStatus, TaskStatus); 4] = [
    (TaskStatus::Untouched, TaskStatus::InProgress),
    (TaskStatus::InProgress, TaskStatus::Completed),
    (TaskStatus::Completed, TaskStatus::Archived),
    (TaskStatus::Archived, TaskStatus::Archived),
];

impl TaskStatus {
    /// Returns the status a forward-advance moves to.
    #[must_use]
    pub fn next(self) -> Self {
        NEXT_STATUS
            .iter()
            .find(|(from, _)| *from == self)
            .map_or(self, |(_, to)| *to)
    }

    /// Returns `true` when a forward-advance would change the status.
    #[must_use]
    pub fn can_advance(self) -> bool {
        self.next() != self
    }

    /// Returns `true` for the absorbing end of the chain.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.can_advance()
    }

    /// Returns `true` when `target` is the single forward step from `self`.
    #[must_use]
    pub fn is_forward_step(self, target: Self) -> bool {
        self.can_advance() && self.next() == target
    }
}
