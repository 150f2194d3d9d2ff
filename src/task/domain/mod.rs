//! Domain model for the task board.
//!
//! The task domain models task records, their workflow status and the
//! forward-advance policy while keeping storage concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod preview;
mod priority;
mod status;
mod tags;
mod task;
mod transition;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use preview::{ELLIPSIS, TextPreview};
pub use priority::Priority;
pub use status::TaskStatus;
pub use tags::TagSet;
pub use task::{DEADLINE_FORMAT, PersistedTaskData, Task, TaskChanges, parse_deadline};
