//! Task workflow status.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse workflow stage of a task.
///
/// Each status maps to one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Untouched,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Completed,
    /// The task is finished and filed away.
    Archived,
}

impl TaskStatus {
    /// Every status in board-column order.
    pub const ALL: [Self; 4] = [
        Self::Untouched,
        Self::InProgress,
        Self::Completed,
        Self::Archived,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Untouched => "untouched",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Returns the column heading shown for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Untouched => "未着手",
            Self::InProgress => "進行中",
            Self::Completed => "完了",
            Self::Archived => "アーカイブ",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "untouched" => Ok(Self::Untouched),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
