//! Parameters describing which tasks a board shows and in what order.

use std::fmt;

use thiserror::Error;

use crate::task::domain::{TagSet, TaskStatus};

/// Wire string meaning "no filter" or "no sort".
const NONE: &str = "none";

/// Which statuses a view includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Only tasks in the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns whether a task in `status` passes the filter.
    #[must_use]
    pub fn admits(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == status,
        }
    }

    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => NONE,
            Self::Only(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == NONE {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseStatusFilterError(value.to_owned()))
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep collection order.
    #[default]
    Unsorted,
    /// Earliest deadline first; tasks without a deadline last.
    Deadline,
    /// Alphabetical by title.
    Title,
    /// Highest priority first.
    Priority,
    /// Newest first.
    Created,
}

impl SortKey {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsorted => NONE,
            Self::Deadline => "deadline",
            Self::Title => "title",
            Self::Priority => "priority",
            Self::Created => "created",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseSortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            NONE => Ok(Self::Unsorted),
            "deadline" => Ok(Self::Deadline),
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            "created" => Ok(Self::Created),
            other => Err(ParseSortKeyError(other.to_owned())),
        }
    }
}

/// Error returned while parsing a sort key from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

/// Error returned while parsing a status filter from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(pub String);

/// Complete set of view parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    status: StatusFilter,
    sort: SortKey,
    search: String,
    tags: Vec<String>,
}

impl ViewQuery {
    /// Creates a query that shows everything in collection order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the tags every shown task must carry.
    ///
    /// Labels are normalized the way stored tags are: trimmed, blanks
    /// dropped, duplicates collapsed.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = TagSet::from_labels_lossy(tags).as_slice().to_vec();
        self
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the sort key.
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    /// Returns the raw search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the selected tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
