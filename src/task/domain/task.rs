//! Task record and related lifecycle types.

use super::{Priority, TagSet, TaskDomainError, TaskId, TaskStatus, TextPreview};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

/// Calendar format used for deadlines.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// One unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    priority: Priority,
    tags: TagSet,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted tags.
    pub tags: TagSet,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp, if the task was ever changed.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Validated replacement values for the editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// New title; must be non-empty after trimming.
    pub title: String,
    /// New workflow status.
    pub status: TaskStatus,
    /// New description.
    pub description: Option<String>,
    /// New deadline.
    pub deadline: Option<NaiveDate>,
    /// New priority.
    pub priority: Priority,
    /// New tags.
    pub tags: TagSet,
}

impl Task {
    /// Creates a new untouched task.
    ///
    /// The identifier and creation timestamp are taken from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn new(title: &str, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let normalized = normalize_title(title)?;
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::generate(timestamp),
            title: normalized,
            status: TaskStatus::Untouched,
            description: None,
            deadline: None,
            priority: Priority::None,
            tags: TagSet::new(),
            created_at: timestamp,
            updated_at: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the persisted title is
    /// blank.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        let title = normalize_title(&data.title)?;
        let updated_at = data
            .updated_at
            .map(|updated| updated.max(data.created_at));

        Ok(Self {
            id: data.id,
            title,
            status: data.status,
            description: data.description,
            deadline: data.deadline,
            priority: data.priority,
            tags: data.tags,
            created_at: data.created_at,
            updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp, if the task was ever changed.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns a shortened description for list display.
    ///
    /// Returns `None` when there is no description or it is empty.
    #[must_use]
    pub fn description_preview(&self, limit: usize) -> Option<TextPreview> {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| TextPreview::new(text, limit))
    }

    /// Sets the workflow status and stamps the mutation time.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Replaces every editable field and stamps the mutation time.
    ///
    /// The identifier and creation timestamp are left untouched. Nothing is
    /// changed when the new title is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the new title is blank.
    pub fn apply_changes(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let title = normalize_title(&changes.title)?;
        self.title = title;
        self.status = changes.status;
        self.description = changes.description;
        self.deadline = changes.deadline;
        self.priority = changes.priority;
        self.tags = changes.tags;
        self.touch(clock);
        Ok(())
    }

    /// Updates `updated_at`, never letting it precede `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc().max(self.created_at));
    }
}

/// Parses a `YYYY-MM-DD` deadline.
///
/// Blank input means no deadline.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] if the text is not a
/// calendar date.
pub fn parse_deadline(text: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT)
        .map(Some)
        .map_err(|_| TaskDomainError::InvalidDeadline(trimmed.to_owned()))
}

/// Trims a title, rejecting blank values.
fn normalize_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
