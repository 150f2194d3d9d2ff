//! Forward migration of stored task records.
//!
//! Older collections lack fields added later (`createdAt`, `priority`,
//! `tags`) or hold them as `null` or empty strings. Migration fills in
//! defaults so every loaded record satisfies the domain invariants.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use tracing::warn;

use super::models::StoredTask;
use crate::task::domain::{
    ParseTaskStatusError, PersistedTaskData, Priority, TagSet, Task, TaskDomainError, TaskId,
    TaskStatus, parse_deadline,
};

/// Reasons a stored record is dropped during load.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(super) enum MigrationError {
    /// The status is not one of the known workflow stages.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),

    /// The record violates a domain invariant that has no repair.
    #[error(transparent)]
    Invalid(#[from] TaskDomainError),
}

/// Converts a stored record into a task, repairing what can be repaired.
///
/// `now` stands in for a missing or unreadable creation timestamp.
pub(super) fn migrate(record: StoredTask, now: DateTime<Utc>) -> Result<Task, MigrationError> {
    let id = TaskId::from_existing(record.id)?;
    let status = match non_blank(record.status.as_deref()) {
        Some(value) => TaskStatus::try_from(value)?,
        None => TaskStatus::default(),
    };
    let created_at = migrate_created_at(&id, record.created_at.as_deref(), now);
    let updated_at = migrate_updated_at(&id, record.updated_at.as_deref());

    Task::from_persisted(PersistedTaskData {
        priority: migrate_priority(&id, record.priority.as_deref()),
        deadline: migrate_deadline(&id, record.deadline.as_deref()),
        tags: TagSet::from_labels_lossy(record.tags.unwrap_or_default()),
        id,
        title: record.title,
        status,
        description: record.description,
        created_at,
        updated_at,
    })
    .map_err(MigrationError::from)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn migrate_created_at(id: &TaskId, raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(text) = non_blank(raw) else {
        return now;
    };
    parse_timestamp(text).unwrap_or_else(|| {
        warn!(task_id = %id, value = text, "unreadable creation timestamp, using load time");
        now
    })
}

fn migrate_updated_at(id: &TaskId, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let text = non_blank(raw)?;
    let parsed = parse_timestamp(text);
    if parsed.is_none() {
        warn!(task_id = %id, value = text, "unreadable update timestamp dropped");
    }
    parsed
}

fn migrate_priority(id: &TaskId, raw: Option<&str>) -> Priority {
    let Some(text) = non_blank(raw) else {
        return Priority::default();
    };
    Priority::try_from(text).unwrap_or_else(|err| {
        warn!(task_id = %id, error = %err, "unknown priority replaced with none");
        Priority::default()
    })
}

fn migrate_deadline(id: &TaskId, raw: Option<&str>) -> Option<NaiveDate> {
    let text = raw?;
    parse_deadline(text).unwrap_or_else(|err| {
        warn!(task_id = %id, error = %err, "unreadable deadline dropped");
        None
    })
}
