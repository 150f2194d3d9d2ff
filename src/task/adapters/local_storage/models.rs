//! Wire records for the local storage task collection.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::task::domain::{DEADLINE_FORMAT, Task};

/// One task as written under the storage key.
///
/// Fields that older records may lack or hold as `null` are kept raw so the
/// migration step can decide how to repair them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTask {
    /// Opaque identifier.
    pub id: String,
    /// Title as stored, possibly untrimmed.
    pub title: String,
    /// Status wire string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Description; `null` and omission both mean absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Deadline as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Priority wire string.
    #[serde(default)]
    pub priority: Option<String>,
    /// Tag labels in display order.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 latest mutation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            title: task.title().to_owned(),
            status: Some(task.status().as_str().to_owned()),
            description: task.description().map(str::to_owned),
            deadline: task
                .deadline()
                .map(|date| date.format(DEADLINE_FORMAT).to_string()),
            priority: Some(task.priority().as_str().to_owned()),
            tags: Some(task.tags().iter().map(str::to_owned).collect()),
            created_at: Some(
                task.created_at()
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
            updated_at: task
                .updated_at()
                .map(|updated| updated.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}
