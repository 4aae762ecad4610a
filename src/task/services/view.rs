//! External representation of tasks returned to callers.

use crate::task::domain::Task;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Task shape exposed to HTTP clients.
///
/// Carries exactly the four public fields; storage-only details never leak
/// into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier in hyphenated UUID form.
    pub id: String,
    /// Trimmed task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// ISO-8601 creation timestamp with millisecond precision.
    pub created_at: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            completed: task.is_completed(),
            created_at: format_timestamp(task.created_at()),
        }
    }
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Renders a timestamp as ISO-8601 with milliseconds and a `Z` suffix.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
