//! Task aggregate root.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Digits of sub-second precision kept on creation timestamps.
const TIMESTAMP_SUBSEC_DIGITS: u16 = 3;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet completed task.
    ///
    /// The creation timestamp is truncated to milliseconds so that it
    /// survives storage round trips unchanged.
    #[must_use]
    pub fn new(title: TaskTitle, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title,
            completed: false,
            created_at: clock.utc().trunc_subsecs(TIMESTAMP_SUBSEC_DIGITS),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flips the completion flag, leaving every other field untouched.
    pub const fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}
