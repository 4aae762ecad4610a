//! Service layer for task creation, lookup and completion.

use super::TaskView;
use crate::task::{
    domain::{Task, TaskId, TitleInput, TitleValidationError, validate_title},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Title validation failed; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] TitleValidationError),

    /// No task matches the identifier, or the identifier is malformed.
    #[error("task not found: {0}")]
    NotFound(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds no cache: every call reads the repository afresh and returns owned
/// [`TaskView`] snapshots.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates the title and creates a new, not yet completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the title is invalid,
    /// in which case nothing is stored, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, title: TitleInput<'_>) -> TaskLifecycleResult<TaskView> {
        let validated = validate_title(title)?;
        let task = Task::new(validated, &*self.clock);
        self.repository.store(&task).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(TaskView::from(task))
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<TaskView>> {
        let tasks = self.repository.list_newest_first().await?;
        Ok(tasks.iter().map(TaskView::from).collect())
    }

    /// Retrieves a task by its raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the identifier is
    /// malformed or names no task, or [`TaskLifecycleError::Repository`] when
    /// the lookup fails.
    pub async fn get_by_id(&self, raw_id: &str) -> TaskLifecycleResult<TaskView> {
        let task = self.load(raw_id).await?;
        Ok(TaskView::from(task))
    }

    /// Flips the completion flag of a task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the identifier is
    /// malformed or names no task, or [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn toggle_completion(&self, raw_id: &str) -> TaskLifecycleResult<TaskView> {
        let mut task = self.load(raw_id).await?;
        task.toggle_completion();
        self.repository
            .update(&task)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(_) => TaskLifecycleError::NotFound(raw_id.to_owned()),
                other => TaskLifecycleError::Repository(other),
            })?;
        tracing::debug!(
            task_id = %task.id(),
            completed = task.is_completed(),
            "task completion toggled"
        );
        Ok(TaskView::from(task))
    }

    /// Deletes every task. Intended for test setup and teardown only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when deletion fails.
    pub async fn reset(&self) -> TaskLifecycleResult<()> {
        self.repository.delete_all().await?;
        Ok(())
    }

    async fn load(&self, raw_id: &str) -> TaskLifecycleResult<Task> {
        let not_found = || TaskLifecycleError::NotFound(raw_id.to_owned());
        let Ok(id) = TaskId::parse(raw_id) else {
            return Err(not_found());
        };
        self.repository.find_by_id(id).await?.ok_or_else(not_found)
    }
}
