//! In-memory repository for task tracking.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying state; separate calls to
/// [`InMemoryTaskRepository::new`] produce fully isolated stores.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_position: u64,
}

#[derive(Debug, Clone)]
struct StoredTask {
    task: Task,
    position: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let position = state.next_position;
        state.next_position += 1;
        state.tasks.insert(
            task.id(),
            StoredTask {
                task: task.clone(),
                position,
            },
        );
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        stored.task = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).map(|stored| stored.task.clone()))
    }

    async fn list_newest_first(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut stored: Vec<&StoredTask> = state.tasks.values().collect();
        stored.sort_by(|left, right| {
            right
                .task
                .created_at()
                .cmp(&left.task.created_at())
                .then_with(|| right.position.cmp(&left.position))
        });
        Ok(stored.into_iter().map(|entry| entry.task.clone()).collect())
    }

    async fn delete_all(&self) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.tasks.clear();
        state.next_position = 0;
        Ok(())
    }
}
