//! In-memory store for task lifecycle and board tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// `list_all` returns tasks in insertion order so that projections built
/// over it are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id().clone()));
        }
        state.order.push(task.id().clone());
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.tasks.contains_key(task.id()) {
            return Err(TaskStoreError::NotFound(task.id().clone()));
        }
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task = state
            .tasks
            .get(id)
            .cloned()
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        // Timestamps are left alone; the real backend owns them.
        state.tasks.insert(id.clone(), task.with_status(status));
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.remove(id).is_none() {
            return Err(TaskStoreError::NotFound(id.clone()));
        }
        state.order.retain(|kept| kept != id);
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }
}
