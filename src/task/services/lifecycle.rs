//! Service layer for task creation, editing, and deletion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use crate::user::domain::UserId;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
    assignees: Vec<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            assignees: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority; omitted requests default to medium.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignees.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }
}

/// Request payload for editing an existing task.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
    due_date: Option<Option<NaiveDate>>,
    assignees: Option<Vec<UserId>>,
}

impl UpdateTaskRequest {
    /// Creates an empty edit for the given task.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            priority: None,
            status: None,
            due_date: None,
            assignees: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn without_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Replaces the assignee set.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = Some(assignees.into_iter().collect());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// The task to edit or delete does not exist.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The acting user is neither reporter nor assignee.
    #[error("user {actor} may not edit task {task_id}")]
    EditNotPermitted {
        /// Task the edit targeted.
        task_id: TaskId,
        /// User who attempted the edit.
        actor: UserId,
    },

    /// The acting user is not the reporter.
    #[error("user {actor} may not delete task {task_id}")]
    DeleteNotPermitted {
        /// Task the deletion targeted.
        task_id: TaskId,
        /// User who attempted the deletion.
        actor: UserId,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a new task reported by `reporter`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// store rejects persistence.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        reporter: UserId,
    ) -> TaskLifecycleResult<Task> {
        let mut draft = TaskDraft::new(request.title)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(priority);
        }
        if let Some(due_date) = request.due_date {
            draft = draft.with_due_date(due_date);
        }
        draft = draft.with_assignees(request.assignees);

        let task = Task::new(draft, reporter, &*self.clock);
        self.store.insert(&task).await?;
        tracing::debug!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Applies an edit on behalf of `actor`.
    ///
    /// Editing requires the actor to be the reporter or an assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] when the task does not
    /// exist, [`TaskLifecycleError::EditNotPermitted`] when the actor
    /// lacks rights, and validation or store errors otherwise.
    pub async fn update(
        &self,
        request: UpdateTaskRequest,
        actor: &UserId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .store
            .find_by_id(&request.task_id)
            .await?
            .ok_or_else(|| TaskLifecycleError::UnknownTask(request.task_id.clone()))?;

        if !task.permits_change_by(actor) {
            return Err(TaskLifecycleError::EditNotPermitted {
                task_id: request.task_id,
                actor: actor.clone(),
            });
        }

        let clock = &*self.clock;
        if let Some(title) = request.title {
            task.rename(title, clock)?;
        }
        if let Some(description) = request.description {
            task.set_description(description, clock);
        }
        if let Some(priority) = request.priority {
            task.set_priority(priority, clock);
        }
        if let Some(status) = request.status {
            task.set_status(status, clock);
        }
        if let Some(due_date) = request.due_date {
            task.set_due_date(due_date, clock);
        }
        if let Some(assignees) = request.assignees {
            task.set_assignees(assignees, clock);
        }

        self.store.update(&task).await?;
        tracing::debug!(task_id = %task.id(), "updated task");
        Ok(task)
    }

    /// Deletes a task on behalf of `actor`.
    ///
    /// Deletion is reserved for the reporter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] when the task does not
    /// exist, [`TaskLifecycleError::DeleteNotPermitted`] when the actor is
    /// not the reporter, and store errors otherwise.
    pub async fn delete(&self, task_id: &TaskId, actor: &UserId) -> TaskLifecycleResult<()> {
        let task = self
            .store
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskLifecycleError::UnknownTask(task_id.clone()))?;

        if !task.is_reported_by(actor) {
            return Err(TaskLifecycleError::DeleteNotPermitted {
                task_id: task_id.clone(),
                actor: actor.clone(),
            });
        }

        self.store.remove(task_id).await?;
        tracing::debug!(task_id = %task_id, "deleted task");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task carries the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the lookup fails.
    pub async fn find_by_id(&self, task_id: &TaskId) -> TaskLifecycleResult<Option<Task>> {
        let result: TaskStoreResult<Option<Task>> = self.store.find_by_id(task_id).await;
        Ok(result?)
    }

    /// Returns the full visible task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the listing fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        let result: TaskStoreResult<Vec<Task>> = self.store.list_all().await;
        Ok(result?)
    }
}
