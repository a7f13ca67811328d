//! Task aggregate root and creation draft.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus};
use crate::user::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated field set for a task that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    assignees: Vec<UserId>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    ///
    /// Priority defaults to [`TaskPriority::Medium`], matching the create
    /// form's default.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let title = normalize_title(title)?;
        Ok(Self {
            title,
            description: String::new(),
            priority: TaskPriority::Medium,
            due_date: None,
            assignees: Vec::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignees, dropping duplicates while preserving first
    /// occurrence order.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = dedup_assignees(assignees);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    reporter: UserId,
    assignees: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted reporter reference.
    pub reporter: UserId,
    /// Persisted assignee references.
    pub assignees: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a validated draft.
    ///
    /// The reporter is the creating user and is immutable afterwards. New
    /// tasks start in [`TaskStatus::Todo`].
    #[must_use]
    pub fn new(draft: TaskDraft, reporter: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::generate(),
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Todo,
            priority: draft.priority,
            due_date: draft.due_date,
            reporter,
            assignees: draft.assignees,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            reporter: data.reporter,
            assignees: dedup_assignees(data.assignees),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the reporter reference.
    #[must_use]
    pub const fn reporter(&self) -> &UserId {
        &self.reporter
    }

    /// Returns the assignee references.
    #[must_use]
    pub fn assignees(&self) -> &[UserId] {
        &self.assignees
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user` created this task.
    #[must_use]
    pub fn is_reported_by(&self, user: &UserId) -> bool {
        self.reporter == *user
    }

    /// Returns whether `user` is designated to work on this task.
    #[must_use]
    pub fn has_assignee(&self, user: &UserId) -> bool {
        self.assignees.contains(user)
    }

    /// Returns whether `user` may change this task's status or details.
    ///
    /// True iff the user is an assignee or the reporter; no other role
    /// bypasses the rule. An unknown user is simply unauthorized.
    #[must_use]
    pub fn permits_change_by(&self, user: &UserId) -> bool {
        self.is_reported_by(user) || self.has_assignee(user)
    }

    /// Returns whole days from `on` until the due date (negative once
    /// overdue), or `None` when the task has no due date.
    #[must_use]
    pub fn days_until_due(&self, on: NaiveDate) -> Option<i64> {
        self.due_date
            .map(|due| due.signed_duration_since(on).num_days())
    }

    /// Renames the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn rename(
        &mut self,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.title = normalize_title(title)?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.touch(clock);
    }

    /// Replaces the priority.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Replaces or clears the due date.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Replaces the status.
    ///
    /// Any column may move to any other column; authorization is the
    /// caller's concern.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Replaces the assignee set, dropping duplicates while preserving
    /// first occurrence order.
    pub fn set_assignees(
        &mut self,
        assignees: impl IntoIterator<Item = UserId>,
        clock: &impl Clock,
    ) {
        self.assignees = dedup_assignees(assignees);
        self.touch(clock);
    }

    /// Returns a board-local copy with the status overwritten.
    ///
    /// Timestamps are left untouched; the store remains the authority for
    /// when the change actually happened.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Trims a title and rejects empty results.
fn normalize_title(title: impl Into<String>) -> Result<String, TaskDomainError> {
    let raw = title.into();
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(normalized.to_owned())
}

/// Drops duplicate references, keeping the first occurrence of each.
fn dedup_assignees(assignees: impl IntoIterator<Item = UserId>) -> Vec<UserId> {
    let mut seen = std::collections::HashSet::new();
    assignees
        .into_iter()
        .filter(|assignee| seen.insert(assignee.clone()))
        .collect()
}
