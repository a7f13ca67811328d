//! Wire models for task records as the REST backend serialises them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{
    ParseTaskPriorityError, ParseTaskStatusError, PersistedTaskData, Task, TaskDomainError,
    TaskId, TaskPriority, TaskStatus,
};
use crate::user::domain::{UserDomainError, UserId};

/// Errors raised while converting a wire record into a domain task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordDecodeError {
    /// The status string is not a known column.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),

    /// The priority string is not a known priority.
    #[error(transparent)]
    Priority(#[from] ParseTaskPriorityError),

    /// An identifier or title failed domain validation.
    #[error(transparent)]
    Task(#[from] TaskDomainError),

    /// A member reference failed domain validation.
    #[error(transparent)]
    User(#[from] UserDomainError),
}

/// A member reference as it appears inside task records.
///
/// The backend populates assignees and the reporter either as plain
/// identifier strings or as embedded documents, depending on the query.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MemberRef {
    /// Plain identifier string.
    Id(String),
    /// Embedded member document; only the identifier is needed here.
    Embedded {
        /// Document identifier.
        #[serde(rename = "_id")]
        id: String,
    },
}

impl MemberRef {
    fn into_user_id(self) -> Result<UserId, UserDomainError> {
        match self {
            Self::Id(id) | Self::Embedded { id } => UserId::new(id),
        }
    }
}

/// Inbound wire model for a task record.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Status column string.
    pub status: String,
    /// Priority string.
    pub priority: String,
    /// Due date; the backend serialises a full datetime.
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Reporter reference.
    pub reporter: MemberRef,
    /// Assignee references.
    #[serde(default)]
    pub assignees: Vec<MemberRef>,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Latest change timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Converts the wire record into a domain task.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDecodeError`] when any field fails parsing or
    /// domain validation.
    pub fn into_task(self) -> Result<Task, RecordDecodeError> {
        let status = TaskStatus::try_from(self.status.as_str())?;
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        let reporter = self.reporter.into_user_id()?;
        let mut assignees = Vec::with_capacity(self.assignees.len());
        for member in self.assignees {
            assignees.push(member.into_user_id()?);
        }
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::new(self.id)?,
            title: self.title,
            description: self.description,
            status,
            priority,
            due_date: self.due_date.map(|datetime| datetime.date_naive()),
            reporter,
            assignees,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}

/// Outbound payload for creating or fully updating a task.
///
/// The reporter is omitted; the backend derives it from the session.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload<'a> {
    /// Task title.
    pub title: &'a str,
    /// Task description.
    pub description: &'a str,
    /// Status column string.
    pub status: &'a str,
    /// Priority string.
    pub priority: &'a str,
    /// Due date as a plain calendar date.
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Assignee identifiers.
    pub assignees: Vec<&'a str>,
}

impl<'a> TaskPayload<'a> {
    /// Builds the full payload for a domain task.
    #[must_use]
    pub fn from_task(task: &'a Task) -> Self {
        Self {
            title: task.title(),
            description: task.description(),
            status: task.status().as_str(),
            priority: task.priority().as_str(),
            due_date: task.due_date(),
            assignees: task.assignees().iter().map(UserId::as_str).collect(),
        }
    }
}

/// Outbound payload for the minimal status-only update issued by the board
/// move flow.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusPatch<'a> {
    /// Status column string.
    pub status: &'a str,
}
