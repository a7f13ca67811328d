//! Error types for the board move flow.

use crate::task::domain::{TaskId, TaskStatus};
use crate::user::domain::UserId;
use thiserror::Error;

/// Errors that reject a move before any board mutation.
///
/// Persistence failures are not part of this taxonomy: they arrive after
/// the optimistic mutation and are reported through the move resolution,
/// together with the rollback they trigger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The displayed board no longer matches the move's origin slot. The
    /// intent must be discarded and the board re-projected from the
    /// authoritative task list.
    #[error("board does not match move origin {status}[{index}] for task {task_id}")]
    StaleBoard {
        /// Task the gesture claimed to pick up.
        task_id: TaskId,
        /// Claimed origin column.
        status: TaskStatus,
        /// Claimed origin index.
        index: usize,
    },

    /// The acting user is neither an assignee nor the reporter.
    #[error("user {actor} may not change the status of task {task_id}")]
    UnauthorizedTransition {
        /// Task the move targeted.
        task_id: TaskId,
        /// User who attempted the move.
        actor: UserId,
    },

    /// Another move for the same task is still awaiting persistence.
    #[error("task {0} already has a move awaiting persistence")]
    MoveInFlight(TaskId),
}

impl MoveError {
    /// Builds the stale-board rejection for an intent's origin slot.
    pub(crate) fn stale(task_id: &TaskId, status: TaskStatus, index: usize) -> Self {
        Self::StaleBoard {
            task_id: task_id.clone(),
            status,
            index,
        }
    }
}
