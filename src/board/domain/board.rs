//! The board: tasks grouped into ordered status columns.

use super::{MoveError, MoveIntent};
use crate::task::domain::{Task, TaskStatus};
use crate::user::domain::UserId;

/// Client-side projection of the task list, one ordered bucket per status.
///
/// A board is derived state: it is rebuilt from the authoritative task
/// list whenever that list changes, and every task appears in exactly one
/// bucket, determined solely by its status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

/// Outcome of staging a move against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStaging {
    /// Source and destination slots were identical; nothing changed and
    /// nothing needs persisting.
    NoOp,
    /// The optimistic mutation was applied; the capture reverses it.
    Applied(AppliedMove),
}

/// Everything needed to reverse one optimistic mutation.
///
/// Captured at apply time so that rollback never depends on how the board
/// looks once the persistence outcome arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    intent: MoveIntent,
    original: Task,
    inserted_at: usize,
}

impl AppliedMove {
    /// Returns the intent this capture belongs to.
    #[must_use]
    pub const fn intent(&self) -> &MoveIntent {
        &self.intent
    }

    /// Returns the task as it was before the move, original status intact.
    #[must_use]
    pub const fn original(&self) -> &Task {
        &self.original
    }

    /// Returns the index the copy was actually inserted at, after
    /// clamping.
    #[must_use]
    pub const fn inserted_at(&self) -> usize {
        self.inserted_at
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects a task list into status buckets.
    ///
    /// Single pass; bucket order equals input order. Every task lands in
    /// exactly one bucket, so the bucket lengths always sum to the input
    /// length.
    #[must_use]
    pub fn project(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.bucket_mut(task.status()).push(task);
        }
        board
    }

    /// Returns the bucket for a status column.
    #[must_use]
    pub fn bucket(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Returns the number of tasks across all buckets.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    /// Iterates every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.todo
            .iter()
            .chain(self.in_progress.iter())
            .chain(self.done.iter())
    }

    /// Validates and applies one move optimistically.
    ///
    /// A gesture that drops the task exactly where it was picked up is a
    /// no-op: the board is untouched and nothing needs persisting.
    /// Otherwise the task is removed from the source slot and a copy with
    /// the destination status is inserted at the destination index,
    /// clamped to the bucket length. The returned capture reverses exactly
    /// this mutation.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StaleBoard`] when the source slot does not
    /// hold the claimed task, and [`MoveError::UnauthorizedTransition`]
    /// when `actor` is neither an assignee nor the reporter. Both reject
    /// before any mutation.
    pub fn apply_move(
        &mut self,
        intent: &MoveIntent,
        actor: &UserId,
    ) -> Result<MoveStaging, MoveError> {
        let source = intent.source();
        let destination = intent.destination();
        if source == destination {
            return Ok(MoveStaging::NoOp);
        }

        let picked = self
            .bucket(source.status())
            .get(source.index())
            .ok_or_else(|| MoveError::stale(intent.task_id(), source.status(), source.index()))?;
        if picked.id() != intent.task_id() {
            return Err(MoveError::stale(
                intent.task_id(),
                source.status(),
                source.index(),
            ));
        }
        if !picked.permits_change_by(actor) {
            return Err(MoveError::UnauthorizedTransition {
                task_id: intent.task_id().clone(),
                actor: actor.clone(),
            });
        }

        let original = self.bucket_mut(source.status()).remove(source.index());
        let destination_bucket = self.bucket_mut(destination.status());
        let inserted_at = destination.index().min(destination_bucket.len());
        destination_bucket.insert(
            inserted_at,
            original.clone().with_status(destination.status()),
        );

        Ok(MoveStaging::Applied(AppliedMove {
            intent: intent.clone(),
            original,
            inserted_at,
        }))
    }

    /// Reverses exactly the mutation recorded by `applied`.
    ///
    /// The inserted copy is removed from the destination bucket, at the
    /// captured index when it still holds the task and located by identity
    /// otherwise. The captured original is then reinserted at the source
    /// slot, clamped. When the copy is gone entirely the board has been
    /// rebuilt from the authoritative list and there is nothing left to
    /// reverse.
    pub fn rollback_move(&mut self, applied: &AppliedMove) {
        let destination = applied.intent().destination();
        let destination_bucket = self.bucket_mut(destination.status());

        let at_captured = destination_bucket
            .get(applied.inserted_at())
            .is_some_and(|task| task.id() == applied.intent().task_id());
        let removed = if at_captured {
            Some(destination_bucket.remove(applied.inserted_at()))
        } else {
            destination_bucket
                .iter()
                .position(|task| task.id() == applied.intent().task_id())
                .map(|found| destination_bucket.remove(found))
        };
        if removed.is_none() {
            return;
        }

        let source = applied.intent().source();
        let source_bucket = self.bucket_mut(source.status());
        let reinsert_at = source.index().min(source_bucket.len());
        source_bucket.insert(reinsert_at, applied.original().clone());
    }
}
