//! Move coordination: optimistic apply, single-attempt persistence, and
//! rollback.
//!
//! The service owns the cached board behind a mutex so that every board
//! mutation (the optimistic apply and any rollback) happens atomically
//! with respect to other moves. The persistence await happens outside the
//! lock, so moves on different tasks may overlap while their requests are
//! outstanding; a second move on the same task is rejected until the first
//! resolves.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::board::domain::{Board, MoveError, MoveIntent, MovePhase, MoveStaging};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use crate::user::domain::UserId;

/// A staged move: the optimistic board for immediate rendering plus the
/// capture needed to commit or reverse it.
///
/// Resolve or discard every staged move; an abandoned one keeps its task
/// flagged as in flight so the leak surfaces instead of racing.
#[must_use = "a staged move must be resolved or discarded"]
#[derive(Debug)]
pub struct StagedMove {
    staging: MoveStaging,
    optimistic: Board,
}

impl StagedMove {
    /// Returns the board as it should render right now.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.optimistic
    }

    /// Returns whether the gesture was a same-slot no-op.
    #[must_use]
    pub const fn is_no_op(&self) -> bool {
        matches!(self.staging, MoveStaging::NoOp)
    }
}

/// Terminal outcome of one move.
#[derive(Debug, Clone)]
pub enum MoveResolution {
    /// Same-slot gesture; nothing was mutated and no request was issued.
    NoOp,
    /// The store confirmed the status change; the optimistic board stands.
    Committed,
    /// The single persistence attempt failed and the optimistic mutation
    /// has been reversed.
    RolledBack {
        /// The failure that triggered the rollback.
        error: TaskStoreError,
    },
}

#[derive(Debug, Default)]
struct BoardState {
    board: Board,
    in_flight: HashSet<TaskId>,
}

/// Coordinates board moves against a task store.
#[derive(Clone)]
pub struct BoardMoveService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    state: Arc<Mutex<BoardState>>,
}

impl<S> BoardMoveService<S>
where
    S: TaskStore,
{
    /// Creates a coordinator over an already-projected board.
    #[must_use]
    pub fn new(store: Arc<S>, board: Board) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(BoardState {
                board,
                in_flight: HashSet::new(),
            })),
        }
    }

    /// Returns a snapshot of the current board.
    pub async fn board(&self) -> Board {
        self.state.lock().await.board.clone()
    }

    /// Rebuilds the board from a fresh authoritative task list.
    ///
    /// This is the recovery path after a stale-board rejection, and the
    /// documented way to resolve drift when a rollback raced a store that
    /// had actually applied the change.
    pub async fn replace(&self, tasks: Vec<Task>) -> Board {
        let mut state = self.state.lock().await;
        state.board = Board::project(tasks);
        state.board.clone()
    }

    /// Validates a move and applies it optimistically.
    ///
    /// On success the returned [`StagedMove`] carries the board to render
    /// immediately; the caller then drives [`resolve`](Self::resolve) to
    /// learn whether the move committed or rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MoveInFlight`] when the task already has an
    /// unresolved move, and the validation errors of
    /// [`Board::apply_move`] otherwise. The board is untouched in every
    /// error case.
    pub async fn stage(
        &self,
        intent: MoveIntent,
        actor: &UserId,
    ) -> Result<StagedMove, MoveError> {
        tracing::trace!(
            task_id = %intent.task_id(),
            phase = %MovePhase::Validating,
            "validating board move"
        );
        let mut state = self.state.lock().await;
        if state.in_flight.contains(intent.task_id()) {
            return Err(MoveError::MoveInFlight(intent.task_id().clone()));
        }
        let staging = state.board.apply_move(&intent, actor)?;
        if let MoveStaging::Applied(applied) = &staging {
            state.in_flight.insert(applied.intent().task_id().clone());
            tracing::debug!(
                task_id = %applied.intent().task_id(),
                to = %applied.intent().destination().status(),
                phase = %MovePhase::OptimisticallyApplied,
                "staged board move"
            );
        }
        Ok(StagedMove {
            staging,
            optimistic: state.board.clone(),
        })
    }

    /// Persists a staged move and reconciles the board with the outcome.
    ///
    /// Exactly one update request is issued; there are no retries. On
    /// failure the optimistic mutation is reversed using the capture taken
    /// at staging time. A no-op staging resolves without touching the
    /// store.
    pub async fn resolve(&self, staged: StagedMove) -> MoveResolution {
        let MoveStaging::Applied(applied) = staged.staging else {
            return MoveResolution::NoOp;
        };
        let task_id = applied.intent().task_id().clone();
        let status = applied.intent().destination().status();

        tracing::debug!(
            task_id = %task_id,
            to = %status,
            phase = %MovePhase::Persisting,
            "persisting board move"
        );
        let outcome = self.store.update_status(&task_id, status).await;

        let mut state = self.state.lock().await;
        state.in_flight.remove(&task_id);
        match outcome {
            Ok(()) => {
                tracing::debug!(
                    task_id = %task_id,
                    phase = %MovePhase::Committed,
                    "board move committed"
                );
                MoveResolution::Committed
            }
            Err(error) => {
                state.board.rollback_move(&applied);
                tracing::warn!(
                    task_id = %task_id,
                    error = %error,
                    phase = %MovePhase::RolledBack,
                    "board move rolled back"
                );
                MoveResolution::RolledBack { error }
            }
        }
    }

    /// Stages and resolves in one call, for callers that do not render
    /// between the phases.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`stage`](Self::stage); the
    /// persistence outcome is reported through the resolution.
    pub async fn submit(
        &self,
        intent: MoveIntent,
        actor: &UserId,
    ) -> Result<MoveResolution, MoveError> {
        let staged = self.stage(intent, actor).await?;
        Ok(self.resolve(staged).await)
    }

    /// Abandons a staged move without persisting it, reversing the
    /// optimistic mutation.
    pub async fn discard(&self, staged: StagedMove) {
        let MoveStaging::Applied(applied) = staged.staging else {
            return;
        };
        let mut state = self.state.lock().await;
        state.in_flight.remove(applied.intent().task_id());
        state.board.rollback_move(&applied);
        tracing::debug!(
            task_id = %applied.intent().task_id(),
            phase = %MovePhase::RolledBack,
            "board move discarded"
        );
    }
}
