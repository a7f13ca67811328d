//! End-to-end board flow over the in-memory store: project the listing,
//! drag tasks between columns, and reconcile with the persistence outcome.

use std::sync::Arc;

use rstest::rstest;
use teamboard::board::domain::{Board, MoveError, MoveIntent, Slot};
use teamboard::board::services::{BoardMoveService, MoveResolution};
use teamboard::task::adapters::memory::InMemoryTaskStore;
use teamboard::task::domain::TaskStatus;
use teamboard::task::ports::TaskStore;

use super::helpers::{
    FlakyTaskStore, assignee, outsider, reporter, seed_task, task_service,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authorized_drag_updates_board_and_store() {
    let store = Arc::new(InMemoryTaskStore::new());
    let service = task_service(Arc::clone(&store));
    let first = seed_task(&service, "Write docs").await;
    seed_task(&service, "Fix bug").await;

    let listing = store.list_all().await.expect("listing should succeed");
    let coordinator = BoardMoveService::new(Arc::clone(&store), Board::project(listing));

    let intent = MoveIntent::new(
        first.id().clone(),
        Slot::new(TaskStatus::Todo, 0),
        Slot::new(TaskStatus::InProgress, 0),
    );
    let staged = coordinator
        .stage(intent, &assignee())
        .await
        .expect("authorized drag should stage");

    // The optimistic projection renders ahead of the store's answer.
    let optimistic = staged.board().clone();
    assert_eq!(optimistic.bucket(TaskStatus::Todo).len(), 1);
    assert_eq!(optimistic.bucket(TaskStatus::InProgress).len(), 1);

    let resolution = coordinator.resolve(staged).await;
    assert!(matches!(resolution, MoveResolution::Committed));

    let stored = store
        .find_by_id(first.id())
        .await
        .expect("lookup should succeed")
        .expect("moved task should exist");
    assert_eq!(stored.status(), TaskStatus::InProgress);
    assert_eq!(coordinator.board().await, optimistic);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_drag_changes_nothing() {
    let store = Arc::new(InMemoryTaskStore::new());
    let service = task_service(Arc::clone(&store));
    let first = seed_task(&service, "Write docs").await;

    let listing = store.list_all().await.expect("listing should succeed");
    let coordinator = BoardMoveService::new(Arc::clone(&store), Board::project(listing));
    let before = coordinator.board().await;

    let intent = MoveIntent::new(
        first.id().clone(),
        Slot::new(TaskStatus::Todo, 0),
        Slot::new(TaskStatus::InProgress, 0),
    );
    let result = coordinator.stage(intent, &outsider()).await;

    assert!(matches!(
        result,
        Err(MoveError::UnauthorizedTransition { .. })
    ));
    assert_eq!(coordinator.board().await, before);
    let stored = store
        .find_by_id(first.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_persistence_restores_the_projection() {
    let inner = InMemoryTaskStore::new();
    let service = task_service(Arc::new(inner.clone()));
    let first = seed_task(&service, "Write docs").await;
    seed_task(&service, "Fix bug").await;

    let flaky = FlakyTaskStore::new(inner);
    let listing = flaky.list_all().await.expect("listing should succeed");
    let coordinator = BoardMoveService::new(Arc::new(flaky.clone()), Board::project(listing));
    let before = coordinator.board().await;

    flaky.set_failing(true);
    let intent = MoveIntent::new(
        first.id().clone(),
        Slot::new(TaskStatus::Todo, 0),
        Slot::new(TaskStatus::InProgress, 0),
    );
    let resolution = coordinator
        .submit(intent, &assignee())
        .await
        .expect("drag should validate");

    assert!(matches!(resolution, MoveResolution::RolledBack { .. }));
    assert_eq!(coordinator.board().await, before);
    let stored = flaky
        .find_by_id(first.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_gesture_recovers_by_reprojecting() {
    let store = Arc::new(InMemoryTaskStore::new());
    let service = task_service(Arc::clone(&store));
    let first = seed_task(&service, "Write docs").await;
    let second = seed_task(&service, "Fix bug").await;

    let listing = store.list_all().await.expect("listing should succeed");
    let coordinator = BoardMoveService::new(Arc::clone(&store), Board::project(listing));

    // The gesture claims the first task at index 1, where the second sits.
    let stale = MoveIntent::new(
        first.id().clone(),
        Slot::new(TaskStatus::Todo, 1),
        Slot::new(TaskStatus::Done, 0),
    );
    let rejected = coordinator.stage(stale, &assignee()).await;
    assert!(matches!(rejected, Err(MoveError::StaleBoard { .. })));

    // Re-projecting from the authoritative listing resolves the mismatch.
    let fresh = store.list_all().await.expect("listing should succeed");
    let board = coordinator.replace(fresh).await;
    assert_eq!(board.bucket(TaskStatus::Todo).len(), 2);

    let retry = MoveIntent::new(
        second.id().clone(),
        Slot::new(TaskStatus::Todo, 1),
        Slot::new(TaskStatus::Done, 0),
    );
    let resolution = coordinator
        .submit(retry, &assignee())
        .await
        .expect("retried drag should validate");
    assert!(matches!(resolution, MoveResolution::Committed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reporter_may_drag_without_being_assigned() {
    let store = Arc::new(InMemoryTaskStore::new());
    let service = task_service(Arc::clone(&store));
    let first = seed_task(&service, "Write docs").await;

    let listing = store.list_all().await.expect("listing should succeed");
    let coordinator = BoardMoveService::new(Arc::clone(&store), Board::project(listing));

    let intent = MoveIntent::new(
        first.id().clone(),
        Slot::new(TaskStatus::Todo, 0),
        Slot::new(TaskStatus::Done, 0),
    );
    let resolution = coordinator
        .submit(intent, &reporter())
        .await
        .expect("reporter drag should validate");

    assert!(matches!(resolution, MoveResolution::Committed));
}
