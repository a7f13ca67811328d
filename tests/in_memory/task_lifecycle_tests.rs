//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use rstest::rstest;
use teamboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};

use super::helpers::{assignee, outsider, reporter, seed_task, task_service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_surface_in_the_listing_in_order() {
    let service = task_service(Arc::new(InMemoryTaskStore::new()));
    seed_task(&service, "First").await;
    seed_task(&service, "Second").await;

    let listed = service.list_all().await.expect("listing should succeed");

    let titles: Vec<&str> = listed.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert!(listed.iter().all(|task| task.status() == TaskStatus::Todo));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_edit_round_trip_through_the_store() {
    let service = task_service(Arc::new(InMemoryTaskStore::new()));
    let created = seed_task(&service, "Initial").await;

    let updated = service
        .update(
            UpdateTaskRequest::new(created.id().clone())
                .with_description("Now with details")
                .with_priority(TaskPriority::High)
                .with_assignees(vec![assignee(), outsider()]),
            &reporter(),
        )
        .await
        .expect("reporter edit should succeed");

    assert_eq!(updated.description(), "Now with details");
    assert_eq!(updated.priority(), TaskPriority::High);
    assert_eq!(updated.assignees().len(), 2);
    let stored = service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn newly_added_assignee_gains_edit_rights() {
    let service = task_service(Arc::new(InMemoryTaskStore::new()));
    let created = service
        .create(CreateTaskRequest::new("Unassigned"), reporter())
        .await
        .expect("task creation should succeed");

    let denied = service
        .update(
            UpdateTaskRequest::new(created.id().clone()).with_title("Taken over"),
            &outsider(),
        )
        .await;
    assert!(matches!(
        denied,
        Err(TaskLifecycleError::EditNotPermitted { .. })
    ));

    service
        .update(
            UpdateTaskRequest::new(created.id().clone()).with_assignees(vec![outsider()]),
            &reporter(),
        )
        .await
        .expect("reporter may hand the task over");

    let renamed = service
        .update(
            UpdateTaskRequest::new(created.id().clone()).with_title("Taken over"),
            &outsider(),
        )
        .await
        .expect("new assignee may edit");
    assert_eq!(renamed.title(), "Taken over");
}
