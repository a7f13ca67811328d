//! Shared fixtures and store wrappers for in-memory integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mockable::DefaultClock;
use teamboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
    services::{CreateTaskRequest, TaskLifecycleService},
};
use teamboard::user::domain::UserId;

/// Lifecycle service wired to an in-memory store.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskStore, DefaultClock>;

/// Returns the identifier used for the reporting user in fixtures.
pub fn reporter() -> UserId {
    UserId::new("reporter-1").expect("valid user id")
}

/// Returns the identifier used for the assigned developer in fixtures.
pub fn assignee() -> UserId {
    UserId::new("dev-1").expect("valid user id")
}

/// Returns an identifier unrelated to any fixture task.
pub fn outsider() -> UserId {
    UserId::new("bystander-1").expect("valid user id")
}

/// Builds a lifecycle service over a shared in-memory store.
pub fn task_service(store: Arc<InMemoryTaskStore>) -> TestTaskService {
    TaskLifecycleService::new(store, Arc::new(DefaultClock))
}

/// Creates a task assigned to [`assignee`] through the service.
pub async fn seed_task(service: &TestTaskService, title: &str) -> Task {
    service
        .create(
            CreateTaskRequest::new(title).with_assignees(vec![assignee()]),
            reporter(),
        )
        .await
        .expect("seeding a task should succeed")
}

/// Store wrapper whose status updates fail while the outage flag is set.
///
/// Every other operation delegates to the wrapped in-memory store, so a
/// board can be seeded normally and then observe a persistence failure.
#[derive(Clone)]
pub struct FlakyTaskStore {
    inner: InMemoryTaskStore,
    failing: Arc<AtomicBool>,
}

impl FlakyTaskStore {
    /// Wraps an in-memory store with the outage flag cleared.
    pub fn new(inner: InMemoryTaskStore) -> Self {
        Self {
            inner,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sets whether status updates fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskStore for FlakyTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        self.inner.insert(task).await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        self.inner.update(task).await
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TaskStoreError::persistence(std::io::Error::other(
                "injected outage",
            )));
        }
        self.inner.update_status(id, status).await
    }

    async fn remove(&self, id: &TaskId) -> TaskStoreResult<()> {
        self.inner.remove(id).await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.inner.list_all().await
    }
}
