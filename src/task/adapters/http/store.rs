//! Task store backed by the REST API.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use super::models::{StatusPatch, TaskPayload, TaskRecord};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Default bound on any single request before it counts as failed.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`HttpTaskStore`].
#[derive(Debug, Clone)]
pub struct HttpTaskStoreConfig {
    /// Base URL of the backend, e.g. `http://localhost:5001`.
    pub base_url: String,
    /// Bound on any single request; an expired request is treated as a
    /// failure and never retried.
    pub request_timeout: Duration,
}

impl HttpTaskStoreConfig {
    /// Creates a configuration with the default request timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Task store that consumes the backend's `/api/tasks` endpoints.
///
/// Session credentials are attached by the calling environment, not by
/// this adapter. The backend assigns its own identifiers and derives the
/// reporter from the session on create; callers wanting the stored record
/// refresh through [`TaskStore::list_all`].
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskStore {
    /// Creates a store client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: HttpTaskStoreConfig) -> TaskStoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(TaskStoreError::persistence)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn record_url(&self, id: &TaskId) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }
}

/// Maps a response to the port's error taxonomy, turning 404 into
/// [`TaskStoreError::NotFound`] when the request targeted one record.
fn ensure_success(
    response: reqwest::Response,
    target: Option<&TaskId>,
) -> TaskStoreResult<reqwest::Response> {
    if response.status() == StatusCode::NOT_FOUND {
        if let Some(id) = target {
            return Err(TaskStoreError::NotFound(id.clone()));
        }
    }
    response
        .error_for_status()
        .map_err(TaskStoreError::persistence)
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&TaskPayload::from_task(task))
            .send()
            .await
            .map_err(TaskStoreError::persistence)?;
        ensure_success(response, None)?;
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let response = self
            .client
            .put(self.record_url(task.id()))
            .json(&TaskPayload::from_task(task))
            .send()
            .await
            .map_err(TaskStoreError::persistence)?;
        ensure_success(response, Some(task.id()))?;
        Ok(())
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(&StatusPatch {
                status: status.as_str(),
            })
            .send()
            .await
            .map_err(TaskStoreError::persistence)?;
        ensure_success(response, Some(id))?;
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> TaskStoreResult<()> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(TaskStoreError::persistence)?;
        ensure_success(response, Some(id))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let response = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(TaskStoreError::persistence)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let checked = ensure_success(response, None)?;
        let record: TaskRecord = checked.json().await.map_err(TaskStoreError::persistence)?;
        let task = record
            .into_task()
            .map_err(TaskStoreError::persistence)?;
        Ok(Some(task))
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(TaskStoreError::persistence)?;
        let checked = ensure_success(response, None)?;
        let records: Vec<serde_json::Value> =
            checked.json().await.map_err(TaskStoreError::persistence)?;

        // The board declares exactly three columns; a record that cannot
        // be decoded is a data-integrity problem for that record alone.
        let mut tasks = Vec::with_capacity(records.len());
        for value in records {
            match decode_task(value) {
                Ok(task) => tasks.push(task),
                Err(reason) => {
                    tracing::warn!(%reason, "skipping malformed task record");
                }
            }
        }
        Ok(tasks)
    }
}

/// Decodes one listing entry, reporting the failure reason on either the
/// serde or the domain-validation layer.
fn decode_task(value: serde_json::Value) -> Result<Task, String> {
    let record: TaskRecord = serde_json::from_value(value).map_err(|err| err.to_string())?;
    record.into_task().map_err(|err| err.to_string())
}
