//! REST-backed user directory adapter.
//!
//! Consumes the backend's `GET /api/users/all` roster endpoint. Session
//! credentials are attached by the calling environment, not by this
//! adapter.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::user::{
    domain::{User, UserDomainError, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// User directory backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    /// Creates a directory client with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Lookup`] when the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>) -> UserDirectoryResult<Self> {
        Self::with_request_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a directory client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Lookup`] when the HTTP client cannot
    /// be constructed.
    pub fn with_request_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> UserDirectoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UserDirectoryError::lookup)?;
        let raw: String = base_url.into();
        Ok(Self {
            client,
            base_url: raw.trim_end_matches('/').to_owned(),
        })
    }

    fn roster_url(&self) -> String {
        format!("{}/api/users/all", self.base_url)
    }
}

/// Wire model for a member record as the backend serialises it.
#[derive(Debug, Clone, Deserialize)]
struct UserRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    email: Option<String>,
}

impl UserRecord {
    /// Converts the wire record into a domain member.
    fn into_user(self) -> Result<User, UserDomainError> {
        let id = UserId::new(self.id)?;
        let user = User::new(id, self.name)?;
        match self.email {
            Some(email) => user.with_email(email),
            None => Ok(user),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list_all(&self) -> UserDirectoryResult<Vec<User>> {
        let response = self
            .client
            .get(self.roster_url())
            .send()
            .await
            .map_err(UserDirectoryError::lookup)?
            .error_for_status()
            .map_err(UserDirectoryError::lookup)?;
        let records: Vec<serde_json::Value> =
            response.json().await.map_err(UserDirectoryError::lookup)?;

        let mut users = Vec::with_capacity(records.len());
        for value in records {
            match decode_user(value) {
                Ok(user) => users.push(user),
                Err(reason) => {
                    tracing::warn!(%reason, "skipping malformed user record");
                }
            }
        }
        Ok(users)
    }

    async fn find_by_id(&self, id: &UserId) -> UserDirectoryResult<Option<User>> {
        // The backend exposes no per-member lookup outside the session
        // profile, so lookup filters the roster.
        let users = self.list_all().await?;
        Ok(users.into_iter().find(|user| user.id() == id))
    }
}

/// Decodes one roster entry, reporting the failure reason on either the
/// serde or the domain-validation layer.
fn decode_user(value: serde_json::Value) -> Result<User, String> {
    let record: UserRecord =
        serde_json::from_value(value).map_err(|err| err.to_string())?;
    record.into_user().map_err(|err| err.to_string())
}
