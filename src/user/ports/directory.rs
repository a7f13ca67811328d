//! Directory port for team roster and member lookup.

use crate::user::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Read-only contract over the team's member records.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns every visible team member, in directory order.
    async fn list_all(&self) -> UserDirectoryResult<Vec<User>>;

    /// Finds a member by identifier.
    ///
    /// Returns `None` when no member carries the identifier.
    async fn find_by_id(&self, id: &UserId) -> UserDirectoryResult<Option<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// Lookup-layer failure.
    #[error("directory error: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a lookup error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
