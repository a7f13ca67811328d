//! In-memory user directory for tests and local boards.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{User, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashMap<UserId, User>,
    order: Vec<UserId>,
}

impl InMemoryUserDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member to the directory, replacing any record with the same
    /// identifier while keeping its original roster position.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Lookup`] when the directory lock is
    /// poisoned.
    pub fn add(&self, user: User) -> UserDirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserDirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        if !state.users.contains_key(user.id()) {
            state.order.push(user.id().clone());
        }
        state.users.insert(user.id().clone(), user);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list_all(&self) -> UserDirectoryResult<Vec<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserDirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> UserDirectoryResult<Option<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserDirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(state.users.get(id).cloned())
    }
}
