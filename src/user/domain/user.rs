//! Team member aggregate.

use super::{UserDomainError, UserId};
use serde::{Deserialize, Serialize};

/// A member of the team, as shown in the roster and assignee pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    email: Option<String>,
}

impl User {
    /// Creates a new team member.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyDisplayName`] when the display name
    /// is empty after trimming.
    pub fn new(id: UserId, display_name: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = display_name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(UserDomainError::EmptyDisplayName);
        }
        Ok(Self {
            id,
            display_name: normalized.to_owned(),
            email: None,
        })
    }

    /// Sets the member's email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidEmail`] when the value has no `@`
    /// separator.
    pub fn with_email(mut self, email: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = email.into();
        if !raw.contains('@') {
            return Err(UserDomainError::InvalidEmail(raw));
        }
        self.email = Some(raw);
        Ok(self)
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
