//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The email address is missing an `@` separator.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
