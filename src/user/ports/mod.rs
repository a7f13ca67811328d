//! Port contracts for user directory lookup.
//!
//! Ports define infrastructure-agnostic interfaces used to resolve team
//! member identity.

pub mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
