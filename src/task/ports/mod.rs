//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services
//! and the board move flow.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
