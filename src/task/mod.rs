//! Task lifecycle management.
//!
//! This module owns the task aggregate (title, status, priority, due date,
//! reporter, assignees), the create/update/delete lifecycle service, and
//! the task-store port that persists records in the external document
//! store. The store is the sole source of truth for task status; board
//! projections elsewhere in the crate are caches over its listing. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
