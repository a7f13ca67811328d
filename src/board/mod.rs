//! Board projection and move coordination.
//!
//! A board is the derived, client-owned view of the task list grouped into
//! status columns. This module implements the projection, the display-only
//! priority ordering, the dashboard summary, and the drag-move flow:
//! validate, authorize, apply optimistically, persist with a single
//! attempt, and roll back exactly on failure. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! Persistence goes through the task-store port owned by [`crate::task`];
//! the board carries no adapters of its own.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
