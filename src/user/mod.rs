//! Team member identity and directory lookup.
//!
//! Tasks reference team members twice: the reporter who created the task
//! and the set of assignees designated to work on it. This module owns the
//! identity types those references use, plus the directory port that backs
//! the roster and assignee pickers. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
