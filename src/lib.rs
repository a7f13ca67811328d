//! Teamboard: team task-board engine.
//!
//! This crate provides the core functionality behind a team task-management
//! board: a typed task domain, a board projection grouped by status column,
//! and the drag-move flow that optimistically relocates a task, persists the
//! status change with a single request, and rolls back exactly on failure.
//!
//! # Architecture
//!
//! Teamboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (REST backend, memory)
//! - **Services**: Orchestration over domain types and ports
//!
//! # Modules
//!
//! - [`user`]: Team member identity and the directory port
//! - [`task`]: Task aggregate, lifecycle service, and task-store port
//! - [`board`]: Board projection, priority overlay, and move coordination

pub mod board;
pub mod task;
pub mod user;
