//! Application services for board move coordination.

mod moves;

pub use moves::{BoardMoveService, MoveResolution, StagedMove};
