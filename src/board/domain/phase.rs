//! Lifecycle phases of one in-flight move.

use std::fmt;

/// Phase of a move between the drag gesture and reconciliation.
///
/// Every move runs `Validating → OptimisticallyApplied → Persisting` and
/// terminates in either `Committed` or `RolledBack`; a same-slot gesture
/// terminates during validation without entering the later phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovePhase {
    /// Checking the origin slot and the acting user's rights.
    Validating,
    /// The board mutation has been applied ahead of confirmation.
    OptimisticallyApplied,
    /// The single status-update request is outstanding.
    Persisting,
    /// The store confirmed the change; the optimistic board stands.
    Committed,
    /// The attempt failed and the mutation has been reversed.
    RolledBack,
}

impl MovePhase {
    /// Returns the canonical representation used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::OptimisticallyApplied => "optimistically_applied",
            Self::Persisting => "persisting",
            Self::Committed => "committed",
            Self::RolledBack => "rolled_back",
        }
    }
}

impl fmt::Display for MovePhase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
