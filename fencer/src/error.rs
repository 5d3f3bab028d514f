use thiserror::Error;

/// Failures reported by the planner and the editing session.
///
/// Recoverable conditions (a height query miss, a zero-length edge, too few anchor points)
/// are never reported as errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Rejected before any work is done, e.g. a non-positive element length
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An editing operation was requested in a state that does not allow it
    #[error("invalid session state: {0}")]
    InvalidState(String),
}
