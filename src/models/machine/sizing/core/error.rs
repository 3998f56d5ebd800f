use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while assembling a sizing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizingError {
    /// Rated power failed its constraint.
    #[error("rated power must be strictly positive")]
    Power(#[source] ConstraintError),

    /// Rated speed failed its constraint.
    #[error("rated speed must be strictly positive")]
    Speed(#[source] ConstraintError),

    /// Pole pair count failed its constraint.
    #[error("pole pairs must be at least one")]
    PolePairs(#[source] ConstraintError),
}
