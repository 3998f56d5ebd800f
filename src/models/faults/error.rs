use rand::distr::weighted;
use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{FaultCategory, Severity};

/// Errors raised while configuring fault generation.
#[derive(Debug, Error)]
pub enum FaultError {
    #[error("severity must lie between 1 and 5")]
    Severity(#[source] ConstraintError),

    #[error("weight of severity {severity} is invalid")]
    Weight {
        severity: Severity,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid severity weights")]
    Weights(#[source] weighted::Error),

    #[error("unknown {category} fault kind: {name}")]
    UnknownKind {
        category: FaultCategory,
        name: String,
    },
}
