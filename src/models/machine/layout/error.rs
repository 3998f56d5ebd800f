use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::winding::Phase;

/// Errors raised while building a machine layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("turns per coil must be at least one")]
    TurnsPerCoil(#[source] ConstraintError),

    #[error("pole pairs must be at least one")]
    PolePairs(#[source] ConstraintError),

    #[error("slot count must be at least one")]
    Slots(#[source] ConstraintError),
}

/// Errors raised while editing a winding matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindingError {
    #[error("slot {slot} is out of range for a {slots}-slot winding")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("phase {phase} has no conductor in slot {slot}")]
    EmptyCoilSide { slot: usize, phase: Phase },

    #[error("winding matrix has {rows} rows for {slots} slots")]
    SlotCount { rows: usize, slots: u32 },

    #[error("faulted coil side must keep at least one turn")]
    Turns(#[source] ConstraintError),
}
