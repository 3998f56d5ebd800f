use uom::si::f64::{AngularVelocity, Power};

use crate::{
    models::machine::{Application, MachineType},
    support::constraint::{Constrained, StrictlyPositive},
};

use super::SizingError;

/// Rating and topology a machine is sized for.
///
/// Power and speed are guaranteed strictly positive and the pole pair count
/// is at least one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingInput {
    power: Power,
    speed: AngularVelocity,
    pole_pairs: u32,
    machine_type: MachineType,
    application: Application,
}

impl SizingInput {
    /// Constructs a validated sizing input.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the power or speed is not strictly
    /// positive, or if `pole_pairs` is zero.
    pub fn new(
        power: Power,
        speed: AngularVelocity,
        pole_pairs: u32,
        machine_type: MachineType,
        application: Application,
    ) -> Result<Self, SizingError> {
        let power = StrictlyPositive::new(power).map_err(SizingError::Power)?;
        let speed = StrictlyPositive::new(speed).map_err(SizingError::Speed)?;
        let pole_pairs = StrictlyPositive::new(pole_pairs).map_err(SizingError::PolePairs)?;
        Ok(Self::from_constrained(
            power,
            speed,
            pole_pairs,
            machine_type,
            application,
        ))
    }

    /// Constructs a sizing input from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        power: Constrained<Power, StrictlyPositive>,
        speed: Constrained<AngularVelocity, StrictlyPositive>,
        pole_pairs: Constrained<u32, StrictlyPositive>,
        machine_type: MachineType,
        application: Application,
    ) -> Self {
        Self {
            power: power.into_inner(),
            speed: speed.into_inner(),
            pole_pairs: pole_pairs.into_inner(),
            machine_type,
            application,
        }
    }

    /// Constructs a sizing input without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure power and speed are strictly positive and
    /// `pole_pairs` is non-zero, otherwise the derived dimensions are
    /// meaningless (`NaN` or infinite).
    #[must_use]
    pub fn new_unchecked(
        power: Power,
        speed: AngularVelocity,
        pole_pairs: u32,
        machine_type: MachineType,
        application: Application,
    ) -> Self {
        Self {
            power,
            speed,
            pole_pairs,
            machine_type,
            application,
        }
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    #[must_use]
    pub fn speed(&self) -> AngularVelocity {
        self.speed
    }

    #[must_use]
    pub fn pole_pairs(&self) -> u32 {
        self.pole_pairs
    }

    #[must_use]
    pub fn machine_type(&self) -> MachineType {
        self.machine_type
    }

    #[must_use]
    pub fn application(&self) -> Application {
        self.application
    }
}
