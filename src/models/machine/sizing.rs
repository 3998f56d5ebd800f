//! Empirical ("Boldea") machine sizing.
//!
//! Main dimensions scale with the cube root of the torque proxy `P / n`:
//!
//! ```text
//! x = (P[W] / n[rpm])^(1/3),   D = K_D·x,   L = K_L·x
//! ```
//!
//! The diameter is then clamped so `D/L` stays within `[1.5, 3.0]`, and the
//! pole pitch, slot, magnet and air gap dimensions follow from `D` and the
//! machine topology. Rotor and stator dimensions are derived on demand from
//! the resulting [`MachineDimensions`].

mod core;

use twine_core::Model;

use crate::support::constraint::StrictlyPositive;

pub use self::core::{
    ApplicationFactors, MachineDimensions, RotorDimensions, SizingCoefficients, SizingError,
    SizingInput, StatorDimensions,
};

/// Sizes a machine with the default coefficients.
///
/// # Example
///
/// ```
/// use emachine_models::models::machine::{
///     Application, MachineType,
///     sizing::{self, SizingInput},
/// };
/// use uom::si::{
///     angular_velocity::revolution_per_minute,
///     f64::{AngularVelocity, Power},
///     power::kilowatt,
/// };
///
/// let input = SizingInput::new(
///     Power::new::<kilowatt>(150.0),
///     AngularVelocity::new::<revolution_per_minute>(4000.0),
///     3,
///     MachineType::Hybrid,
///     Application::Traction,
/// )
/// .unwrap();
///
/// let dims = sizing::size(&input);
/// assert_eq!(dims.slots, 20);
/// assert!(dims.rotor().pole_depth.is_some());
/// ```
#[must_use]
pub fn size(input: &SizingInput) -> MachineDimensions {
    BoldeaSizing::default().size(input)
}

/// Empirical sizing model with configurable baseline coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoldeaSizing {
    pub coefficients: SizingCoefficients,
}

impl BoldeaSizing {
    #[must_use]
    pub fn new(coefficients: SizingCoefficients) -> Self {
        Self { coefficients }
    }

    /// Sizes a machine from a validated input.
    #[must_use]
    pub fn size(&self, input: &SizingInput) -> MachineDimensions {
        self::core::size(input, &self.coefficients)
    }
}

/// Sizes a machine, re-checking the rating first.
///
/// Inputs built with [`SizingInput::new_unchecked`] are rejected here rather
/// than producing non-finite dimensions.
impl Model for BoldeaSizing {
    type Input = SizingInput;
    type Output = MachineDimensions;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        StrictlyPositive::new(input.power()).map_err(SizingError::Power)?;
        StrictlyPositive::new(input.speed()).map_err(SizingError::Speed)?;
        StrictlyPositive::new(input.pole_pairs()).map_err(SizingError::PolePairs)?;
        Ok(self.size(input))
    }
}
