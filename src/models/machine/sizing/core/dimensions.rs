use uom::si::f64::{Length, Power, Ratio};

use crate::models::machine::{Application, MachineType};

/// Main dimensions of a sized machine.
///
/// Fields are public so that externally sourced designs (for example a
/// published reference machine) can be validated alongside sized ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineDimensions {
    /// Stator outer diameter `D`.
    pub diameter: Length,

    /// Active (stack) length `L`.
    pub length: Length,

    /// Pole pitch `τp = πD / 2p`.
    pub pole_pitch: Length,

    /// Stator slot count `Zs`.
    pub slots: u32,

    pub slot_height: Length,
    pub slot_width: Length,

    /// Magnet thickness; zero for magnet-free rotors.
    pub magnet_thickness: Length,

    pub air_gap: Length,
    pub pole_pairs: u32,

    /// Rated power the machine was sized for.
    pub power: Power,

    pub machine_type: MachineType,
    pub application: Application,
}

impl MachineDimensions {
    /// Returns the diameter-to-length ratio `D/L`.
    #[must_use]
    pub fn diameter_to_length(&self) -> Ratio {
        self.diameter / self.length
    }

    /// Returns the number of rotor poles (`2p`).
    #[must_use]
    pub fn poles(&self) -> u32 {
        self.pole_pairs.saturating_mul(2)
    }
}
