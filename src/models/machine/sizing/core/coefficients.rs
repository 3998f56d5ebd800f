use crate::models::machine::{Application, MachineType};

/// Empirical sizing coefficients.
///
/// The defaults are the baseline values for a traction machine.
/// Application-specific factors are applied on top of them per sizing call
/// and never accumulate in the stored coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingCoefficients {
    /// Diameter coefficient `K_D`, in metres per `(W/rpm)^(1/3)`.
    pub k_diameter: f64,

    /// Active length coefficient `K_L`, in metres per `(W/rpm)^(1/3)`.
    pub k_length: f64,

    /// Slot height as a share of the pole pitch.
    pub k_slot: f64,

    /// Magnet coefficient applied to the per-topology magnet share.
    pub k_magnet: f64,

    /// Slot width as a share of the slot height.
    pub slot_width_ratio: f64,

    /// Lower bound enforced on the diameter-to-length ratio.
    pub min_diameter_to_length: f64,

    /// Upper bound enforced on the diameter-to-length ratio.
    pub max_diameter_to_length: f64,

    /// Air gap as a share of the diameter.
    pub air_gap_per_diameter: f64,
}

impl Default for SizingCoefficients {
    fn default() -> Self {
        Self {
            k_diameter: 0.15,
            k_length: 0.10,
            k_slot: 0.1,
            k_magnet: 0.8,
            slot_width_ratio: 0.8,
            min_diameter_to_length: 1.5,
            max_diameter_to_length: 3.0,
            air_gap_per_diameter: 0.001,
        }
    }
}

impl SizingCoefficients {
    /// Returns a copy of these coefficients biased for `application`.
    #[must_use]
    pub fn for_application(&self, application: Application) -> Self {
        let factors = ApplicationFactors::of(application);
        Self {
            k_diameter: self.k_diameter * factors.diameter,
            k_length: self.k_length * factors.length,
            air_gap_per_diameter: self.air_gap_per_diameter * factors.air_gap,
            ..*self
        }
    }
}

/// Multipliers an application applies to the baseline coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplicationFactors {
    pub diameter: f64,
    pub length: f64,
    pub air_gap: f64,
}

impl ApplicationFactors {
    /// Returns the factors for `application`.
    ///
    /// Wind machines are wider and shorter with a larger gap for robustness;
    /// aerospace machines are long and compact with a tight gap.
    #[must_use]
    pub fn of(application: Application) -> Self {
        let (diameter, length, air_gap) = match application {
            Application::Traction => (1.0, 1.0, 1.0),
            Application::Wind => (1.2, 0.8, 1.2),
            Application::Industrial => (0.9, 1.1, 1.1),
            Application::Aerospace => (0.8, 1.3, 0.8),
        };
        Self {
            diameter,
            length,
            air_gap,
        }
    }
}

/// Magnet thickness as a share of the pole pitch, before `K_magnet`.
pub(crate) fn magnet_share(machine_type: MachineType) -> f64 {
    match machine_type {
        MachineType::Ipmsm => 0.3,
        MachineType::Spmsm => 0.2,
        MachineType::SynRel => 0.0,
        MachineType::Hybrid => 0.25,
    }
}

/// Rotor pole width as a share of the pole pitch.
pub(crate) fn pole_arc_share(machine_type: MachineType) -> f64 {
    match machine_type {
        MachineType::Ipmsm => 0.8,
        MachineType::Spmsm => 0.9,
        MachineType::SynRel => 0.7,
        MachineType::Hybrid => 0.75,
    }
}

/// Salient pole depth as a share of the slot height, for reluctance rotors.
pub(crate) fn salient_depth_share(machine_type: MachineType) -> Option<f64> {
    match machine_type {
        MachineType::SynRel => Some(0.8),
        MachineType::Hybrid => Some(0.7),
        MachineType::Ipmsm | MachineType::Spmsm => None,
    }
}
