use std::f64::consts::PI;

use uom::si::f64::Length;

use super::{
    MachineDimensions,
    coefficients::{pole_arc_share, salient_depth_share},
};

/// Shaft radius as a share of the rotor outer radius.
const SHAFT_SHARE: f64 = 0.4;

/// Rotor dimensions derived from the main dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorDimensions {
    /// Rotor outer radius (`D/2` minus the air gap).
    pub outer_radius: Length,

    /// Shaft radius, which is also the rotor lamination bore.
    pub shaft_radius: Length,

    pub length: Length,

    /// Arc width of one rotor pole.
    pub pole_width: Length,

    pub magnet_thickness: Length,
    pub pole_pitch: Length,
    pub pole_pairs: u32,

    /// Depth of the salient reluctance poles, for SynRel and Hybrid rotors.
    pub pole_depth: Option<Length>,
}

impl RotorDimensions {
    /// Derives rotor dimensions from main dimensions.
    #[must_use]
    pub fn from_dimensions(dims: &MachineDimensions) -> Self {
        let outer_radius = dims.diameter / 2.0 - dims.air_gap;

        // Recomputed from D, not read from `dims.pole_pitch`.
        let pole_pitch = dims.diameter * PI / (2.0 * f64::from(dims.pole_pairs.max(1)));

        Self {
            outer_radius,
            shaft_radius: outer_radius * SHAFT_SHARE,
            length: dims.length,
            pole_width: pole_pitch * pole_arc_share(dims.machine_type),
            magnet_thickness: dims.magnet_thickness,
            pole_pitch,
            pole_pairs: dims.pole_pairs,
            pole_depth: salient_depth_share(dims.machine_type)
                .map(|share| dims.slot_height * share),
        }
    }
}

impl MachineDimensions {
    /// Derives the rotor dimensions.
    #[must_use]
    pub fn rotor(&self) -> RotorDimensions {
        RotorDimensions::from_dimensions(self)
    }
}
