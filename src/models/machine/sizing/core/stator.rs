use std::f64::consts::PI;

use tracing::debug;
use uom::si::{
    area::square_millimeter,
    f64::{Area, Length},
    length::millimeter,
};

use super::MachineDimensions;

/// Largest share of the per-slot annulus area a slot may occupy.
const MAX_SLOT_OCCUPANCY: f64 = 0.8;

/// Stator dimensions derived from the main dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatorDimensions {
    /// Stator outer radius (`D/2`).
    pub outer_radius: Length,

    /// Radius at the slot bottom (outer radius minus the slot height).
    pub inner_radius: Length,

    pub length: Length,

    /// Slot height, reduced if the slot would not fit.
    pub slot_height: Length,

    pub slot_width: Length,
    pub slots: u32,

    /// Cross-section of one slot at the possibly reduced height.
    pub slot_area: Area,

    /// Cross-section of one slot at the nominal height, before any reduction.
    pub nominal_slot_area: Area,

    /// Annulus area between the two radii, divided by the slot count.
    pub available_area_per_slot: Area,

    /// `true` if the slot height was reduced to fit.
    pub slot_height_reduced: bool,
}

impl StatorDimensions {
    /// Derives stator dimensions from main dimensions.
    ///
    /// If a slot would occupy more than 80 % of its share of the annulus,
    /// its height is reduced to fit and the slot area is recomputed.
    /// A zero slot count is treated as a single slot.
    #[must_use]
    pub fn from_dimensions(dims: &MachineDimensions) -> Self {
        let outer_radius = dims.diameter / 2.0;
        let inner_radius = outer_radius - dims.slot_height;
        let slots = dims.slots;

        let annulus = (outer_radius * outer_radius - inner_radius * inner_radius) * PI;
        let available_area_per_slot = annulus / f64::from(slots.max(1));

        let nominal_slot_area = dims.slot_height * dims.slot_width;
        let mut slot_height = dims.slot_height;
        let mut slot_area = nominal_slot_area;
        let slot_height_reduced = slot_area > available_area_per_slot * MAX_SLOT_OCCUPANCY;

        if slot_height_reduced {
            slot_height = available_area_per_slot * MAX_SLOT_OCCUPANCY / dims.slot_width;
            slot_area = slot_height * dims.slot_width;
            debug!(
                from_mm = dims.slot_height.get::<millimeter>(),
                to_mm = slot_height.get::<millimeter>(),
                available_mm2 = available_area_per_slot.get::<square_millimeter>(),
                "reduced stator slot height to fit"
            );
        }

        Self {
            outer_radius,
            inner_radius,
            length: dims.length,
            slot_height,
            slot_width: dims.slot_width,
            slots,
            slot_area,
            nominal_slot_area,
            available_area_per_slot,
            slot_height_reduced,
        }
    }
}

impl MachineDimensions {
    /// Derives the stator dimensions.
    #[must_use]
    pub fn stator(&self) -> StatorDimensions {
        StatorDimensions::from_dimensions(self)
    }
}
