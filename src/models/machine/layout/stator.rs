use uom::si::f64::Length;

use super::winding::Winding;

/// Stator slot shape, repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub count: u32,
    pub height: Length,
    pub width: Length,
    pub opening_height: Length,
    pub opening_width: Length,
}

/// Wound stator lamination stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StatorLamination {
    pub length: Length,
    pub outer_radius: Length,
    pub inner_radius: Length,
    pub slot: Slot,
    pub winding: Winding,
}
