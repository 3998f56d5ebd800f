use uom::si::f64::{Angle, Length};

/// Magnet grade used when none is specified.
pub const DEFAULT_MAGNET_GRADE: &str = "N38SH";

/// A permanent magnet inserted in a rotor hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnet {
    pub grade: &'static str,

    /// Axial length.
    pub length: Length,

    /// Thickness in the magnetisation direction.
    pub thickness: Length,

    pub width: Length,
}

/// A set of identical rotor holes evenly spaced around the rotor.
///
/// Holes without magnets are flux barriers for reluctance torque.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleSet {
    /// Number of holes, one per pole.
    pub count: u32,

    /// Radial depth of each hole.
    pub depth: Length,

    pub width: Length,
    pub opening_height: Length,
    pub opening_width: Length,

    /// Angular offset of the first hole.
    pub offset: Angle,

    /// Magnets inserted in each hole.
    pub magnets: Vec<Magnet>,
}

impl HoleSet {
    #[must_use]
    pub fn has_magnets(&self) -> bool {
        !self.magnets.is_empty()
    }
}

/// Rotor lamination stack.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorLamination {
    pub length: Length,
    pub outer_radius: Length,
    pub inner_radius: Length,
    pub holes: Vec<HoleSet>,
}

impl RotorLamination {
    /// Total number of holes carrying magnets.
    #[must_use]
    pub fn magnet_holes(&self) -> u32 {
        self.holes
            .iter()
            .filter(|set| set.has_magnets())
            .map(|set| set.count)
            .sum()
    }

    /// Total number of magnet-free holes.
    #[must_use]
    pub fn reluctance_holes(&self) -> u32 {
        self.holes
            .iter()
            .filter(|set| !set.has_magnets())
            .map(|set| set.count)
            .sum()
    }
}
