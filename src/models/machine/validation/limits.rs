use uom::si::{f64::Length, length::meter};

/// A closed acceptance band `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub min: T,
    pub max: T,
}

/// Side of a [`Band`] a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deviation {
    Below,
    Above,
}

impl<T: PartialOrd + Copy> Band<T> {
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the band, bounds included.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.deviation(value).is_none()
    }

    /// Returns which side of the band `value` falls on, if outside it.
    ///
    /// Values that do not compare (`NaN`) are not reported.
    #[must_use]
    pub fn deviation(&self, value: T) -> Option<Deviation> {
        if value < self.min {
            Some(Deviation::Below)
        } else if value > self.max {
            Some(Deviation::Above)
        } else {
            None
        }
    }
}

/// Design bands a machine is checked against.
///
/// Ratios are dimensionless: magnet ratios are relative to the pole pitch,
/// the air gap ratio is relative to the diameter and the salient pole aspect
/// is pole depth over pole width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    pub diameter_to_length: Band<f64>,

    /// Diameter-to-length ratio earning the optimum bonus.
    pub optimal_diameter_to_length: f64,

    /// Half-width of the optimum window around the optimal ratio.
    pub optimal_window: f64,

    pub pole_pitch: Band<Length>,

    /// Magnet thickness ratio for interior magnet machines.
    pub magnet_ratio: Band<f64>,

    pub air_gap_ratio: Band<f64>,

    /// Upper magnet thickness ratio for surface magnet machines.
    pub max_surface_magnet_ratio: f64,

    /// Salient pole depth over width for synchronous reluctance machines.
    pub salient_pole_aspect: Band<f64>,

    /// Magnet thickness ratio for hybrid machines.
    pub hybrid_magnet_ratio: Band<f64>,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            diameter_to_length: Band::new(1.2, 3.0),
            optimal_diameter_to_length: 1.5,
            optimal_window: 0.1,
            pole_pitch: Band::new(Length::new::<meter>(0.02), Length::new::<meter>(0.15)),
            magnet_ratio: Band::new(0.15, 0.35),
            air_gap_ratio: Band::new(0.0005, 0.002),
            max_surface_magnet_ratio: 0.25,
            salient_pole_aspect: Band::new(0.3, 0.7),
            hybrid_magnet_ratio: Band::new(0.2, 0.3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_bounds_are_inclusive() {
        let band = Band::new(1.2, 3.0);

        assert!(band.contains(1.2));
        assert!(band.contains(3.0));
        assert_eq!(band.deviation(1.1), Some(Deviation::Below));
        assert_eq!(band.deviation(3.1), Some(Deviation::Above));
        assert_eq!(band.deviation(f64::NAN), None);
    }

    #[test]
    fn length_band() {
        let limits = ValidationLimits::default();

        assert!(limits.pole_pitch.contains(Length::new::<meter>(0.05)));
        assert_eq!(
            limits.pole_pitch.deviation(Length::new::<meter>(0.2)),
            Some(Deviation::Above)
        );
    }
}
