use std::fmt;

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use super::limits::{Band, Deviation};

/// A main dimension that must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Diameter,
    Length,
    Slots,
    SlotHeight,
    SlotWidth,
    PolePairs,
}

impl Dimension {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Diameter => "diameter",
            Self::Length => "active length",
            Self::Slots => "slot count",
            Self::SlotHeight => "slot height",
            Self::SlotWidth => "slot width",
            Self::PolePairs => "pole pairs",
        }
    }
}

/// A defect that makes a design physically invalid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DesignError {
    /// Value is in metres for lengths and a plain count otherwise.
    #[error("{} must be positive, got {value}", dimension.name())]
    NonPositive { dimension: Dimension, value: f64 },

    #[error(
        "rotor outer radius {:.4} m must exceed inner radius {:.4} m",
        outer.get::<meter>(),
        inner.get::<meter>()
    )]
    RotorRadii { outer: Length, inner: Length },

    #[error(
        "stator outer radius {:.4} m must exceed inner radius {:.4} m",
        outer.get::<meter>(),
        inner.get::<meter>()
    )]
    StatorRadii { outer: Length, inner: Length },
}

/// A design that works but sits outside the recommended bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignWarning {
    /// The slot count does not divide evenly over the poles.
    SlotsNotDivisible { slots: u32, poles: u32 },

    DiameterToLength {
        ratio: f64,
        deviation: Deviation,
        band: Band<f64>,
    },

    PolePitch {
        pole_pitch: Length,
        deviation: Deviation,
        band: Band<Length>,
    },

    AirGap {
        ratio: f64,
        deviation: Deviation,
        band: Band<f64>,
    },

    /// Interior magnet thickness over pole pitch.
    MagnetThickness {
        ratio: f64,
        deviation: Deviation,
        band: Band<f64>,
    },

    /// Surface magnet thickness over pole pitch.
    SurfaceMagnetThickness { ratio: f64, max: f64 },

    /// Salient pole depth over pole width.
    SalientPoleAspect {
        ratio: f64,
        deviation: Deviation,
        band: Band<f64>,
    },

    /// Hybrid magnet thickness over pole pitch.
    HybridMagnetThickness { ratio: f64, band: Band<f64> },
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SlotsNotDivisible { slots, poles } => {
                write!(f, "slot count {slots} is not divisible by {poles} poles")
            }
            Self::DiameterToLength {
                ratio,
                deviation,
                band,
            } => match deviation {
                Deviation::Below => write!(
                    f,
                    "D/L = {ratio:.2} < {} (machine too long)",
                    band.min
                ),
                Deviation::Above => write!(
                    f,
                    "D/L = {ratio:.2} > {} (machine too wide)",
                    band.max
                ),
            },
            Self::PolePitch {
                pole_pitch,
                deviation,
                band,
            } => {
                let tau = pole_pitch.get::<meter>();
                match deviation {
                    Deviation::Below => write!(
                        f,
                        "pole pitch = {tau:.3} m < {} m (too small)",
                        band.min.get::<meter>()
                    ),
                    Deviation::Above => write!(
                        f,
                        "pole pitch = {tau:.3} m > {} m (too large)",
                        band.max.get::<meter>()
                    ),
                }
            }
            Self::AirGap {
                ratio,
                deviation,
                band,
            } => bounded(f, "air gap ratio", ratio, deviation, band, 4),
            Self::MagnetThickness {
                ratio,
                deviation,
                band,
            } => bounded(f, "magnet thickness ratio", ratio, deviation, band, 2),
            Self::SurfaceMagnetThickness { ratio, max } => write!(
                f,
                "surface magnet thickness ratio = {ratio:.2} > {max} (too thick)"
            ),
            Self::SalientPoleAspect {
                ratio,
                deviation,
                band,
            } => match deviation {
                Deviation::Below => write!(
                    f,
                    "pole depth/width = {ratio:.2} < {} (poles too flat)",
                    band.min
                ),
                Deviation::Above => write!(
                    f,
                    "pole depth/width = {ratio:.2} > {} (poles too deep)",
                    band.max
                ),
            },
            Self::HybridMagnetThickness { ratio, band } => write!(
                f,
                "hybrid magnet thickness ratio = {ratio:.2} outside [{}, {}]",
                band.min, band.max
            ),
        }
    }
}

fn bounded(
    f: &mut fmt::Formatter<'_>,
    what: &str,
    ratio: f64,
    deviation: Deviation,
    band: Band<f64>,
    precision: usize,
) -> fmt::Result {
    match deviation {
        Deviation::Below => write!(
            f,
            "{what} = {ratio:.precision$} < {} (too small)",
            band.min
        ),
        Deviation::Above => write!(
            f,
            "{what} = {ratio:.precision$} > {} (too large)",
            band.max
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let warning = DesignWarning::DiameterToLength {
            ratio: 3.456,
            deviation: Deviation::Above,
            band: Band::new(1.2, 3.0),
        };
        assert_eq!(warning.to_string(), "D/L = 3.46 > 3 (machine too wide)");

        let warning = DesignWarning::AirGap {
            ratio: 0.00031,
            deviation: Deviation::Below,
            band: Band::new(0.0005, 0.002),
        };
        assert_eq!(
            warning.to_string(),
            "air gap ratio = 0.0003 < 0.0005 (too small)"
        );

        let error = DesignError::NonPositive {
            dimension: Dimension::SlotWidth,
            value: 0.0,
        };
        assert_eq!(error.to_string(), "slot width must be positive, got 0");
    }
}
