//! Design validation against empirical bands.
//!
//! A [`Validator`] checks a set of [`MachineDimensions`] and returns a
//! [`Validation`] holding typed [`DesignError`]s (physically invalid designs)
//! and [`DesignWarning`]s (designs outside the recommended bands), together
//! with an additive score:
//!
//! | Condition                                   | Points |
//! |---------------------------------------------|--------|
//! | base                                        | 50     |
//! | no warnings                                 | +20    |
//! | no errors                                   | +30    |
//! | `D/L` inside its band and near the optimum  | +20    |
//!
//! The score is capped at 100.

mod finding;
mod limits;
mod quality;
mod report;

use uom::si::{f64::Length, length::meter, ratio::ratio};

use crate::{
    models::machine::{
        MachineType,
        sizing::{MachineDimensions, RotorDimensions, StatorDimensions},
    },
    support::constraint::StrictlyPositive,
};

pub use finding::{DesignError, DesignWarning, Dimension};
pub use limits::{Band, Deviation, ValidationLimits};
pub use quality::{QualityLevel, Recommendation};
pub use report::ValidationReport;

const BASE_SCORE: f64 = 50.0;
const NO_WARNINGS_BONUS: f64 = 20.0;
const NO_ERRORS_BONUS: f64 = 30.0;
const OPTIMAL_RATIO_BONUS: f64 = 20.0;
const MAX_SCORE: f64 = 100.0;

/// Checks machine designs against a set of [`ValidationLimits`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Validator {
    pub limits: ValidationLimits,
}

/// Outcome of validating one design.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    score: f64,
    warnings: Vec<DesignWarning>,
    errors: Vec<DesignError>,
    optimal_ratio: bool,
}

impl Validator {
    #[must_use]
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Validates main dimensions.
    ///
    /// Salient pole checks use the rotor derived from `dims`; radius
    /// consistency is only checked by [`Validator::validate_with_parts`].
    #[must_use]
    pub fn validate(&self, dims: &MachineDimensions) -> Validation {
        let mut findings = Findings::default();
        check_dimensions(dims, &mut findings);
        self.check_ratios(dims, &mut findings);
        self.check_topology(dims, &dims.rotor(), &mut findings);
        findings.finish()
    }

    /// Validates main dimensions together with explicit rotor and stator
    /// dimensions, including radius consistency.
    #[must_use]
    pub fn validate_with_parts(
        &self,
        dims: &MachineDimensions,
        rotor: &RotorDimensions,
        stator: &StatorDimensions,
    ) -> Validation {
        let mut findings = Findings::default();
        check_dimensions(dims, &mut findings);
        check_radii(rotor, stator, &mut findings);
        self.check_ratios(dims, &mut findings);
        self.check_topology(dims, rotor, &mut findings);
        findings.finish()
    }

    fn check_ratios(&self, dims: &MachineDimensions, findings: &mut Findings) {
        let limits = &self.limits;

        let dl = dims.diameter_to_length().get::<ratio>();
        match limits.diameter_to_length.deviation(dl) {
            Some(deviation) => findings.warnings.push(DesignWarning::DiameterToLength {
                ratio: dl,
                deviation,
                band: limits.diameter_to_length,
            }),
            None => {
                findings.optimal_ratio =
                    (dl - limits.optimal_diameter_to_length).abs() < limits.optimal_window;
            }
        }

        if let Some(deviation) = limits.pole_pitch.deviation(dims.pole_pitch) {
            findings.warnings.push(DesignWarning::PolePitch {
                pole_pitch: dims.pole_pitch,
                deviation,
                band: limits.pole_pitch,
            });
        }

        let gap_ratio = (dims.air_gap / dims.diameter).get::<ratio>();
        if let Some(deviation) = limits.air_gap_ratio.deviation(gap_ratio) {
            findings.warnings.push(DesignWarning::AirGap {
                ratio: gap_ratio,
                deviation,
                band: limits.air_gap_ratio,
            });
        }
    }

    fn check_topology(
        &self,
        dims: &MachineDimensions,
        rotor: &RotorDimensions,
        findings: &mut Findings,
    ) {
        let limits = &self.limits;
        let magnet_ratio = ratio_of(dims.magnet_thickness, dims.pole_pitch);

        match dims.machine_type {
            MachineType::Ipmsm => {
                if let Some(deviation) = limits.magnet_ratio.deviation(magnet_ratio) {
                    findings.warnings.push(DesignWarning::MagnetThickness {
                        ratio: magnet_ratio,
                        deviation,
                        band: limits.magnet_ratio,
                    });
                }
            }
            MachineType::Spmsm => {
                if magnet_ratio > limits.max_surface_magnet_ratio {
                    findings.warnings.push(DesignWarning::SurfaceMagnetThickness {
                        ratio: magnet_ratio,
                        max: limits.max_surface_magnet_ratio,
                    });
                }
            }
            MachineType::SynRel => {
                if let Some(depth) = rotor.pole_depth {
                    let aspect = ratio_of(depth, rotor.pole_width);
                    if let Some(deviation) = limits.salient_pole_aspect.deviation(aspect) {
                        findings.warnings.push(DesignWarning::SalientPoleAspect {
                            ratio: aspect,
                            deviation,
                            band: limits.salient_pole_aspect,
                        });
                    }
                }
            }
            MachineType::Hybrid => {
                if !limits.hybrid_magnet_ratio.contains(magnet_ratio) {
                    findings.warnings.push(DesignWarning::HybridMagnetThickness {
                        ratio: magnet_ratio,
                        band: limits.hybrid_magnet_ratio,
                    });
                }
            }
        }
    }
}

fn check_dimensions(dims: &MachineDimensions, findings: &mut Findings) {
    let lengths = [
        (Dimension::Diameter, dims.diameter),
        (Dimension::Length, dims.length),
        (Dimension::SlotHeight, dims.slot_height),
        (Dimension::SlotWidth, dims.slot_width),
    ];
    for (dimension, value) in lengths {
        if StrictlyPositive::new(value).is_err() {
            findings.errors.push(DesignError::NonPositive {
                dimension,
                value: value.get::<meter>(),
            });
        }
    }

    let counts = [
        (Dimension::Slots, dims.slots),
        (Dimension::PolePairs, dims.pole_pairs),
    ];
    for (dimension, value) in counts {
        if value == 0 {
            findings.errors.push(DesignError::NonPositive {
                dimension,
                value: 0.0,
            });
        }
    }

    let poles = dims.poles();
    if poles > 0 && dims.slots % poles != 0 {
        findings.warnings.push(DesignWarning::SlotsNotDivisible {
            slots: dims.slots,
            poles,
        });
    }
}

fn check_radii(rotor: &RotorDimensions, stator: &StatorDimensions, findings: &mut Findings) {
    if rotor.outer_radius <= rotor.shaft_radius {
        findings.errors.push(DesignError::RotorRadii {
            outer: rotor.outer_radius,
            inner: rotor.shaft_radius,
        });
    }
    if stator.outer_radius <= stator.inner_radius {
        findings.errors.push(DesignError::StatorRadii {
            outer: stator.outer_radius,
            inner: stator.inner_radius,
        });
    }
}

fn ratio_of(numerator: Length, denominator: Length) -> f64 {
    (numerator / denominator).get::<ratio>()
}

#[derive(Debug, Default)]
struct Findings {
    warnings: Vec<DesignWarning>,
    errors: Vec<DesignError>,
    optimal_ratio: bool,
}

impl Findings {
    fn finish(self) -> Validation {
        let mut score = BASE_SCORE;
        if self.warnings.is_empty() {
            score += NO_WARNINGS_BONUS;
        }
        if self.errors.is_empty() {
            score += NO_ERRORS_BONUS;
        }
        // Stacks with the other bonuses; only the cap bounds the total.
        if self.optimal_ratio {
            score += OPTIMAL_RATIO_BONUS;
        }

        Validation {
            score: score.min(MAX_SCORE),
            warnings: self.warnings,
            errors: self.errors,
            optimal_ratio: self.optimal_ratio,
        }
    }
}

impl Validation {
    /// Returns the score, in `[0, 100]`.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn warnings(&self) -> &[DesignWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn errors(&self) -> &[DesignError] {
        &self.errors
    }

    /// Returns `true` if the design has no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if `D/L` earned the optimum bonus.
    #[must_use]
    pub fn has_optimal_ratio(&self) -> bool {
        self.optimal_ratio
    }

    #[must_use]
    pub fn quality(&self) -> QualityLevel {
        QualityLevel::from_score(self.score)
    }

    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_score(self.score)
    }

    /// Returns a printable report of this validation for `dims`.
    #[must_use]
    pub fn report<'a>(&'a self, dims: &'a MachineDimensions) -> ValidationReport<'a> {
        ValidationReport {
            dims,
            validation: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{f64::Power, power::kilowatt};

    use crate::models::machine::Application;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    /// A compact traction IPMSM sitting inside every band.
    fn nominal() -> MachineDimensions {
        let diameter = 0.15;
        let tau = PI * diameter / 4.0;
        MachineDimensions {
            diameter: m(diameter),
            length: m(0.10),
            pole_pitch: m(tau),
            slots: 12,
            slot_height: m(0.1 * tau),
            slot_width: m(0.08 * tau),
            magnet_thickness: m(0.24 * tau),
            air_gap: m(0.001 * diameter),
            pole_pairs: 2,
            power: Power::new::<kilowatt>(50.0),
            machine_type: MachineType::Ipmsm,
            application: Application::Traction,
        }
    }

    #[test]
    fn nominal_design_scores_full_marks() {
        let dims = nominal();
        let validation =
            Validator::default().validate_with_parts(&dims, &dims.rotor(), &dims.stator());

        assert!(validation.warnings().is_empty(), "{:?}", validation.warnings());
        assert!(validation.is_valid());
        assert!(validation.has_optimal_ratio());
        assert_relative_eq!(validation.score(), 100.0);
        assert_eq!(validation.quality(), QualityLevel::Excellent);
        assert_eq!(validation.recommendation(), Recommendation::Conforming);
    }

    #[test]
    fn optimal_bonus_offsets_a_warning() {
        let dims = MachineDimensions {
            pole_pitch: m(0.2),
            magnet_thickness: m(0.24 * 0.2),
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);

        assert_eq!(validation.warnings().len(), 1);
        assert!(matches!(
            validation.warnings()[0],
            DesignWarning::PolePitch {
                deviation: Deviation::Above,
                ..
            }
        ));
        assert_relative_eq!(validation.score(), 100.0);
    }

    #[test]
    fn warning_without_bonus() {
        let dims = MachineDimensions {
            length: m(0.06),
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);

        // D/L = 2.5 is inside the band but away from the optimum.
        assert!(validation.warnings().is_empty());
        assert!(!validation.has_optimal_ratio());
        assert_relative_eq!(validation.score(), 100.0);

        let dims = MachineDimensions {
            length: m(0.04),
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);

        assert!(matches!(
            validation.warnings(),
            [DesignWarning::DiameterToLength {
                deviation: Deviation::Above,
                ..
            }]
        ));
        assert_relative_eq!(validation.score(), 80.0);
        assert_eq!(validation.quality(), QualityLevel::VeryGood);
        assert_eq!(validation.recommendation(), Recommendation::AdjustRatios);
    }

    #[test]
    fn non_positive_dimensions_are_errors() {
        let dims = MachineDimensions {
            slot_width: m(0.0),
            slots: 0,
            length: m(0.06),
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);

        assert!(!validation.is_valid());
        assert_eq!(
            validation.errors(),
            &[
                DesignError::NonPositive {
                    dimension: Dimension::SlotWidth,
                    value: 0.0
                },
                DesignError::NonPositive {
                    dimension: Dimension::Slots,
                    value: 0.0
                },
            ]
        );
        assert_relative_eq!(validation.score(), 70.0);
        assert_eq!(validation.quality(), QualityLevel::Good);
    }

    #[test]
    fn zero_pole_pairs_do_not_panic() {
        let dims = MachineDimensions {
            pole_pairs: 0,
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);

        assert!(validation.errors().contains(&DesignError::NonPositive {
            dimension: Dimension::PolePairs,
            value: 0.0
        }));
    }

    #[test]
    fn indivisible_slots() {
        let dims = MachineDimensions {
            slots: 14,
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);

        assert_eq!(
            validation.warnings(),
            &[DesignWarning::SlotsNotDivisible {
                slots: 14,
                poles: 4
            }]
        );
    }

    #[test]
    fn radius_checks_need_parts() {
        let dims = nominal();
        let mut rotor = dims.rotor();
        rotor.shaft_radius = rotor.outer_radius;

        let validation = Validator::default().validate_with_parts(&dims, &rotor, &dims.stator());
        assert!(matches!(
            validation.errors(),
            [DesignError::RotorRadii { .. }]
        ));
        assert!(Validator::default().validate(&dims).is_valid());
    }

    #[test]
    fn topology_specific_checks() {
        let validator = Validator::default();
        let tau = nominal().pole_pitch;

        let spmsm = MachineDimensions {
            machine_type: MachineType::Spmsm,
            magnet_thickness: tau * 0.3,
            ..nominal()
        };
        assert!(matches!(
            validator.validate(&spmsm).warnings(),
            [DesignWarning::SurfaceMagnetThickness { .. }]
        ));

        let hybrid = MachineDimensions {
            machine_type: MachineType::Hybrid,
            magnet_thickness: tau * 0.35,
            ..nominal()
        };
        assert!(matches!(
            validator.validate(&hybrid).warnings(),
            [DesignWarning::HybridMagnetThickness { .. }]
        ));

        // Sized SynRel poles are shallow: 0.08 τp deep over 0.7 τp wide.
        let synrel = MachineDimensions {
            machine_type: MachineType::SynRel,
            magnet_thickness: m(0.0),
            ..nominal()
        };
        assert!(matches!(
            validator.validate(&synrel).warnings(),
            [DesignWarning::SalientPoleAspect {
                deviation: Deviation::Below,
                ..
            }]
        ));

        let thin = MachineDimensions {
            magnet_thickness: tau * 0.1,
            ..nominal()
        };
        assert!(matches!(
            validator.validate(&thin).warnings(),
            [DesignWarning::MagnetThickness {
                deviation: Deviation::Below,
                ..
            }]
        ));
    }

    #[test]
    fn report_lists_findings() {
        let dims = MachineDimensions {
            length: m(0.04),
            ..nominal()
        };
        let validation = Validator::default().validate(&dims);
        let text = validation.report(&dims).to_string();

        assert!(text.contains("Machine: IPMSM (traction)"));
        assert!(text.contains("Score: 80.0/100"));
        assert!(text.contains("Status: VALID"));
        assert!(text.contains("=== WARNINGS ==="));
        assert!(!text.contains("=== ERRORS ==="));
        assert!(text.contains("Adjust some geometric ratios"));
    }
}
