use std::{f64::consts::TAU, fmt, str::FromStr};

use rand::Rng;
use uom::si::{
    acceleration::meter_per_second_squared,
    angle::{degree, radian},
    f64::{Acceleration, Angle, Frequency, Length, Mass},
    frequency::hertz,
    length::{meter, millimeter},
    mass::{gram, kilogram},
};

use crate::models::machine::sizing::MachineDimensions;

use super::{
    Defect, Direction, Fault, FaultCategory, FaultError, FaultGenerator, Impact, ImpactKind,
    Severity, capitalized, parse_kind,
    sampling::{pick, uniform},
};

/// Smallest air gap left by an eccentric or uneven rotor, in meters.
const MIN_GAP: f64 = 1e-4;

const UNBALANCE_MASS: (f64, f64) = (0.001, 0.01);
const UNBALANCE_RADIUS: (f64, f64) = (0.05, 0.2);
const GAP_REDUCTION: (f64, f64) = (0.0005, 0.002);
const GAP_INCREASE: (f64, f64) = (0.002, 0.005);
const VIBRATION_FREQUENCY: (f64, f64) = (10.0, 1000.0);
const VIBRATION_AMPLITUDE: (f64, f64) = (0.001, 0.01);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MechanicalKind {
    Eccentricity,
    BearingWear,
    ShaftBend,
    RotorUnbalance,
    StatorDeformation,
    AirGapVariation,
    Vibration,
    Misalignment,
}

impl MechanicalKind {
    pub const ALL: [Self; 8] = [
        Self::Eccentricity,
        Self::BearingWear,
        Self::ShaftBend,
        Self::RotorUnbalance,
        Self::StatorDeformation,
        Self::AirGapVariation,
        Self::Vibration,
        Self::Misalignment,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Eccentricity => "eccentricity",
            Self::BearingWear => "bearing_wear",
            Self::ShaftBend => "shaft_bend",
            Self::RotorUnbalance => "rotor_unbalance",
            Self::StatorDeformation => "stator_deformation",
            Self::AirGapVariation => "air_gap_variation",
            Self::Vibration => "vibration",
            Self::Misalignment => "misalignment",
        }
    }
}

impl fmt::Display for MechanicalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MechanicalKind {
    type Err = FaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(&Self::ALL, Self::name, FaultCategory::Mechanical, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EccentricityKind {
    Static,
    Dynamic,
    Mixed,
}

impl EccentricityKind {
    pub const ALL: [Self; 3] = [Self::Static, Self::Dynamic, Self::Mixed];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Mixed => "mixed",
        }
    }

    /// Offset range in meters at full severity.
    fn range(self) -> (f64, f64) {
        match self {
            Self::Static => (0.001, 0.01),
            Self::Dynamic => (0.0005, 0.005),
            Self::Mixed => (0.0015, 0.008),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BearingWearLocation {
    InnerRace,
    OuterRace,
    RollingElements,
}

impl BearingWearLocation {
    pub const ALL: [Self; 3] = [Self::InnerRace, Self::OuterRace, Self::RollingElements];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InnerRace => "inner_race",
            Self::OuterRace => "outer_race",
            Self::RollingElements => "rolling_elements",
        }
    }

    fn range(self) -> (f64, f64) {
        match self {
            Self::InnerRace | Self::OuterRace => (0.0001, 0.001),
            Self::RollingElements => (0.00005, 0.0005),
        }
    }

    /// Characteristic defect frequency relative to the shaft frequency.
    #[must_use]
    pub fn frequency_factor(self) -> f64 {
        match self {
            Self::InnerRace => 0.5,
            Self::OuterRace => 0.4,
            Self::RollingElements => 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShaftBend {
    Radial(Length),
    Axial(Length),
    Torsional(Angle),
}

impl ShaftBend {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Radial(_) => "radial",
            Self::Axial(_) => "axial",
            Self::Torsional(_) => "torsional",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BendAxis {
    Radial,
    Axial,
    Torsional,
}

impl BendAxis {
    const ALL: [Self; 3] = [Self::Radial, Self::Axial, Self::Torsional];

    fn draw<R: Rng + ?Sized>(self, rng: &mut R, f: f64) -> ShaftBend {
        match self {
            Self::Radial => {
                ShaftBend::Radial(Length::new::<meter>(uniform(rng, (0.0005, 0.005)) * f))
            }
            Self::Axial => ShaftBend::Axial(Length::new::<meter>(uniform(rng, (0.001, 0.01)) * f)),
            Self::Torsional => {
                ShaftBend::Torsional(Angle::new::<radian>(uniform(rng, (0.001, 0.008)) * f))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeformationKind {
    Radial,
    Axial,
    Thermal,
}

impl DeformationKind {
    pub const ALL: [Self; 3] = [Self::Radial, Self::Axial, Self::Thermal];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Radial => "radial",
            Self::Axial => "axial",
            Self::Thermal => "thermal",
        }
    }

    fn range(self) -> (f64, f64) {
        match self {
            Self::Radial => (0.0005, 0.003),
            Self::Axial => (0.001, 0.005),
            Self::Thermal => (0.0002, 0.002),
        }
    }
}

/// Shape of the air gap around the circumference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapPattern {
    Sinusoidal,
    Random,
    Step,
}

impl GapPattern {
    pub const ALL: [Self; 3] = [Self::Sinusoidal, Self::Random, Self::Step];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sinusoidal => "sinusoidal",
            Self::Random => "random",
            Self::Step => "step",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Misalignment {
    Angular(Angle),
    Parallel(Length),
    Combined(Length),
}

impl Misalignment {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Angular(_) => "angular",
            Self::Parallel(_) => "parallel",
            Self::Combined(_) => "combined",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MisalignmentKind {
    Angular,
    Parallel,
    Combined,
}

impl MisalignmentKind {
    const ALL: [Self; 3] = [Self::Angular, Self::Parallel, Self::Combined];

    fn draw<R: Rng + ?Sized>(self, rng: &mut R, f: f64) -> Misalignment {
        match self {
            Self::Angular => {
                Misalignment::Angular(Angle::new::<radian>(uniform(rng, (0.001, 0.01)) * f))
            }
            Self::Parallel => {
                Misalignment::Parallel(Length::new::<meter>(uniform(rng, (0.0005, 0.005)) * f))
            }
            Self::Combined => {
                Misalignment::Combined(Length::new::<meter>(uniform(rng, (0.001, 0.008)) * f))
            }
        }
    }
}

/// Parameters of a mechanical defect.
///
/// Magnitudes are uniform draws over their range scaled by the severity
/// factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MechanicalFault {
    Eccentricity {
        eccentricity: EccentricityKind,
        offset: Length,
        angle: Angle,
        min_gap: Length,
        max_gap: Length,
        nominal_gap: Length,
    },
    BearingWear {
        location: BearingWearLocation,
        wear: Length,
    },
    ShaftBend {
        bend: ShaftBend,
        /// Position along the shaft as a share of its length.
        position: f64,
    },
    RotorUnbalance {
        mass: Mass,
        radius: Length,
        angle: Angle,
    },
    StatorDeformation {
        deformation: DeformationKind,
        value: Length,
        position: Angle,
    },
    AirGapVariation {
        pattern: GapPattern,
        min_gap: Length,
        max_gap: Length,
        nominal_gap: Length,
    },
    Vibration {
        frequency: Frequency,
        amplitude: Acceleration,
        direction: Direction,
    },
    Misalignment {
        misalignment: Misalignment,
    },
}

impl MechanicalFault {
    #[must_use]
    pub fn kind(&self) -> MechanicalKind {
        match self {
            Self::Eccentricity { .. } => MechanicalKind::Eccentricity,
            Self::BearingWear { .. } => MechanicalKind::BearingWear,
            Self::ShaftBend { .. } => MechanicalKind::ShaftBend,
            Self::RotorUnbalance { .. } => MechanicalKind::RotorUnbalance,
            Self::StatorDeformation { .. } => MechanicalKind::StatorDeformation,
            Self::AirGapVariation { .. } => MechanicalKind::AirGapVariation,
            Self::Vibration { .. } => MechanicalKind::Vibration,
            Self::Misalignment { .. } => MechanicalKind::Misalignment,
        }
    }

    /// Unbalance moment `m·r` in kg·m, for rotor unbalance faults.
    #[must_use]
    pub fn unbalance_moment(&self) -> Option<f64> {
        match self {
            Self::RotorUnbalance { mass, radius, .. } => {
                Some(mass.get::<kilogram>() * radius.get::<meter>())
            }
            _ => None,
        }
    }
}

/// Mechanical defect sampler.
///
/// Gap-related faults start from the nominal air gap of the design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MechanicalFaultGenerator;

impl FaultGenerator for MechanicalFaultGenerator {
    type Kind = MechanicalKind;

    fn category(&self) -> FaultCategory {
        FaultCategory::Mechanical
    }

    fn kinds(&self) -> &'static [MechanicalKind] {
        &MechanicalKind::ALL
    }

    fn random_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> MechanicalKind {
        pick(rng, &MechanicalKind::ALL)
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        kind: MechanicalKind,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let f = severity.factor();
        let nominal = dims.air_gap.get::<meter>();

        let (fault, description, weights) = match kind {
            MechanicalKind::Eccentricity => {
                let eccentricity = pick(rng, &EccentricityKind::ALL);
                let offset = uniform(rng, eccentricity.range()) * f;
                let angle = Angle::new::<radian>(uniform(rng, (0.0, TAU)));
                let fault = MechanicalFault::Eccentricity {
                    eccentricity,
                    offset: Length::new::<meter>(offset),
                    angle,
                    min_gap: Length::new::<meter>((nominal - offset).max(MIN_GAP)),
                    max_gap: Length::new::<meter>(nominal + offset),
                    nominal_gap: dims.air_gap,
                };
                (
                    fault,
                    format!(
                        "{} eccentricity of {:.2} mm at {:.1}°",
                        capitalized(eccentricity.name()),
                        offset * 1e3,
                        angle.get::<degree>()
                    ),
                    ECCENTRICITY_IMPACT,
                )
            }
            MechanicalKind::BearingWear => {
                let location = pick(rng, &BearingWearLocation::ALL);
                let wear = Length::new::<meter>(uniform(rng, location.range()) * f);
                (
                    MechanicalFault::BearingWear { location, wear },
                    format!(
                        "Bearing {} wear of {:.3} mm",
                        location.name(),
                        wear.get::<millimeter>()
                    ),
                    BEARING_IMPACT,
                )
            }
            MechanicalKind::ShaftBend => {
                let bend = pick(rng, &BendAxis::ALL).draw(rng, f);
                let position = uniform(rng, (0.2, 0.8));
                let magnitude = match bend {
                    ShaftBend::Radial(value) | ShaftBend::Axial(value) => {
                        format!("{:.3} mm", value.get::<millimeter>())
                    }
                    ShaftBend::Torsional(value) => format!("{:.4} rad", value.get::<radian>()),
                };
                (
                    MechanicalFault::ShaftBend { bend, position },
                    format!(
                        "{} shaft bend of {magnitude} at {:.0}% of the shaft",
                        capitalized(bend.name()),
                        position * 100.0
                    ),
                    SHAFT_IMPACT,
                )
            }
            MechanicalKind::RotorUnbalance => {
                let mass = Mass::new::<kilogram>(uniform(rng, UNBALANCE_MASS) * f);
                let radius = Length::new::<meter>(uniform(rng, UNBALANCE_RADIUS));
                let angle = Angle::new::<radian>(uniform(rng, (0.0, TAU)));
                (
                    MechanicalFault::RotorUnbalance {
                        mass,
                        radius,
                        angle,
                    },
                    format!(
                        "Unbalance of {:.2} g at {:.1} mm, {:.1}°",
                        mass.get::<gram>(),
                        radius.get::<millimeter>(),
                        angle.get::<degree>()
                    ),
                    UNBALANCE_IMPACT,
                )
            }
            MechanicalKind::StatorDeformation => {
                let deformation = pick(rng, &DeformationKind::ALL);
                let value = Length::new::<meter>(uniform(rng, deformation.range()) * f);
                let position = Angle::new::<radian>(uniform(rng, (0.0, TAU)));
                (
                    MechanicalFault::StatorDeformation {
                        deformation,
                        value,
                        position,
                    },
                    format!(
                        "{} stator deformation of {:.3} mm at {:.1}°",
                        capitalized(deformation.name()),
                        value.get::<millimeter>(),
                        position.get::<degree>()
                    ),
                    DEFORMATION_IMPACT,
                )
            }
            MechanicalKind::AirGapVariation => {
                let pattern = pick(rng, &GapPattern::ALL);
                let min_gap = (nominal - uniform(rng, GAP_REDUCTION) * f).max(MIN_GAP);
                let max_gap = nominal + uniform(rng, GAP_INCREASE) * f;
                (
                    MechanicalFault::AirGapVariation {
                        pattern,
                        min_gap: Length::new::<meter>(min_gap),
                        max_gap: Length::new::<meter>(max_gap),
                        nominal_gap: dims.air_gap,
                    },
                    format!(
                        "{} air gap variation: {:.3} mm to {:.3} mm",
                        capitalized(pattern.name()),
                        min_gap * 1e3,
                        max_gap * 1e3
                    ),
                    GAP_IMPACT,
                )
            }
            MechanicalKind::Vibration => {
                let frequency = Frequency::new::<hertz>(uniform(rng, VIBRATION_FREQUENCY));
                let amplitude = Acceleration::new::<meter_per_second_squared>(
                    uniform(rng, VIBRATION_AMPLITUDE) * f,
                );
                let direction = pick(rng, &Direction::ALL);
                (
                    MechanicalFault::Vibration {
                        frequency,
                        amplitude,
                        direction,
                    },
                    format!(
                        "{} vibration at {:.0} Hz, amplitude {:.3} mm/s²",
                        capitalized(direction.name()),
                        frequency.get::<hertz>(),
                        amplitude.get::<meter_per_second_squared>() * 1e3
                    ),
                    VIBRATION_IMPACT,
                )
            }
            MechanicalKind::Misalignment => {
                let misalignment = pick(rng, &MisalignmentKind::ALL).draw(rng, f);
                let magnitude = match misalignment {
                    Misalignment::Angular(value) => format!("{:.4} rad", value.get::<radian>()),
                    Misalignment::Parallel(value) | Misalignment::Combined(value) => {
                        format!("{:.3} mm", value.get::<millimeter>())
                    }
                };
                (
                    MechanicalFault::Misalignment { misalignment },
                    format!(
                        "{} misalignment of {magnitude}",
                        capitalized(misalignment.name())
                    ),
                    MISALIGNMENT_IMPACT,
                )
            }
        };

        Defect::new(
            severity,
            description,
            Fault::Mechanical(fault),
            Impact::scaled(severity, weights),
        )
    }
}

const ECCENTRICITY_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TorqueRipple, 0.1),
    (ImpactKind::Vibration, 0.15),
    (ImpactKind::EfficiencyLoss, 0.05),
];

const BEARING_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::Vibration, 0.2),
    (ImpactKind::Noise, 0.15),
    (ImpactKind::EfficiencyLoss, 0.08),
];

const SHAFT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::Eccentricity, 0.12),
    (ImpactKind::Vibration, 0.18),
    (ImpactKind::BearingLoad, 0.1),
];

const UNBALANCE_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::Vibration, 0.25),
    (ImpactKind::BearingLoad, 0.15),
    (ImpactKind::Noise, 0.1),
];

const DEFORMATION_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::AirGapVariation, 0.15),
    (ImpactKind::TorqueRipple, 0.12),
    (ImpactKind::EfficiencyLoss, 0.08),
];

const GAP_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TorqueRipple, 0.18),
    (ImpactKind::CoggingTorque, 0.15),
    (ImpactKind::EfficiencyLoss, 0.1),
];

const VIBRATION_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::Noise, 0.2),
    (ImpactKind::BearingLoad, 0.15),
    (ImpactKind::StructuralStress, 0.12),
];

const MISALIGNMENT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::Vibration, 0.2),
    (ImpactKind::BearingLoad, 0.18),
    (ImpactKind::EfficiencyLoss, 0.12),
];
