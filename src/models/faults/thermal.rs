use std::{f64::consts::TAU, fmt, str::FromStr};

use rand::Rng;
use uom::si::{
    angle::radian,
    f64::{Angle, TemperatureInterval, Time},
    temperature_interval::kelvin,
    time::second,
};

use crate::models::machine::sizing::MachineDimensions;

use super::{
    Defect, Direction, Fault, FaultCategory, FaultError, FaultGenerator, Impact, ImpactKind,
    Severity, SeverityDistribution, parse_kind,
    sampling::{lerp, pick, pick_distinct, uniform},
};

const HOTSPOT_TEMPERATURE_RISE: (f64, f64) = (20.0, 80.0);
const HOTSPOT_AREA: (f64, f64) = (0.01, 0.15);
const GRADIENT: (f64, f64) = (50.0, 200.0);
const GRADIENT_LENGTH: (f64, f64) = (0.1, 0.5);
const RESISTANCE_REDUCTION: (f64, f64) = (0.1, 0.8);
const COOLING_EFFICIENCY_REDUCTION: (f64, f64) = (0.2, 0.9);
const OVERLOAD_CURRENT: (f64, f64) = (1.1, 2.0);
const OVERLOAD_DURATION: (f64, f64) = (60.0, 3600.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThermalKind {
    Hotspot,
    ThermalGradient,
    InsulationDegradation,
    CoolingFailure,
    Overload,
}

impl ThermalKind {
    pub const ALL: [Self; 5] = [
        Self::Hotspot,
        Self::ThermalGradient,
        Self::InsulationDegradation,
        Self::CoolingFailure,
        Self::Overload,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hotspot => "hotspot",
            Self::ThermalGradient => "thermal_gradient",
            Self::InsulationDegradation => "insulation_degradation",
            Self::CoolingFailure => "cooling_failure",
            Self::Overload => "overload",
        }
    }
}

impl fmt::Display for ThermalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThermalKind {
    type Err = FaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(&Self::ALL, Self::name, FaultCategory::Thermal, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsulationCause {
    MoistureIngress,
    ThermalAging,
    MechanicalStress,
    ChemicalContamination,
}

impl InsulationCause {
    pub const ALL: [Self; 4] = [
        Self::MoistureIngress,
        Self::ThermalAging,
        Self::MechanicalStress,
        Self::ChemicalContamination,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MoistureIngress => "moisture_ingress",
            Self::ThermalAging => "thermal_aging",
            Self::MechanicalStress => "mechanical_stress",
            Self::ChemicalContamination => "chemical_contamination",
        }
    }
}

/// Machine part served by the cooling system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooledComponent {
    Stator,
    Rotor,
    Bearings,
}

impl CooledComponent {
    pub const ALL: [Self; 3] = [Self::Stator, Self::Rotor, Self::Bearings];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoolingCause {
    FanFailure,
    CoolantLeak,
    BlockedAirflow,
    ThermostatFailure,
}

impl CoolingCause {
    pub const ALL: [Self; 4] = [
        Self::FanFailure,
        Self::CoolantLeak,
        Self::BlockedAirflow,
        Self::ThermostatFailure,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FanFailure => "fan_failure",
            Self::CoolantLeak => "coolant_leak",
            Self::BlockedAirflow => "blocked_airflow",
            Self::ThermostatFailure => "thermostat_failure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverloadCause {
    MechanicalOverload,
    VoltageFluctuation,
    FrequencyVariation,
    EnvironmentalConditions,
}

impl OverloadCause {
    pub const ALL: [Self; 4] = [
        Self::MechanicalOverload,
        Self::VoltageFluctuation,
        Self::FrequencyVariation,
        Self::EnvironmentalConditions,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MechanicalOverload => "mechanical_overload",
            Self::VoltageFluctuation => "voltage_fluctuation",
            Self::FrequencyVariation => "frequency_variation",
            Self::EnvironmentalConditions => "environmental_conditions",
        }
    }
}

/// Parameters of a thermal defect.
///
/// Magnitudes grow linearly with severity over their range; positions,
/// directions and causes are drawn at random.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermalFault {
    Hotspot {
        temperature_rise: TemperatureInterval,
        /// Share of the surface affected.
        area: f64,
        /// Radial position as a share of the radius.
        radial_position: f64,
        /// Axial position as a share of the stack length.
        axial_position: f64,
        angular_position: Angle,
    },
    ThermalGradient {
        /// Peak gradient in K/m.
        max_gradient: f64,
        /// Share of the stack length affected.
        affected_length: f64,
        direction: Direction,
    },
    InsulationDegradation {
        /// Relative loss of insulation resistance.
        resistance_reduction: f64,
        phases_affected: u8,
        cause: InsulationCause,
    },
    CoolingFailure {
        /// Relative loss of cooling efficiency.
        efficiency_reduction: f64,
        components: Vec<CooledComponent>,
        cause: CoolingCause,
    },
    Overload {
        /// Current as a multiple of rated current.
        current_factor: f64,
        duration: Time,
        cause: OverloadCause,
    },
}

impl ThermalFault {
    #[must_use]
    pub fn kind(&self) -> ThermalKind {
        match self {
            Self::Hotspot { .. } => ThermalKind::Hotspot,
            Self::ThermalGradient { .. } => ThermalKind::ThermalGradient,
            Self::InsulationDegradation { .. } => ThermalKind::InsulationDegradation,
            Self::CoolingFailure { .. } => ThermalKind::CoolingFailure,
            Self::Overload { .. } => ThermalKind::Overload,
        }
    }
}

/// Thermal defect sampler.
///
/// Thermal faults do not depend on the machine dimensions. Batches default
/// to uniformly distributed severities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThermalFaultGenerator;

impl FaultGenerator for ThermalFaultGenerator {
    type Kind = ThermalKind;

    fn category(&self) -> FaultCategory {
        FaultCategory::Thermal
    }

    fn kinds(&self) -> &'static [ThermalKind] {
        &ThermalKind::ALL
    }

    fn random_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> ThermalKind {
        pick(rng, &ThermalKind::ALL)
    }

    fn default_distribution(&self) -> SeverityDistribution {
        SeverityDistribution::uniform()
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        kind: ThermalKind,
        _dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let f = severity.factor();

        let (fault, description, weights) = match kind {
            ThermalKind::Hotspot => {
                let rise = lerp(HOTSPOT_TEMPERATURE_RISE, f);
                let area = lerp(HOTSPOT_AREA, f);
                let fault = ThermalFault::Hotspot {
                    temperature_rise: TemperatureInterval::new::<kelvin>(rise),
                    area,
                    radial_position: uniform(rng, (0.3, 0.8)),
                    axial_position: uniform(rng, (0.2, 0.8)),
                    angular_position: Angle::new::<radian>(uniform(rng, (0.0, TAU))),
                };
                (
                    fault,
                    format!("Hotspot: +{rise:.1} K over {:.1}% of the surface", area * 100.0),
                    HOTSPOT_IMPACT,
                )
            }
            ThermalKind::ThermalGradient => {
                let max_gradient = lerp(GRADIENT, f);
                let direction = pick(rng, &Direction::ALL);
                let fault = ThermalFault::ThermalGradient {
                    max_gradient,
                    affected_length: lerp(GRADIENT_LENGTH, f),
                    direction,
                };
                (
                    fault,
                    format!(
                        "Thermal gradient: {max_gradient:.0} K/m in the {} direction",
                        direction.name()
                    ),
                    GRADIENT_IMPACT,
                )
            }
            ThermalKind::InsulationDegradation => {
                let resistance_reduction = lerp(RESISTANCE_REDUCTION, f);
                let phases_affected = rng.random_range(1..=3);
                let fault = ThermalFault::InsulationDegradation {
                    resistance_reduction,
                    phases_affected,
                    cause: pick(rng, &InsulationCause::ALL),
                };
                (
                    fault,
                    format!(
                        "Insulation degradation: -{:.1}% resistance, {phases_affected} phase(s) affected",
                        resistance_reduction * 100.0
                    ),
                    INSULATION_IMPACT,
                )
            }
            ThermalKind::CoolingFailure => {
                let efficiency_reduction = lerp(COOLING_EFFICIENCY_REDUCTION, f);
                let count = rng.random_range(1..=CooledComponent::ALL.len());
                let components = pick_distinct(rng, &CooledComponent::ALL, count);
                let cause = pick(rng, &CoolingCause::ALL);
                let fault = ThermalFault::CoolingFailure {
                    efficiency_reduction,
                    components,
                    cause,
                };
                (
                    fault,
                    format!(
                        "Cooling failure: -{:.1}% efficiency, {}",
                        efficiency_reduction * 100.0,
                        cause.name()
                    ),
                    COOLING_IMPACT,
                )
            }
            ThermalKind::Overload => {
                let current_factor = lerp(OVERLOAD_CURRENT, f);
                let seconds = lerp(OVERLOAD_DURATION, f);
                let cause = pick(rng, &OverloadCause::ALL);
                let fault = ThermalFault::Overload {
                    current_factor,
                    duration: Time::new::<second>(seconds),
                    cause,
                };
                (
                    fault,
                    format!(
                        "Thermal overload: {current_factor:.1}x current for {seconds:.0} s, cause: {}",
                        cause.name()
                    ),
                    OVERLOAD_IMPACT,
                )
            }
        };

        Defect::new(
            severity,
            description,
            Fault::Thermal(fault),
            Impact::scaled(severity, weights),
        )
    }
}

const HOTSPOT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TemperatureRise, 0.2),
    (ImpactKind::ThermalStress, 0.15),
    (ImpactKind::EfficiencyLoss, 0.05),
];

const GRADIENT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::ThermalStress, 0.2),
    (ImpactKind::StructuralStress, 0.1),
    (ImpactKind::TemperatureRise, 0.1),
];

const INSULATION_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::LeakageCurrent, 0.2),
    (ImpactKind::SafetyRisk, 0.25),
    (ImpactKind::TemperatureRise, 0.1),
];

const COOLING_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TemperatureRise, 0.3),
    (ImpactKind::EfficiencyLoss, 0.1),
    (ImpactKind::ThermalStress, 0.2),
];

const OVERLOAD_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TemperatureRise, 0.25),
    (ImpactKind::ThermalStress, 0.2),
    (ImpactKind::EfficiencyLoss, 0.1),
];
