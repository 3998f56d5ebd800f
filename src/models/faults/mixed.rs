use std::{fmt, str::FromStr};

use rand::Rng;
use uom::si::{
    f64::Time,
    time::{hour, year},
};

use crate::models::machine::sizing::MachineDimensions;

use super::{
    Defect, ElectricalFaultGenerator, ElectricalKind, Fault, FaultCategory, FaultError,
    FaultGenerator, Impact, ImpactKind, MechanicalFaultGenerator, MechanicalKind, Severity,
    ThermalFaultGenerator, ThermalKind, capitalized, parse_kind,
    sampling::{pick, uniform},
};

const MACHINE_AGE: (f64, f64) = (5.0, 20.0);
const OVERLOAD_DURATION: (f64, f64) = (0.5, 8.0);

/// Overloads shorter than this, in hours, leave the machine recoverable.
const RECOVERABLE_OVERLOAD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MixedKind {
    ThermalMechanical,
    ThermalElectrical,
    MechanicalElectrical,
    CascadeFailure,
    AgingRelated,
    OverloadInduced,
    Environmental,
    MaintenanceRelated,
}

impl MixedKind {
    pub const ALL: [Self; 8] = [
        Self::ThermalMechanical,
        Self::ThermalElectrical,
        Self::MechanicalElectrical,
        Self::CascadeFailure,
        Self::AgingRelated,
        Self::OverloadInduced,
        Self::Environmental,
        Self::MaintenanceRelated,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ThermalMechanical => "thermal_mechanical",
            Self::ThermalElectrical => "thermal_electrical",
            Self::MechanicalElectrical => "mechanical_electrical",
            Self::CascadeFailure => "cascade_failure",
            Self::AgingRelated => "aging_related",
            Self::OverloadInduced => "overload_induced",
            Self::Environmental => "environmental",
            Self::MaintenanceRelated => "maintenance_related",
        }
    }
}

impl fmt::Display for MixedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixedKind {
    type Err = FaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(&Self::ALL, Self::name, FaultCategory::Mixed, s)
    }
}

/// A pair of fault families sampled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coupling {
    ThermalMechanical,
    ThermalElectrical,
    MechanicalElectrical,
}

impl Coupling {
    /// Interaction gain `k` in the factor `1 + k·f`.
    #[must_use]
    pub fn gain(self) -> f64 {
        match self {
            Self::ThermalMechanical => 0.5,
            Self::ThermalElectrical => 0.6,
            Self::MechanicalElectrical => 0.4,
        }
    }

    /// Interaction factor `1 + k·s/5`.
    #[must_use]
    pub fn interaction_factor(self, severity: Severity) -> f64 {
        1.0 + self.gain() * severity.factor()
    }

    /// Named scenarios as `(name, label)` pairs.
    fn scenarios(self) -> &'static [(&'static str, &'static str); 3] {
        match self {
            Self::ThermalMechanical => &[
                ("hotspot_bearing_wear", "hotspot with bearing wear"),
                ("thermal_deformation_vibration", "thermal deformation with vibration"),
                ("cooling_failure_misalignment", "cooling failure with misalignment"),
            ],
            Self::ThermalElectrical => &[
                ("overheating_insulation", "overheating with insulation degradation"),
                ("thermal_gradient_winding", "thermal gradient with winding fault"),
                ("hotspot_demagnetization", "hotspot with demagnetization"),
            ],
            Self::MechanicalElectrical => &[
                ("vibration_winding", "vibration with winding fault"),
                ("eccentricity_phase_unbalance", "eccentricity with phase unbalance"),
                ("bearing_wear_eddy_current", "bearing wear with eddy currents"),
            ],
        }
    }

    /// How the combined impact is built: each target kind is the sum of a
    /// kind read from the first defect and a kind read from the second.
    fn combination(self) -> &'static [(ImpactKind, Option<ImpactKind>, Option<ImpactKind>)] {
        use ImpactKind::{
            BearingLoad, EfficiencyLoss, SafetyRisk, StructuralStress, TemperatureRise,
            ThermalStress, TorqueRipple, Vibration,
        };

        match self {
            Self::ThermalMechanical => &[
                (TemperatureRise, Some(TemperatureRise), Some(ThermalStress)),
                (Vibration, Some(Vibration), Some(Vibration)),
                (EfficiencyLoss, Some(EfficiencyLoss), Some(EfficiencyLoss)),
                (StructuralStress, None, Some(StructuralStress)),
            ],
            Self::ThermalElectrical => &[
                (TemperatureRise, Some(TemperatureRise), Some(TemperatureRise)),
                (EfficiencyLoss, Some(EfficiencyLoss), Some(EfficiencyLoss)),
                (SafetyRisk, None, Some(SafetyRisk)),
                (ThermalStress, Some(ThermalStress), None),
            ],
            Self::MechanicalElectrical => &[
                (Vibration, Some(Vibration), Some(Vibration)),
                (EfficiencyLoss, Some(EfficiencyLoss), Some(EfficiencyLoss)),
                (TorqueRipple, Some(TorqueRipple), Some(TorqueRipple)),
                (BearingLoad, Some(BearingLoad), None),
            ],
        }
    }

    fn failure_mode(self) -> FailureMode {
        match self {
            Self::ThermalMechanical => FailureMode::ProgressiveThermalMechanical,
            Self::ThermalElectrical => FailureMode::ThermalElectricalCoupling,
            Self::MechanicalElectrical => FailureMode::MechanicalElectricalInteraction,
        }
    }
}

/// How a mixed defect develops into a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureMode {
    ProgressiveThermalMechanical,
    ThermalElectricalCoupling,
    MechanicalElectricalInteraction,
    ProgressiveCascade,
    AgingInduced,
    OverloadInduced,
    EnvironmentInduced,
    MaintenanceInduced,
}

impl FailureMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ProgressiveThermalMechanical => "progressive_thermal_mechanical",
            Self::ThermalElectricalCoupling => "thermal_electrical_coupling",
            Self::MechanicalElectricalInteraction => "mechanical_electrical_interaction",
            Self::ProgressiveCascade => "progressive_cascade",
            Self::AgingInduced => "aging_induced",
            Self::OverloadInduced => "overload_induced",
            Self::EnvironmentInduced => "environment_induced",
            Self::MaintenanceInduced => "maintenance_induced",
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Family in which a cascade starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeScenario {
    Thermal,
    Mechanical,
    Electrical,
}

impl CascadeScenario {
    pub const ALL: [Self; 3] = [Self::Thermal, Self::Mechanical, Self::Electrical];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::Mechanical => "mechanical",
            Self::Electrical => "electrical",
        }
    }
}

/// One defect in a failure cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    /// One-based position in the cascade.
    pub step: u32,
    pub defect: Defect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverloadKind {
    Thermal,
    Mechanical,
    Electrical,
    Combined,
}

impl OverloadKind {
    pub const ALL: [Self; 4] = [Self::Thermal, Self::Mechanical, Self::Electrical, Self::Combined];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::Mechanical => "mechanical",
            Self::Electrical => "electrical",
            Self::Combined => "combined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Humid,
    Dusty,
    Corrosive,
    HighTemperature,
    Vibration,
    Electromagnetic,
}

impl Environment {
    pub const ALL: [Self; 6] = [
        Self::Humid,
        Self::Dusty,
        Self::Corrosive,
        Self::HighTemperature,
        Self::Vibration,
        Self::Electromagnetic,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Humid => "humid environment",
            Self::Dusty => "dusty environment",
            Self::Corrosive => "corrosive environment",
            Self::HighTemperature => "high ambient temperature",
            Self::Vibration => "ambient vibration",
            Self::Electromagnetic => "electromagnetic interference",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintenanceIssue {
    ImproperLubrication,
    WrongTorque,
    Contamination,
    ReplacementError,
    CalibrationError,
    CleaningIssue,
}

impl MaintenanceIssue {
    pub const ALL: [Self; 6] = [
        Self::ImproperLubrication,
        Self::WrongTorque,
        Self::Contamination,
        Self::ReplacementError,
        Self::CalibrationError,
        Self::CleaningIssue,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ImproperLubrication => "improper lubrication",
            Self::WrongTorque => "wrong tightening torque",
            Self::Contamination => "contamination during maintenance",
            Self::ReplacementError => "replacement error",
            Self::CalibrationError => "calibration error",
            Self::CleaningIssue => "cleaning issue",
        }
    }
}

/// Parameters of a mixed defect.
///
/// Every variant keeps the component defects it was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum MixedFault {
    /// Two defects of different families amplifying each other.
    Coupled {
        coupling: Coupling,
        scenario: &'static str,
        first: Box<Defect>,
        second: Box<Defect>,
        interaction_factor: f64,
    },
    CascadeFailure {
        scenario: CascadeScenario,
        steps: Vec<CascadeStep>,
        time_to_failure: Time,
    },
    AgingRelated {
        age: Time,
        aging_factor: f64,
        defects: Vec<Defect>,
    },
    OverloadInduced {
        overload: OverloadKind,
        /// Load as a multiple of rated load.
        overload_factor: f64,
        duration: Time,
        recoverable: bool,
        defects: Vec<Defect>,
    },
    Environmental {
        environment: Environment,
        environment_factor: f64,
        defects: Vec<Defect>,
    },
    MaintenanceRelated {
        issue: MaintenanceIssue,
        maintenance_factor: f64,
        defects: Vec<Defect>,
    },
}

impl MixedFault {
    #[must_use]
    pub fn kind(&self) -> MixedKind {
        match self {
            Self::Coupled { coupling, .. } => match coupling {
                Coupling::ThermalMechanical => MixedKind::ThermalMechanical,
                Coupling::ThermalElectrical => MixedKind::ThermalElectrical,
                Coupling::MechanicalElectrical => MixedKind::MechanicalElectrical,
            },
            Self::CascadeFailure { .. } => MixedKind::CascadeFailure,
            Self::AgingRelated { .. } => MixedKind::AgingRelated,
            Self::OverloadInduced { .. } => MixedKind::OverloadInduced,
            Self::Environmental { .. } => MixedKind::Environmental,
            Self::MaintenanceRelated { .. } => MixedKind::MaintenanceRelated,
        }
    }

    #[must_use]
    pub fn failure_mode(&self) -> FailureMode {
        match self {
            Self::Coupled { coupling, .. } => coupling.failure_mode(),
            Self::CascadeFailure { .. } => FailureMode::ProgressiveCascade,
            Self::AgingRelated { .. } => FailureMode::AgingInduced,
            Self::OverloadInduced { .. } => FailureMode::OverloadInduced,
            Self::Environmental { .. } => FailureMode::EnvironmentInduced,
            Self::MaintenanceRelated { .. } => FailureMode::MaintenanceInduced,
        }
    }

    /// Interaction factor of coupled defects.
    #[must_use]
    pub fn interaction_factor(&self) -> Option<f64> {
        match self {
            Self::Coupled {
                interaction_factor, ..
            } => Some(*interaction_factor),
            _ => None,
        }
    }
}

/// Mixed defect sampler built on the three single-family generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MixedFaultGenerator {
    pub thermal: ThermalFaultGenerator,
    pub mechanical: MechanicalFaultGenerator,
    pub electrical: ElectricalFaultGenerator,
}

impl FaultGenerator for MixedFaultGenerator {
    type Kind = MixedKind;

    fn category(&self) -> FaultCategory {
        FaultCategory::Mixed
    }

    fn kinds(&self) -> &'static [MixedKind] {
        &MixedKind::ALL
    }

    fn random_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> MixedKind {
        pick(rng, &MixedKind::ALL)
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        kind: MixedKind,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        match kind {
            MixedKind::ThermalMechanical => {
                self.coupled(Coupling::ThermalMechanical, dims, severity, rng)
            }
            MixedKind::ThermalElectrical => {
                self.coupled(Coupling::ThermalElectrical, dims, severity, rng)
            }
            MixedKind::MechanicalElectrical => {
                self.coupled(Coupling::MechanicalElectrical, dims, severity, rng)
            }
            MixedKind::CascadeFailure => self.cascade(dims, severity, rng),
            MixedKind::AgingRelated => self.aging(dims, severity, rng),
            MixedKind::OverloadInduced => self.overload(dims, severity, rng),
            MixedKind::Environmental => self.environmental(dims, severity, rng),
            MixedKind::MaintenanceRelated => self.maintenance(dims, severity, rng),
        }
    }
}

impl MixedFaultGenerator {
    fn random_of<R: Rng + ?Sized>(
        &self,
        category: CascadeScenario,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        match category {
            CascadeScenario::Thermal => self.thermal.generate_random(dims, Some(severity), rng),
            CascadeScenario::Mechanical => {
                self.mechanical.generate_random(dims, Some(severity), rng)
            }
            CascadeScenario::Electrical => {
                self.electrical.generate_random(dims, Some(severity), rng)
            }
        }
    }

    fn coupled<R: Rng + ?Sized>(
        &self,
        coupling: Coupling,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let (scenario, label) = pick(rng, coupling.scenarios());
        let (first, second) = match coupling {
            Coupling::ThermalMechanical => (
                self.random_of(CascadeScenario::Thermal, dims, severity, rng),
                self.random_of(CascadeScenario::Mechanical, dims, severity, rng),
            ),
            Coupling::ThermalElectrical => (
                self.random_of(CascadeScenario::Thermal, dims, severity, rng),
                self.random_of(CascadeScenario::Electrical, dims, severity, rng),
            ),
            Coupling::MechanicalElectrical => (
                self.random_of(CascadeScenario::Mechanical, dims, severity, rng),
                self.random_of(CascadeScenario::Electrical, dims, severity, rng),
            ),
        };

        let interaction_factor = coupling.interaction_factor(severity);
        let read = |defect: &Defect, kind: Option<ImpactKind>| {
            kind.map_or(0.0, |kind| defect.impact.get(kind))
        };
        let impact = coupling
            .combination()
            .iter()
            .map(|&(target, from_first, from_second)| {
                let sum = read(&first, from_first) + read(&second, from_second);
                (target, sum * interaction_factor)
            })
            .collect();

        let family = match coupling {
            Coupling::ThermalMechanical => "Thermo-mechanical",
            Coupling::ThermalElectrical => "Thermo-electrical",
            Coupling::MechanicalElectrical => "Electromechanical",
        };

        Defect::new(
            severity,
            format!("{family} fault: {label}"),
            Fault::Mixed(MixedFault::Coupled {
                coupling,
                scenario,
                first: Box::new(first),
                second: Box::new(second),
                interaction_factor,
            }),
            impact,
        )
    }

    /// Each step's severity decays from the previous one and its impact
    /// weighs `1 + 0.1·step`.
    fn cascade<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let scenario = pick(rng, &CascadeScenario::ALL);
        let count: u32 = rng.random_range(2..=4);

        let mut steps = Vec::new();
        let mut impact = Impact::new();
        let mut current = u32::from(severity.level());
        for index in 0..count {
            // ⌊s·(1 − 0.2·i)⌋ in integer arithmetic.
            current = (current * (10 - 2 * index) / 10).max(1);
            let step_severity = Severity::saturating(current);
            let family = pick(rng, &CascadeScenario::ALL);
            let defect = self.random_of(family, dims, step_severity, rng);

            let step = index + 1;
            impact.accumulate(&defect.impact, 1.0 + 0.1 * f64::from(step));
            steps.push(CascadeStep { step, defect });
        }

        let hours = f64::from(severity.level()) * f64::from(10 - 2 * count);

        Defect::new(
            severity,
            format!("{} failure cascade in {count} steps", capitalized(scenario.name())),
            Fault::Mixed(MixedFault::CascadeFailure {
                scenario,
                steps,
                time_to_failure: Time::new::<hour>(hours),
            }),
            impact,
        )
    }

    fn aging<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let age = uniform(rng, MACHINE_AGE);
        let aging_factor =
            1.0 + (age - MACHINE_AGE.0) / (MACHINE_AGE.1 - MACHINE_AGE.0) * severity.factor();

        let defects: Vec<Defect> = CascadeScenario::ALL
            .into_iter()
            .map(|family| self.random_of(family, dims, severity, rng))
            .collect();

        let impact = combined(&defects, aging_factor);
        Defect::new(
            severity,
            format!("Aging-related defects after {age:.1} years"),
            Fault::Mixed(MixedFault::AgingRelated {
                age: Time::new::<year>(age),
                aging_factor,
                defects,
            }),
            impact,
        )
    }

    fn overload<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let overload = pick(rng, &OverloadKind::ALL);
        let overload_factor = 1.0 + 2.0 * severity.factor();
        let hours = uniform(rng, OVERLOAD_DURATION);

        let mut defects = Vec::new();
        if matches!(overload, OverloadKind::Thermal | OverloadKind::Combined) {
            defects.push(
                self.thermal
                    .generate(ThermalKind::Overload, dims, severity, rng),
            );
        }
        if matches!(overload, OverloadKind::Mechanical | OverloadKind::Combined) {
            defects.push(self.random_of(CascadeScenario::Mechanical, dims, severity, rng));
        }
        if matches!(overload, OverloadKind::Electrical | OverloadKind::Combined) {
            defects.push(self.random_of(CascadeScenario::Electrical, dims, severity, rng));
        }

        let impact = combined(&defects, overload_factor);
        Defect::new(
            severity,
            format!(
                "Defects induced by a {} overload of {overload_factor:.1}x for {hours:.1} h",
                overload.name()
            ),
            Fault::Mixed(MixedFault::OverloadInduced {
                overload,
                overload_factor,
                duration: Time::new::<hour>(hours),
                recoverable: hours < RECOVERABLE_OVERLOAD,
                defects,
            }),
            impact,
        )
    }

    fn environmental<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let environment = pick(rng, &Environment::ALL);
        let environment_factor = 1.0 + 0.8 * severity.factor();

        let defect = match environment {
            Environment::Humid | Environment::Corrosive => self.electrical.generate(
                ElectricalKind::InsulationDegradation,
                dims,
                severity,
                rng,
            ),
            Environment::Dusty | Environment::HighTemperature => {
                self.random_of(CascadeScenario::Thermal, dims, severity, rng)
            }
            Environment::Vibration | Environment::Electromagnetic => {
                self.random_of(CascadeScenario::Mechanical, dims, severity, rng)
            }
        };

        let defects = vec![defect];
        let impact = combined(&defects, environment_factor);
        Defect::new(
            severity,
            format!("Environmental defect: {}", environment.name()),
            Fault::Mixed(MixedFault::Environmental {
                environment,
                environment_factor,
                defects,
            }),
            impact,
        )
    }

    fn maintenance<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let issue = pick(rng, &MaintenanceIssue::ALL);
        let maintenance_factor = 1.0 + 0.6 * severity.factor();

        let defect = match issue {
            MaintenanceIssue::ImproperLubrication | MaintenanceIssue::Contamination => self
                .mechanical
                .generate(MechanicalKind::BearingWear, dims, severity, rng),
            MaintenanceIssue::WrongTorque | MaintenanceIssue::ReplacementError => self
                .mechanical
                .generate(MechanicalKind::Misalignment, dims, severity, rng),
            MaintenanceIssue::CalibrationError | MaintenanceIssue::CleaningIssue => {
                self.random_of(CascadeScenario::Electrical, dims, severity, rng)
            }
        };

        let defects = vec![defect];
        let impact = combined(&defects, maintenance_factor);
        Defect::new(
            severity,
            format!("Maintenance-related defect: {}", issue.name()),
            Fault::Mixed(MixedFault::MaintenanceRelated {
                issue,
                maintenance_factor,
                defects,
            }),
            impact,
        )
    }
}

/// Sums the impacts of `defects`, each multiplied by `factor`.
fn combined(defects: &[Defect], factor: f64) -> Impact {
    let mut impact = Impact::new();
    for defect in defects {
        impact.accumulate(&defect.impact, factor);
    }
    impact
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::models::faults::{FaultKind, test_support::traction_dims};

    fn generate_many(kind: MixedKind, severity: u8) -> Vec<Defect> {
        let dims = traction_dims();
        let severity = Severity::new(severity).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        (0..50)
            .map(|_| MixedFaultGenerator::default().generate(kind, &dims, severity, &mut rng))
            .collect()
    }

    #[test]
    fn every_kind_round_trips() {
        for kind in MixedKind::ALL {
            let defect = &generate_many(kind, 3)[0];
            assert_eq!(defect.kind(), FaultKind::Mixed(kind));
            assert_eq!(defect.category(), FaultCategory::Mixed);
        }
    }

    #[test]
    fn coupled_impacts_are_amplified() {
        for defect in generate_many(MixedKind::ThermalElectrical, 5) {
            let Fault::Mixed(MixedFault::Coupled {
                first,
                second,
                interaction_factor,
                ..
            }) = &defect.fault
            else {
                panic!("expected a coupled fault");
            };

            assert_relative_eq!(*interaction_factor, 1.6);
            assert_eq!(first.category(), FaultCategory::Thermal);
            assert_eq!(second.category(), FaultCategory::Electrical);

            let expected = (first.impact.get(ImpactKind::TemperatureRise)
                + second.impact.get(ImpactKind::TemperatureRise))
                * 1.6;
            assert_relative_eq!(defect.impact.get(ImpactKind::TemperatureRise), expected);
            assert_relative_eq!(
                defect.impact.get(ImpactKind::SafetyRisk),
                second.impact.get(ImpactKind::SafetyRisk) * 1.6
            );
            assert_eq!(defect.impact.len(), 4);
        }
    }

    #[test]
    fn coupling_gains() {
        let severity = Severity::new(1).unwrap();
        assert_relative_eq!(Coupling::ThermalMechanical.interaction_factor(severity), 1.1);
        assert_relative_eq!(Coupling::ThermalElectrical.interaction_factor(severity), 1.12);
        assert_relative_eq!(
            Coupling::MechanicalElectrical.interaction_factor(severity),
            1.08
        );
    }

    #[test]
    fn cascade_severity_decays() {
        for defect in generate_many(MixedKind::CascadeFailure, 5) {
            let Fault::Mixed(MixedFault::CascadeFailure {
                steps,
                time_to_failure,
                ..
            }) = &defect.fault
            else {
                panic!("expected a cascade");
            };

            assert!((2..=4).contains(&steps.len()));
            assert_eq!(steps[0].step, 1);
            assert_eq!(steps[0].defect.severity.level(), 5);
            assert_eq!(steps[1].defect.severity.level(), 4);
            for pair in steps.windows(2) {
                assert!(pair[1].defect.severity <= pair[0].defect.severity);
                assert_eq!(pair[1].step, pair[0].step + 1);
            }

            let count = u32::try_from(steps.len()).unwrap();
            let hours = 5.0 * f64::from(10 - 2 * count);
            assert_relative_eq!(time_to_failure.get::<hour>(), hours, epsilon = 1e-9);
        }
    }

    #[test]
    fn cascade_floor_is_one() {
        for defect in generate_many(MixedKind::CascadeFailure, 1) {
            let Fault::Mixed(MixedFault::CascadeFailure { steps, .. }) = &defect.fault else {
                panic!("expected a cascade");
            };
            assert!(steps.iter().all(|step| step.defect.severity.level() == 1));
        }
    }

    #[test]
    fn aging_covers_each_family() {
        for defect in generate_many(MixedKind::AgingRelated, 5) {
            let Fault::Mixed(MixedFault::AgingRelated {
                age,
                aging_factor,
                defects,
            }) = &defect.fault
            else {
                panic!("expected an aging defect");
            };

            let years = age.get::<year>();
            assert!((5.0..=20.0).contains(&years));
            assert_relative_eq!(*aging_factor, 1.0 + (years - 5.0) / 15.0, epsilon = 1e-9);

            let categories: Vec<_> = defects.iter().map(Defect::category).collect();
            assert_eq!(
                categories,
                [
                    FaultCategory::Thermal,
                    FaultCategory::Mechanical,
                    FaultCategory::Electrical
                ]
            );
        }
    }

    #[test]
    fn overload_recovery_threshold() {
        let defects = generate_many(MixedKind::OverloadInduced, 5);
        let mut seen_combined = false;
        for defect in &defects {
            let Fault::Mixed(MixedFault::OverloadInduced {
                overload,
                overload_factor,
                duration,
                recoverable,
                defects,
            }) = &defect.fault
            else {
                panic!("expected an overload");
            };

            assert_relative_eq!(*overload_factor, 3.0);
            assert_eq!(*recoverable, duration.get::<hour>() < 2.0);

            let expected = if *overload == OverloadKind::Combined {
                seen_combined = true;
                3
            } else {
                1
            };
            assert_eq!(defects.len(), expected);
            if *overload == OverloadKind::Thermal {
                assert_eq!(
                    defects[0].kind(),
                    FaultKind::Thermal(ThermalKind::Overload)
                );
            }
        }
        assert!(seen_combined);
    }

    #[test]
    fn environment_selects_defect_family() {
        for defect in generate_many(MixedKind::Environmental, 2) {
            let Fault::Mixed(MixedFault::Environmental {
                environment,
                environment_factor,
                defects,
            }) = &defect.fault
            else {
                panic!("expected an environmental defect");
            };

            assert_relative_eq!(*environment_factor, 1.32);
            let inner = &defects[0];
            match environment {
                Environment::Humid | Environment::Corrosive => assert_eq!(
                    inner.kind(),
                    FaultKind::Electrical(ElectricalKind::InsulationDegradation)
                ),
                Environment::Dusty | Environment::HighTemperature => {
                    assert_eq!(inner.category(), FaultCategory::Thermal);
                }
                Environment::Vibration | Environment::Electromagnetic => {
                    assert_eq!(inner.category(), FaultCategory::Mechanical);
                }
            }
        }
    }

    #[test]
    fn maintenance_selects_defect_family() {
        for defect in generate_many(MixedKind::MaintenanceRelated, 4) {
            let Fault::Mixed(MixedFault::MaintenanceRelated {
                issue,
                maintenance_factor,
                defects,
            }) = &defect.fault
            else {
                panic!("expected a maintenance defect");
            };

            assert_relative_eq!(*maintenance_factor, 1.48);
            let inner = &defects[0];
            match issue {
                MaintenanceIssue::ImproperLubrication | MaintenanceIssue::Contamination => {
                    assert_eq!(
                        inner.kind(),
                        FaultKind::Mechanical(MechanicalKind::BearingWear)
                    );
                }
                MaintenanceIssue::WrongTorque | MaintenanceIssue::ReplacementError => {
                    assert_eq!(
                        inner.kind(),
                        FaultKind::Mechanical(MechanicalKind::Misalignment)
                    );
                }
                MaintenanceIssue::CalibrationError | MaintenanceIssue::CleaningIssue => {
                    assert_eq!(inner.category(), FaultCategory::Electrical);
                }
            }

            for (kind, value) in inner.impact.iter() {
                assert_relative_eq!(defect.impact.get(kind), value * 1.48);
            }
        }
    }

    #[test]
    fn failure_modes() {
        for kind in MixedKind::ALL {
            let defect = &generate_many(kind, 2)[0];
            let Fault::Mixed(fault) = &defect.fault else {
                panic!("expected a mixed fault");
            };
            assert_eq!(
                fault.interaction_factor().is_some(),
                matches!(
                    kind,
                    MixedKind::ThermalMechanical
                        | MixedKind::ThermalElectrical
                        | MixedKind::MechanicalElectrical
                )
            );
            assert_eq!(
                fault.failure_mode() == FailureMode::ProgressiveCascade,
                kind == MixedKind::CascadeFailure
            );
        }
    }

    #[test]
    fn parse() {
        assert_eq!(
            "Cascade_Failure".parse::<MixedKind>().unwrap(),
            MixedKind::CascadeFailure
        );
        assert!(matches!(
            "meltdown".parse::<MixedKind>(),
            Err(FaultError::UnknownKind {
                category: FaultCategory::Mixed,
                ..
            })
        ));
    }
}
