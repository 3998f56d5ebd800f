use std::{fmt, str::FromStr};

use rand::Rng;
use uom::si::{
    electric_charge::picocoulomb,
    electric_potential::volt,
    electrical_resistance::{megaohm, ohm},
    f64::{ElectricCharge, ElectricPotential, ElectricalResistance},
};

use crate::models::machine::{layout::Phase, sizing::MachineDimensions};

use super::{
    Defect, Fault, FaultCategory, FaultError, FaultGenerator, Impact, ImpactKind, Severity,
    capitalized, parse_kind,
    sampling::{distinct_indices, pick, uniform},
};

/// Insulation resistance of a healthy winding, in MΩ.
const NOMINAL_INSULATION_RESISTANCE: f64 = 100.0;

/// Breakdown voltage of healthy insulation, in V.
const NOMINAL_BREAKDOWN_VOLTAGE: f64 = 1000.0;

const FAULT_LOCATION: (f64, f64) = (0.1, 0.9);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElectricalKind {
    WindingFault,
    InsulationDegradation,
    ShortCircuit,
    OpenCircuit,
    PhaseUnbalance,
    MagnetDemagnetization,
    CoreLoss,
    EddyCurrent,
}

impl ElectricalKind {
    pub const ALL: [Self; 8] = [
        Self::WindingFault,
        Self::InsulationDegradation,
        Self::ShortCircuit,
        Self::OpenCircuit,
        Self::PhaseUnbalance,
        Self::MagnetDemagnetization,
        Self::CoreLoss,
        Self::EddyCurrent,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::WindingFault => "winding_fault",
            Self::InsulationDegradation => "insulation_degradation",
            Self::ShortCircuit => "short_circuit",
            Self::OpenCircuit => "open_circuit",
            Self::PhaseUnbalance => "phase_unbalance",
            Self::MagnetDemagnetization => "magnet_demagnetization",
            Self::CoreLoss => "core_loss",
            Self::EddyCurrent => "eddy_current",
        }
    }
}

impl fmt::Display for ElectricalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElectricalKind {
    type Err = FaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(&Self::ALL, Self::name, FaultCategory::Electrical, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindingFault {
    TurnToTurn { turns: u32 },
    PhaseToPhase(ElectricalResistance),
    PhaseToGround(ElectricalResistance),
}

#[derive(Debug, Clone, Copy)]
enum WindingFaultPath {
    TurnToTurn,
    PhaseToPhase,
    PhaseToGround,
}

impl WindingFaultPath {
    const ALL: [Self; 3] = [Self::TurnToTurn, Self::PhaseToPhase, Self::PhaseToGround];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsulationDegradation {
    /// Remaining insulation resistance.
    Resistance(ElectricalResistance),
    /// Remaining breakdown voltage.
    BreakdownVoltage(ElectricPotential),
    /// Partial discharge magnitude.
    PartialDischarge(ElectricCharge),
}

/// Which insulation property degrades.
#[derive(Debug, Clone, Copy)]
enum InsulationProperty {
    Resistance,
    BreakdownVoltage,
    PartialDischarge,
}

impl InsulationProperty {
    const ALL: [Self; 3] = [Self::Resistance, Self::BreakdownVoltage, Self::PartialDischarge];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortCircuitPath {
    TurnToTurn,
    PhaseToPhase,
    PhaseToGround,
}

impl ShortCircuitPath {
    pub const ALL: [Self; 3] = [Self::TurnToTurn, Self::PhaseToPhase, Self::PhaseToGround];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TurnToTurn => "turn-to-turn",
            Self::PhaseToPhase => "phase-to-phase",
            Self::PhaseToGround => "phase-to-ground",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenCircuitKind {
    SingleTurn,
    MultipleTurns,
    PhaseLoss,
}

impl OpenCircuitKind {
    pub const ALL: [Self; 3] = [Self::SingleTurn, Self::MultipleTurns, Self::PhaseLoss];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SingleTurn => "single turn",
            Self::MultipleTurns => "multiple turns",
            Self::PhaseLoss => "phase loss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnbalanceKind {
    Current,
    Voltage,
    Impedance,
}

impl UnbalanceKind {
    pub const ALL: [Self; 3] = [Self::Current, Self::Voltage, Self::Impedance];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Voltage => "voltage",
            Self::Impedance => "impedance",
        }
    }

    fn range(self) -> (f64, f64) {
        match self {
            Self::Current => (0.05, 0.3),
            Self::Voltage => (0.02, 0.15),
            Self::Impedance => (0.05, 0.25),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemagnetizationPattern {
    Uniform,
    Localized,
    TemperatureInduced,
}

impl DemagnetizationPattern {
    pub const ALL: [Self; 3] = [Self::Uniform, Self::Localized, Self::TemperatureInduced];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Localized => "localized",
            Self::TemperatureInduced => "temperature-induced",
        }
    }
}

/// Core loss component that increased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossKind {
    Hysteresis,
    EddyCurrent,
    Excess,
}

impl LossKind {
    pub const ALL: [Self; 3] = [Self::Hysteresis, Self::EddyCurrent, Self::Excess];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hysteresis => "hysteresis",
            Self::EddyCurrent => "eddy current",
            Self::Excess => "excess",
        }
    }

    /// Loss multiplier range and its severity gain.
    fn range(self) -> ((f64, f64), f64) {
        match self {
            Self::Hysteresis => ((1.1, 2.0), 0.3),
            Self::EddyCurrent => ((1.2, 3.0), 0.4),
            Self::Excess => ((1.1, 1.8), 0.2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossCause {
    Aging,
    Overheating,
    MechanicalStress,
    Contamination,
}

impl LossCause {
    pub const ALL: [Self; 4] = [
        Self::Aging,
        Self::Overheating,
        Self::MechanicalStress,
        Self::Contamination,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aging => "aging",
            Self::Overheating => "overheating",
            Self::MechanicalStress => "mechanical stress",
            Self::Contamination => "contamination",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EddyCurrentPath {
    Conductor,
    Core,
    Frame,
}

impl EddyCurrentPath {
    pub const ALL: [Self; 3] = [Self::Conductor, Self::Core, Self::Frame];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Conductor => "conductor",
            Self::Core => "core",
            Self::Frame => "frame",
        }
    }
}

/// Parameters of an electrical defect.
#[derive(Debug, Clone, PartialEq)]
pub enum ElectricalFault {
    Winding {
        fault: WindingFault,
        /// Position along the winding as a share of its length.
        location: f64,
    },
    InsulationDegradation {
        degradation: InsulationDegradation,
    },
    ShortCircuit {
        path: ShortCircuitPath,
        resistance: ElectricalResistance,
        /// Fault current as a multiple of rated current.
        current_ratio: f64,
        location: f64,
    },
    OpenCircuit {
        open: OpenCircuitKind,
        broken_turns: u32,
        resistance: ElectricalResistance,
        location: f64,
    },
    PhaseUnbalance {
        unbalance: UnbalanceKind,
        /// Relative deviation of the affected phase.
        value: f64,
        phase: Phase,
    },
    MagnetDemagnetization {
        pattern: DemagnetizationPattern,
        /// Relative loss of remanent flux density.
        flux_loss: f64,
        affected_poles: u32,
        /// Zero-based indices of the affected poles, sorted.
        pole_positions: Vec<usize>,
        temperature_factor: f64,
    },
    CoreLoss {
        loss: LossKind,
        /// Loss as a multiple of the healthy value.
        loss_factor: f64,
        cause: LossCause,
    },
    EddyCurrent {
        path: EddyCurrentPath,
        loss_factor: f64,
        frequency_dependency: f64,
        /// Skin depth relative to the healthy value.
        skin_depth: f64,
    },
}

impl ElectricalFault {
    #[must_use]
    pub fn kind(&self) -> ElectricalKind {
        match self {
            Self::Winding { .. } => ElectricalKind::WindingFault,
            Self::InsulationDegradation { .. } => ElectricalKind::InsulationDegradation,
            Self::ShortCircuit { .. } => ElectricalKind::ShortCircuit,
            Self::OpenCircuit { .. } => ElectricalKind::OpenCircuit,
            Self::PhaseUnbalance { .. } => ElectricalKind::PhaseUnbalance,
            Self::MagnetDemagnetization { .. } => ElectricalKind::MagnetDemagnetization,
            Self::CoreLoss { .. } => ElectricalKind::CoreLoss,
            Self::EddyCurrent { .. } => ElectricalKind::EddyCurrent,
        }
    }
}

/// Electrical defect sampler.
///
/// Demagnetized poles are drawn from the `2p` rotor poles of the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElectricalFaultGenerator {
    /// Series turns per phase, lost entirely by a phase-loss open circuit.
    pub turns_per_phase: u32,
}

impl Default for ElectricalFaultGenerator {
    fn default() -> Self {
        Self {
            turns_per_phase: 100,
        }
    }
}

impl ElectricalFaultGenerator {
    #[must_use]
    pub fn new(turns_per_phase: u32) -> Self {
        Self { turns_per_phase }
    }
}

impl FaultGenerator for ElectricalFaultGenerator {
    type Kind = ElectricalKind;

    fn category(&self) -> FaultCategory {
        FaultCategory::Electrical
    }

    fn kinds(&self) -> &'static [ElectricalKind] {
        &ElectricalKind::ALL
    }

    fn random_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> ElectricalKind {
        pick(rng, &ElectricalKind::ALL)
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        kind: ElectricalKind,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect {
        let f = severity.factor();

        let (fault, description, weights) = match kind {
            ElectricalKind::WindingFault => {
                let (fault, text) = match pick(rng, &WindingFaultPath::ALL) {
                    WindingFaultPath::TurnToTurn => {
                        let turns = rng.random_range(1..=10);
                        (
                            WindingFault::TurnToTurn { turns },
                            format!("Short circuit between {turns} turns"),
                        )
                    }
                    WindingFaultPath::PhaseToPhase => {
                        let ohms = uniform(rng, (0.1, 1.0));
                        (
                            WindingFault::PhaseToPhase(ElectricalResistance::new::<ohm>(ohms)),
                            format!("Phase-to-phase resistance of {ohms:.3} Ω"),
                        )
                    }
                    WindingFaultPath::PhaseToGround => {
                        let ohms = uniform(rng, (0.5, 5.0));
                        (
                            WindingFault::PhaseToGround(ElectricalResistance::new::<ohm>(ohms)),
                            format!("Phase-to-ground resistance of {ohms:.2} Ω"),
                        )
                    }
                };
                let location = uniform(rng, FAULT_LOCATION);
                (
                    ElectricalFault::Winding { fault, location },
                    text,
                    WINDING_IMPACT,
                )
            }
            ElectricalKind::InsulationDegradation => {
                let (degradation, text) = insulation_degradation(severity, rng);
                (
                    ElectricalFault::InsulationDegradation { degradation },
                    text,
                    INSULATION_IMPACT,
                )
            }
            ElectricalKind::ShortCircuit => {
                let path = pick(rng, &ShortCircuitPath::ALL);
                let ohms = uniform(rng, (0.001, 0.1)) * (1.0 - 0.5 * f);
                let current_ratio = uniform(rng, (1.5, 5.0)) * (1.0 + 0.3 * f);
                let location = uniform(rng, FAULT_LOCATION);
                (
                    ElectricalFault::ShortCircuit {
                        path,
                        resistance: ElectricalResistance::new::<ohm>(ohms),
                        current_ratio,
                        location,
                    },
                    format!(
                        "{} short circuit, resistance {ohms:.4} Ω, current ratio {current_ratio:.1}",
                        capitalized(path.name())
                    ),
                    SHORT_CIRCUIT_IMPACT,
                )
            }
            ElectricalKind::OpenCircuit => {
                let open = pick(rng, &OpenCircuitKind::ALL);
                let broken_turns = match open {
                    OpenCircuitKind::SingleTurn => 1,
                    OpenCircuitKind::MultipleTurns => rng.random_range(1..=20),
                    OpenCircuitKind::PhaseLoss => self.turns_per_phase,
                };
                let ohms = uniform(rng, (1000.0, 10000.0)) * (1.0 + 0.5 * f);
                let location = uniform(rng, FAULT_LOCATION);
                (
                    ElectricalFault::OpenCircuit {
                        open,
                        broken_turns,
                        resistance: ElectricalResistance::new::<ohm>(ohms),
                        location,
                    },
                    format!(
                        "Open circuit ({}), {broken_turns} turns, resistance {ohms:.0} Ω",
                        open.name()
                    ),
                    OPEN_CIRCUIT_IMPACT,
                )
            }
            ElectricalKind::PhaseUnbalance => {
                let unbalance = pick(rng, &UnbalanceKind::ALL);
                let value = uniform(rng, unbalance.range()) * (1.0 + 0.5 * f);
                let phase = pick(rng, &Phase::ALL);
                (
                    ElectricalFault::PhaseUnbalance {
                        unbalance,
                        value,
                        phase,
                    },
                    format!(
                        "{} unbalance of {value:.3} on phase {phase}",
                        capitalized(unbalance.name())
                    ),
                    UNBALANCE_IMPACT,
                )
            }
            ElectricalKind::MagnetDemagnetization => {
                let pattern = pick(rng, &DemagnetizationPattern::ALL);
                let flux_loss = uniform(rng, (0.1, 0.5)) * f;
                let poles = dims.poles();
                let affected_poles = rng.random_range(1..=4).min(poles);
                let pole_positions = distinct_indices(
                    rng,
                    usize::try_from(poles).unwrap_or(usize::MAX),
                    usize::try_from(affected_poles).unwrap_or(usize::MAX),
                );
                let temperature_factor = uniform(rng, (0.8, 1.2));
                (
                    ElectricalFault::MagnetDemagnetization {
                        pattern,
                        flux_loss,
                        affected_poles,
                        pole_positions,
                        temperature_factor,
                    },
                    format!(
                        "{} demagnetization, flux loss {flux_loss:.2}, {affected_poles} pole(s) affected",
                        capitalized(pattern.name())
                    ),
                    DEMAGNETIZATION_IMPACT,
                )
            }
            ElectricalKind::CoreLoss => {
                let loss = pick(rng, &LossKind::ALL);
                let (range, gain) = loss.range();
                let loss_factor = uniform(rng, range) * (1.0 + gain * f);
                let cause = pick(rng, &LossCause::ALL);
                (
                    ElectricalFault::CoreLoss {
                        loss,
                        loss_factor,
                        cause,
                    },
                    format!(
                        "{} losses up {loss_factor:.2}x due to {}",
                        capitalized(loss.name()),
                        cause.name()
                    ),
                    CORE_LOSS_IMPACT,
                )
            }
            ElectricalKind::EddyCurrent => {
                let path = pick(rng, &EddyCurrentPath::ALL);
                let loss_factor = uniform(rng, (1.1, 2.5)) * (1.0 + 0.3 * f);
                (
                    ElectricalFault::EddyCurrent {
                        path,
                        loss_factor,
                        frequency_dependency: uniform(rng, (0.8, 1.5)),
                        skin_depth: uniform(rng, (0.5, 2.0)),
                    },
                    format!(
                        "{} eddy currents up {loss_factor:.2}x",
                        capitalized(path.name())
                    ),
                    EDDY_CURRENT_IMPACT,
                )
            }
        };

        Defect::new(
            severity,
            description,
            Fault::Electrical(fault),
            Impact::scaled(severity, weights),
        )
    }
}

/// Resistance and breakdown voltage fall linearly with severity; partial
/// discharge is drawn and then amplified by it.
fn insulation_degradation<R: Rng + ?Sized>(
    severity: Severity,
    rng: &mut R,
) -> (InsulationDegradation, String) {
    let f = severity.factor();
    match pick(rng, &InsulationProperty::ALL) {
        InsulationProperty::Resistance => {
            let megaohms = NOMINAL_INSULATION_RESISTANCE * (1.0 - 0.8 * f);
            (
                InsulationDegradation::Resistance(ElectricalResistance::new::<megaohm>(megaohms)),
                format!("Insulation resistance down to {megaohms:.1} MΩ"),
            )
        }
        InsulationProperty::BreakdownVoltage => {
            let volts = NOMINAL_BREAKDOWN_VOLTAGE * (1.0 - 0.6 * f);
            (
                InsulationDegradation::BreakdownVoltage(ElectricPotential::new::<volt>(volts)),
                format!("Breakdown voltage down to {volts:.0} V"),
            )
        }
        InsulationProperty::PartialDischarge => {
            let charge = uniform(rng, (0.1, 1.0)) * (1.0 + f);
            (
                InsulationDegradation::PartialDischarge(ElectricCharge::new::<picocoulomb>(charge)),
                format!("Partial discharges of {charge:.1} pC"),
            )
        }
    }
}

const WINDING_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::CurrentUnbalance, 0.2),
    (ImpactKind::TorqueRipple, 0.15),
    (ImpactKind::EfficiencyLoss, 0.12),
    (ImpactKind::TemperatureRise, 0.18),
];

const INSULATION_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::LeakageCurrent, 0.25),
    (ImpactKind::SafetyRisk, 0.3),
    (ImpactKind::EfficiencyLoss, 0.1),
    (ImpactKind::TemperatureRise, 0.15),
];

const SHORT_CIRCUIT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::Overcurrent, 0.3),
    (ImpactKind::TorqueReduction, 0.25),
    (ImpactKind::EfficiencyLoss, 0.2),
    (ImpactKind::ThermalStress, 0.35),
];

const OPEN_CIRCUIT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::CurrentReduction, 0.25),
    (ImpactKind::TorqueReduction, 0.3),
    (ImpactKind::PhaseUnbalance, 0.2),
    (ImpactKind::EfficiencyLoss, 0.15),
];

const UNBALANCE_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TorqueRipple, 0.2),
    (ImpactKind::Vibration, 0.15),
    (ImpactKind::EfficiencyLoss, 0.18),
    (ImpactKind::ThermalUnbalance, 0.12),
];

const DEMAGNETIZATION_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::TorqueReduction, 0.3),
    (ImpactKind::BackEmfReduction, 0.25),
    (ImpactKind::EfficiencyLoss, 0.2),
    (ImpactKind::CoggingTorque, 0.15),
];

const CORE_LOSS_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::EfficiencyLoss, 0.25),
    (ImpactKind::TemperatureRise, 0.2),
    (ImpactKind::ThermalStress, 0.15),
    (ImpactKind::PowerFactor, 0.1),
];

const EDDY_CURRENT_IMPACT: &[(ImpactKind, f64)] = &[
    (ImpactKind::EfficiencyLoss, 0.2),
    (ImpactKind::TemperatureRise, 0.25),
    (ImpactKind::ThermalStress, 0.18),
    (ImpactKind::PowerDensity, 0.15),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::models::faults::test_support::traction_dims;

    #[test]
    fn phase_loss_uses_turns_per_phase() {
        let dims = traction_dims();
        let generator = ElectricalFaultGenerator::new(48);
        let mut rng = StdRng::seed_from_u64(17);

        let mut seen_phase_loss = false;
        for _ in 0..100 {
            let defect =
                generator.generate(ElectricalKind::OpenCircuit, &dims, Severity::MAX, &mut rng);
            let Fault::Electrical(ElectricalFault::OpenCircuit {
                open, broken_turns, ..
            }) = defect.fault
            else {
                panic!("expected an open circuit");
            };

            match open {
                OpenCircuitKind::SingleTurn => assert_eq!(broken_turns, 1),
                OpenCircuitKind::MultipleTurns => assert!((1..=20).contains(&broken_turns)),
                OpenCircuitKind::PhaseLoss => {
                    assert_eq!(broken_turns, 48);
                    seen_phase_loss = true;
                }
            }
        }
        assert!(seen_phase_loss);
    }

    #[test]
    fn winding_and_insulation_faults_cover_every_shape() {
        let dims = traction_dims();
        let generator = ElectricalFaultGenerator::default();
        let mut rng = StdRng::seed_from_u64(29);
        let mut windings = [false; 3];
        let mut insulation = [false; 3];

        for _ in 0..60 {
            let defect =
                generator.generate(ElectricalKind::WindingFault, &dims, Severity::MAX, &mut rng);
            let Fault::Electrical(ElectricalFault::Winding { fault, .. }) = defect.fault else {
                panic!("expected a winding fault");
            };
            match fault {
                WindingFault::TurnToTurn { turns } => {
                    assert!((1..=10).contains(&turns));
                    windings[0] = true;
                }
                WindingFault::PhaseToPhase(resistance) => {
                    assert!((0.1..=1.0).contains(&resistance.get::<ohm>()));
                    windings[1] = true;
                }
                WindingFault::PhaseToGround(resistance) => {
                    assert!((0.5..=5.0).contains(&resistance.get::<ohm>()));
                    windings[2] = true;
                }
            }

            let defect = generator.generate(
                ElectricalKind::InsulationDegradation,
                &dims,
                Severity::MAX,
                &mut rng,
            );
            let Fault::Electrical(ElectricalFault::InsulationDegradation { degradation }) =
                defect.fault
            else {
                panic!("expected an insulation degradation");
            };
            match degradation {
                InsulationDegradation::Resistance(resistance) => {
                    assert_relative_eq!(resistance.get::<megaohm>(), 20.0, epsilon = 1e-9);
                    insulation[0] = true;
                }
                InsulationDegradation::BreakdownVoltage(voltage) => {
                    assert_relative_eq!(voltage.get::<volt>(), 400.0, epsilon = 1e-9);
                    insulation[1] = true;
                }
                InsulationDegradation::PartialDischarge(charge) => {
                    assert!((0.2..=2.0).contains(&charge.get::<picocoulomb>()));
                    insulation[2] = true;
                }
            }
        }

        assert_eq!(windings, [true; 3]);
        assert_eq!(insulation, [true; 3]);
    }

    #[test]
    fn demagnetized_poles_exist_on_the_rotor() {
        // Two pole pairs: poles 0 through 3.
        let dims = traction_dims();
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..50 {
            let defect = ElectricalFaultGenerator::default().generate(
                ElectricalKind::MagnetDemagnetization,
                &dims,
                Severity::new(3).unwrap(),
                &mut rng,
            );
            let Fault::Electrical(ElectricalFault::MagnetDemagnetization {
                affected_poles,
                pole_positions,
                flux_loss,
                ..
            }) = defect.fault
            else {
                panic!("expected a demagnetization");
            };

            assert!((1..=4).contains(&affected_poles));
            assert_eq!(pole_positions.len(), affected_poles as usize);
            assert!(pole_positions.iter().all(|&pole| pole < 4));
            assert!((0.06 - 1e-12..=0.3 + 1e-12).contains(&flux_loss));
        }
    }

    #[test]
    fn insulation_degrades_with_severity() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..30 {
            match insulation_degradation(Severity::MAX, &mut rng).0 {
                InsulationDegradation::Resistance(r) => {
                    assert_relative_eq!(r.get::<megaohm>(), 20.0, epsilon = 1e-9);
                }
                InsulationDegradation::BreakdownVoltage(v) => {
                    assert_relative_eq!(v.get::<volt>(), 400.0, epsilon = 1e-9);
                }
                InsulationDegradation::PartialDischarge(q) => {
                    assert!((0.2..=2.0).contains(&q.get::<picocoulomb>()));
                }
            }
        }
    }

    #[test]
    fn impacts_have_four_entries() {
        let dims = traction_dims();
        let mut rng = StdRng::seed_from_u64(1);
        let generator = ElectricalFaultGenerator::default();

        for kind in ElectricalKind::ALL {
            let defect = generator.generate(kind, &dims, Severity::new(2).unwrap(), &mut rng);
            assert_eq!(defect.impact.len(), 4, "{kind}");
            assert!(!defect.description.is_empty());
        }

        let defect = generator.generate(
            ElectricalKind::ShortCircuit,
            &dims,
            Severity::new(2).unwrap(),
            &mut rng,
        );
        assert_relative_eq!(defect.impact.get(ImpactKind::ThermalStress), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn parse_kind_names() {
        assert_eq!(
            "magnet_demagnetization".parse::<ElectricalKind>().unwrap(),
            ElectricalKind::MagnetDemagnetization
        );
        assert!("arc_flash".parse::<ElectricalKind>().is_err());
    }
}
