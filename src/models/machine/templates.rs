//! Application templates.
//!
//! A template proposes a topology, a pole pair count and three candidate coil
//! turn counts for a rated power, chosen from per-application power bands.
//! [`suggest`] ranks every template against a set of [`Requirements`].

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::{AngularVelocity, Power},
    power::watt,
};

use crate::models::machine::{
    Application, MachineType,
    sizing::{SizingError, SizingInput},
};

/// The available templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Traction,
    Wind,
    Industrial,
    Aerospace,
    SynRel,
    Hybrid,
}

impl TemplateKind {
    pub const ALL: [Self; 6] = [
        Self::Traction,
        Self::Wind,
        Self::Industrial,
        Self::Aerospace,
        Self::SynRel,
        Self::Hybrid,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Traction => "traction",
            Self::Wind => "wind",
            Self::Industrial => "industrial",
            Self::Aerospace => "aerospace",
            Self::SynRel => "SynRel",
            Self::Hybrid => "Hybrid",
        }
    }

    /// The template matching an application.
    #[must_use]
    pub fn for_application(application: Application) -> Self {
        match application {
            Application::Traction => Self::Traction,
            Application::Wind => Self::Wind,
            Application::Industrial => Self::Industrial,
            Application::Aerospace => Self::Aerospace,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown template name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template '{0}'")]
pub struct TemplateParseError(pub String);

impl FromStr for TemplateKind {
    type Err = TemplateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TemplateParseError(s.to_owned()))
    }
}

/// Qualitative traits a template is known for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    HighTorque,
    WideSpeedRange,
    EfficiencyPriority,
    CompactDesign,
    LowSpeed,
    RobustnessPriority,
    MaintenanceFriendly,
    StandardPerformance,
    CostEffective,
    ReliabilityPriority,
    EasyManufacturing,
    HighEfficiency,
    Lightweight,
    HighReliability,
    PerformancePriority,
    NoMagnets,
    HighSpeedCapability,
    SimpleConstruction,
    DualTorque,
    ComplexControl,
}

/// Proposed configuration for one template at one rated power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineTemplate {
    pub kind: TemplateKind,
    pub application: Application,
    pub machine_type: MachineType,
    pub pole_pairs: u32,

    /// Candidate turns per coil, in increasing order.
    pub coil_turn_options: [u32; 3],

    pub characteristics: &'static [Characteristic],
}

impl MachineTemplate {
    #[must_use]
    pub fn has(&self, characteristic: Characteristic) -> bool {
        self.characteristics.contains(&characteristic)
    }

    /// Builds the sizing input for this template.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if `power` or `speed` is not strictly positive.
    pub fn sizing_input(
        &self,
        power: Power,
        speed: AngularVelocity,
    ) -> Result<SizingInput, SizingError> {
        SizingInput::new(
            power,
            speed,
            self.pole_pairs,
            self.machine_type,
            self.application,
        )
    }
}

/// Upper power bound (exclusive, in W), pole pairs and coil turn options.
type PowerBand = (f64, u32, [u32; 3]);

const TRACTION: [PowerBand; 4] = [
    (50e3, 2, [5, 7, 10]),
    (150e3, 3, [7, 10, 12]),
    (300e3, 4, [10, 12, 15]),
    (f64::INFINITY, 5, [12, 15, 18]),
];

const WIND: [PowerBand; 4] = [
    (100e3, 8, [8, 10, 12]),
    (500e3, 12, [10, 12, 15]),
    (1e6, 16, [12, 15, 18]),
    (f64::INFINITY, 20, [15, 18, 20]),
];

const INDUSTRIAL: [PowerBand; 4] = [
    (75e3, 2, [6, 8, 10]),
    (200e3, 3, [8, 10, 12]),
    (500e3, 4, [10, 12, 15]),
    (f64::INFINITY, 6, [12, 15, 18]),
];

const AEROSPACE: [PowerBand; 4] = [
    (50e3, 2, [8, 10, 12]),
    (150e3, 3, [10, 12, 15]),
    (300e3, 4, [12, 15, 18]),
    (f64::INFINITY, 5, [15, 18, 20]),
];

const SYNREL: [PowerBand; 4] = [
    (75e3, 3, [6, 8, 10]),
    (200e3, 4, [8, 10, 12]),
    (500e3, 6, [10, 12, 15]),
    (f64::INFINITY, 8, [12, 15, 18]),
];

const HYBRID: [PowerBand; 4] = [
    (100e3, 3, [7, 9, 11]),
    (250e3, 4, [9, 11, 13]),
    (500e3, 5, [11, 13, 16]),
    (f64::INFINITY, 6, [13, 16, 19]),
];

/// Returns the template of `kind` for a rated `power`.
///
/// # Example
///
/// ```
/// use emachine_models::models::machine::templates::{self, TemplateKind};
/// use uom::si::{f64::Power, power::kilowatt};
///
/// let template = templates::template_for(TemplateKind::Wind, Power::new::<kilowatt>(2000.0));
/// assert_eq!(template.pole_pairs, 20);
/// assert_eq!(template.coil_turn_options, [15, 18, 20]);
/// ```
#[must_use]
pub fn template_for(kind: TemplateKind, power: Power) -> MachineTemplate {
    use Characteristic as C;

    let (bands, application, machine_type, characteristics): (_, _, _, &'static [Characteristic]) =
        match kind {
            TemplateKind::Traction => (
                &TRACTION,
                Application::Traction,
                MachineType::Ipmsm,
                &[
                    C::HighTorque,
                    C::WideSpeedRange,
                    C::EfficiencyPriority,
                    C::CompactDesign,
                ],
            ),
            TemplateKind::Wind => (
                &WIND,
                Application::Wind,
                MachineType::Ipmsm,
                &[
                    C::HighTorque,
                    C::LowSpeed,
                    C::RobustnessPriority,
                    C::MaintenanceFriendly,
                ],
            ),
            TemplateKind::Industrial => (
                &INDUSTRIAL,
                Application::Industrial,
                MachineType::Ipmsm,
                &[
                    C::StandardPerformance,
                    C::CostEffective,
                    C::ReliabilityPriority,
                    C::EasyManufacturing,
                ],
            ),
            TemplateKind::Aerospace => (
                &AEROSPACE,
                Application::Aerospace,
                MachineType::Ipmsm,
                &[
                    C::HighEfficiency,
                    C::Lightweight,
                    C::HighReliability,
                    C::PerformancePriority,
                ],
            ),
            TemplateKind::SynRel => (
                &SYNREL,
                Application::Industrial,
                MachineType::SynRel,
                &[
                    C::NoMagnets,
                    C::CostEffective,
                    C::HighSpeedCapability,
                    C::SimpleConstruction,
                ],
            ),
            TemplateKind::Hybrid => (
                &HYBRID,
                Application::Traction,
                MachineType::Hybrid,
                &[
                    C::DualTorque,
                    C::WideSpeedRange,
                    C::HighEfficiency,
                    C::ComplexControl,
                ],
            ),
        };

    let (pole_pairs, coil_turn_options) = select_band(bands, power.get::<watt>());

    MachineTemplate {
        kind,
        application,
        machine_type,
        pole_pairs,
        coil_turn_options,
        characteristics,
    }
}

fn select_band(bands: &[PowerBand; 4], watts: f64) -> (u32, [u32; 3]) {
    let [.., (_, last_pairs, last_turns)] = *bands;
    bands
        .iter()
        .find(|(upper, _, _)| watts < *upper)
        .map_or((last_pairs, last_turns), |&(_, pairs, turns)| (pairs, turns))
}

/// Returns every template for a rated `power`, in [`TemplateKind::ALL`] order.
#[must_use]
pub fn all_templates(power: Power) -> Vec<MachineTemplate> {
    TemplateKind::ALL
        .into_iter()
        .map(|kind| template_for(kind, power))
        .collect()
}

/// Requirements a suggestion is scored against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub high_efficiency: bool,
    pub cost_effective: bool,
    pub high_torque: bool,
    pub lightweight: bool,
    pub simple_control: bool,
}

/// A template together with how well it meets a set of requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub template: MachineTemplate,
    pub score: u32,
}

/// Ranks every template by how well it meets `requirements`.
///
/// Suggestions are sorted by descending score; ties keep
/// [`TemplateKind::ALL`] order.
#[must_use]
pub fn suggest(power: Power, requirements: &Requirements) -> Vec<Suggestion> {
    let mut suggestions: Vec<_> = all_templates(power)
        .into_iter()
        .map(|template| Suggestion {
            score: score(&template, requirements),
            template,
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions
}

fn score(template: &MachineTemplate, requirements: &Requirements) -> u32 {
    let weighted = [
        (requirements.high_efficiency, Characteristic::HighEfficiency, 20),
        (requirements.cost_effective, Characteristic::CostEffective, 15),
        (requirements.high_torque, Characteristic::HighTorque, 15),
        (requirements.lightweight, Characteristic::Lightweight, 15),
    ];

    let mut score: u32 = weighted
        .into_iter()
        .filter(|&(wanted, characteristic, _)| wanted && template.has(characteristic))
        .map(|(_, _, points)| points)
        .sum();

    if requirements.simple_control && !template.has(Characteristic::ComplexControl) {
        score += 10;
    }
    score
}
