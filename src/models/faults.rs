//! Synthetic fault scenarios for a machine design.
//!
//! Each generator samples one family of defects from fixed parameter ranges
//! scaled by a [`Severity`]:
//!
//! - [`ThermalFaultGenerator`]: hotspots, gradients, insulation, cooling and overload.
//! - [`MechanicalFaultGenerator`]: eccentricity, bearings, shaft, unbalance, air gap.
//! - [`ElectricalFaultGenerator`]: winding, insulation, circuit, unbalance, magnet and loss faults.
//! - [`MixedFaultGenerator`]: couples the three families with severity-dependent
//!   interaction factors, and adds cascade, aging, overload, environmental and
//!   maintenance scenarios.
//!
//! Every generator implements [`FaultGenerator`], which also provides random
//! and batch generation. All randomness comes from a caller-supplied
//! [`Rng`], so seeded generators reproduce the same scenarios.
//!
//! # Example
//!
//! ```
//! use emachine_models::models::{
//!     faults::{FaultGenerator, FaultStatistics, MechanicalFaultGenerator},
//!     machine::{
//!         Application, MachineType,
//!         sizing::{self, SizingInput},
//!     },
//! };
//! use rand::{SeedableRng, rngs::StdRng};
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{AngularVelocity, Power},
//!     power::kilowatt,
//! };
//!
//! let input = SizingInput::new(
//!     Power::new::<kilowatt>(50.0),
//!     AngularVelocity::new::<revolution_per_minute>(3000.0),
//!     2,
//!     MachineType::Ipmsm,
//!     Application::Traction,
//! )
//! .unwrap();
//! let dims = sizing::size(&input);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let defects = MechanicalFaultGenerator.generate_batch(&dims, 10, None, &mut rng);
//!
//! assert_eq!(defects[0].id.as_deref(), Some("mechanical_001"));
//! assert_eq!(FaultStatistics::from_defects(&defects).total, 10);
//! ```

mod electrical;
mod error;
mod impact;
mod mechanical;
mod mixed;
mod recommendations;
mod sampling;
mod severity;
mod statistics;
mod thermal;

#[cfg(test)]
mod test_support;

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::models::machine::sizing::MachineDimensions;

pub use electrical::{
    DemagnetizationPattern, EddyCurrentPath, ElectricalFault, ElectricalFaultGenerator,
    ElectricalKind, InsulationDegradation, LossCause, LossKind, OpenCircuitKind,
    ShortCircuitPath, UnbalanceKind, WindingFault,
};
pub use error::FaultError;
pub use impact::{Impact, ImpactKind};
pub use mechanical::{
    BearingWearLocation, DeformationKind, EccentricityKind, GapPattern, MechanicalFault,
    MechanicalFaultGenerator, MechanicalKind, Misalignment, ShaftBend,
};
pub use mixed::{
    CascadeScenario, CascadeStep, Coupling, Environment, FailureMode, MaintenanceIssue,
    MixedFault, MixedFaultGenerator, MixedKind, OverloadKind,
};
pub use recommendations::recommendations;
pub use severity::{Severity, SeverityDistribution};
pub use statistics::FaultStatistics;
pub use thermal::{
    CooledComponent, CoolingCause, InsulationCause, OverloadCause, ThermalFault,
    ThermalFaultGenerator, ThermalKind,
};

/// Fault family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaultCategory {
    Thermal,
    Mechanical,
    Electrical,
    Mixed,
}

impl FaultCategory {
    pub const ALL: [Self; 4] = [
        Self::Thermal,
        Self::Mechanical,
        Self::Electrical,
        Self::Mixed,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::Mechanical => "mechanical",
            Self::Electrical => "electrical",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fault kind tagged with its family.
///
/// Thermal and electrical insulation degradation share a name but are
/// distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaultKind {
    Thermal(ThermalKind),
    Mechanical(MechanicalKind),
    Electrical(ElectricalKind),
    Mixed(MixedKind),
}

impl FaultKind {
    #[must_use]
    pub fn category(self) -> FaultCategory {
        match self {
            Self::Thermal(_) => FaultCategory::Thermal,
            Self::Mechanical(_) => FaultCategory::Mechanical,
            Self::Electrical(_) => FaultCategory::Electrical,
            Self::Mixed(_) => FaultCategory::Mixed,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thermal(kind) => kind.name(),
            Self::Mechanical(kind) => kind.name(),
            Self::Electrical(kind) => kind.name(),
            Self::Mixed(kind) => kind.name(),
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific parameters of a defect.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    Thermal(ThermalFault),
    Mechanical(MechanicalFault),
    Electrical(ElectricalFault),
    Mixed(MixedFault),
}

impl Fault {
    #[must_use]
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Thermal(fault) => FaultKind::Thermal(fault.kind()),
            Self::Mechanical(fault) => FaultKind::Mechanical(fault.kind()),
            Self::Electrical(fault) => FaultKind::Electrical(fault.kind()),
            Self::Mixed(fault) => FaultKind::Mixed(fault.kind()),
        }
    }
}

/// A sampled defect.
#[derive(Debug, Clone, PartialEq)]
pub struct Defect {
    /// Batch identifier such as `thermal_003`; `None` outside batches.
    pub id: Option<String>,
    pub severity: Severity,
    pub description: String,
    pub fault: Fault,
    pub impact: Impact,
}

impl Defect {
    fn new(severity: Severity, description: String, fault: Fault, impact: Impact) -> Self {
        Self {
            id: None,
            severity,
            description,
            fault,
            impact,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FaultKind {
        self.fault.kind()
    }

    #[must_use]
    pub fn category(&self) -> FaultCategory {
        self.kind().category()
    }
}

/// A sampler of one fault family.
pub trait FaultGenerator {
    type Kind: Copy + 'static;

    fn category(&self) -> FaultCategory;

    /// Every kind this generator can produce.
    fn kinds(&self) -> &'static [Self::Kind];

    /// Draws one of [`kinds`](Self::kinds) uniformly.
    fn random_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Kind;

    /// Samples a defect of the given kind and severity.
    fn generate<R: Rng + ?Sized>(
        &self,
        kind: Self::Kind,
        dims: &MachineDimensions,
        severity: Severity,
        rng: &mut R,
    ) -> Defect;

    /// Severity distribution used by batches when none is given.
    fn default_distribution(&self) -> SeverityDistribution {
        SeverityDistribution::default()
    }

    /// Samples a defect of a random kind.
    ///
    /// A missing severity is drawn uniformly from `1..=5`.
    fn generate_random<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        severity: Option<Severity>,
        rng: &mut R,
    ) -> Defect {
        let severity = match severity {
            Some(severity) => severity,
            None => Severity::random(rng),
        };
        let kind = self.random_kind(rng);
        self.generate(kind, dims, severity, rng)
    }

    /// Samples `count` defects of random kinds, numbered `<category>_001` onwards.
    fn generate_batch<R: Rng + ?Sized>(
        &self,
        dims: &MachineDimensions,
        count: usize,
        distribution: Option<&SeverityDistribution>,
        rng: &mut R,
    ) -> Vec<Defect> {
        let fallback = self.default_distribution();
        let distribution = distribution.unwrap_or(&fallback);
        let category = self.category();
        debug!(%category, count, "generating fault batch");

        let mut defects = Vec::with_capacity(count);
        for number in 1..=count {
            let severity = distribution.sample(rng);
            let mut defect = self.generate_random(dims, Some(severity), rng);
            defect.id = Some(format!("{category}_{number:03}"));
            defects.push(defect);
        }
        defects
    }
}

/// Direction of a thermal gradient or a vibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Radial,
    Axial,
    Tangential,
}

impl Direction {
    pub const ALL: [Self; 3] = [Self::Radial, Self::Axial, Self::Tangential];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Radial => "radial",
            Self::Axial => "axial",
            Self::Tangential => "tangential",
        }
    }
}

/// Upper-cases the first letter of a name.
fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses a kind by its snake_case name, ignoring case and surrounding space.
fn parse_kind<K: Copy>(
    kinds: &[K],
    name_of: fn(K) -> &'static str,
    category: FaultCategory,
    s: &str,
) -> Result<K, FaultError> {
    let name = s.trim().to_ascii_lowercase();
    kinds
        .iter()
        .copied()
        .find(|&kind| name_of(kind) == name)
        .ok_or_else(|| FaultError::UnknownKind {
            category,
            name: s.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    use test_support::traction_dims;

    #[test]
    fn batch_ids_and_count() {
        let dims = traction_dims();
        let mut rng = StdRng::seed_from_u64(11);

        let defects = ThermalFaultGenerator.generate_batch(&dims, 12, None, &mut rng);
        assert_eq!(defects.len(), 12);
        assert_eq!(defects[0].id.as_deref(), Some("thermal_001"));
        assert_eq!(defects[11].id.as_deref(), Some("thermal_012"));
        assert!(defects.iter().all(|d| d.category() == FaultCategory::Thermal));

        let electrical = ElectricalFaultGenerator::default();
        let defects = electrical.generate_batch(&dims, 3, None, &mut rng);
        assert_eq!(defects[2].id.as_deref(), Some("electrical_003"));
    }

    #[test]
    fn batch_follows_distribution() {
        let dims = traction_dims();
        let mut rng = StdRng::seed_from_u64(2);
        let only_critical = SeverityDistribution::new([0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();

        let defects =
            MechanicalFaultGenerator.generate_batch(&dims, 20, Some(&only_critical), &mut rng);
        assert!(defects.iter().all(|d| d.severity == Severity::MAX));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let dims = traction_dims();
        let generator = MixedFaultGenerator::default();

        let first = generator.generate_batch(&dims, 5, None, &mut StdRng::seed_from_u64(9));
        let second = generator.generate_batch(&dims, 5, None, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn random_defect_keeps_given_severity() {
        let dims = traction_dims();
        let mut rng = StdRng::seed_from_u64(4);
        let severity = Severity::new(2).unwrap();

        for _ in 0..20 {
            let defect = ElectricalFaultGenerator::default().generate_random(
                &dims,
                Some(severity),
                &mut rng,
            );
            assert_eq!(defect.severity, severity);
            assert!(defect.id.is_none());
            assert!(!defect.impact.is_empty());
        }
    }

    #[test]
    fn capitalize_names() {
        assert_eq!(capitalized("sinusoidal"), "Sinusoidal");
        assert_eq!(capitalized(""), "");
    }

    #[test]
    fn kind_names() {
        let thermal = FaultKind::Thermal(ThermalKind::InsulationDegradation);
        let electrical = FaultKind::Electrical(ElectricalKind::InsulationDegradation);
        assert_eq!(thermal.name(), electrical.name());
        assert_ne!(thermal, electrical);
        assert_eq!(electrical.category(), FaultCategory::Electrical);
        assert_eq!(FaultCategory::Mixed.to_string(), "mixed");
    }
}
