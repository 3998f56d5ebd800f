use std::{collections::BTreeMap, fmt};

use super::Severity;

/// Kinds of effect a fault has on machine behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImpactKind {
    TemperatureRise,
    ThermalStress,
    ThermalUnbalance,
    StructuralStress,
    EfficiencyLoss,
    LeakageCurrent,
    SafetyRisk,
    TorqueRipple,
    TorqueReduction,
    CoggingTorque,
    Vibration,
    Noise,
    Eccentricity,
    BearingLoad,
    AirGapVariation,
    CurrentUnbalance,
    CurrentReduction,
    Overcurrent,
    PhaseUnbalance,
    BackEmfReduction,
    PowerFactor,
    PowerDensity,
}

impl ImpactKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TemperatureRise => "temperature_rise",
            Self::ThermalStress => "thermal_stress",
            Self::ThermalUnbalance => "thermal_unbalance",
            Self::StructuralStress => "structural_stress",
            Self::EfficiencyLoss => "efficiency_loss",
            Self::LeakageCurrent => "leakage_current",
            Self::SafetyRisk => "safety_risk",
            Self::TorqueRipple => "torque_ripple",
            Self::TorqueReduction => "torque_reduction",
            Self::CoggingTorque => "cogging_torque",
            Self::Vibration => "vibration",
            Self::Noise => "noise",
            Self::Eccentricity => "eccentricity",
            Self::BearingLoad => "bearing_load",
            Self::AirGapVariation => "air_gap_variation",
            Self::CurrentUnbalance => "current_unbalance",
            Self::CurrentReduction => "current_reduction",
            Self::Overcurrent => "overcurrent",
            Self::PhaseUnbalance => "phase_unbalance",
            Self::BackEmfReduction => "back_emf_reduction",
            Self::PowerFactor => "power_factor",
            Self::PowerDensity => "power_density",
        }
    }
}

impl fmt::Display for ImpactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensionless impact scalars keyed by kind.
///
/// Kinds that are absent read as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Impact(BTreeMap<ImpactKind, f64>);

impl Impact {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an impact of `severity × weight` for each listed kind.
    pub(super) fn scaled(severity: Severity, weights: &[(ImpactKind, f64)]) -> Self {
        let level = f64::from(severity.level());
        weights
            .iter()
            .map(|&(kind, weight)| (kind, level * weight))
            .collect()
    }

    #[must_use]
    pub fn get(&self, kind: ImpactKind) -> f64 {
        self.0.get(&kind).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, kind: ImpactKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn insert(&mut self, kind: ImpactKind, value: f64) {
        self.0.insert(kind, value);
    }

    /// Adds `value` to the current value of `kind`.
    pub fn add(&mut self, kind: ImpactKind, value: f64) {
        *self.0.entry(kind).or_default() += value;
    }

    /// Adds every entry of `other`, multiplied by `weight`.
    pub fn accumulate(&mut self, other: &Impact, weight: f64) {
        for (kind, value) in other.iter() {
            self.add(kind, value * weight);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImpactKind, f64)> + '_ {
        self.0.iter().map(|(&kind, &value)| (kind, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ImpactKind, f64)> for Impact {
    fn from_iter<I: IntoIterator<Item = (ImpactKind, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scaled_by_severity() {
        let impact = Impact::scaled(
            Severity::new(3).unwrap(),
            &[(ImpactKind::Vibration, 0.2), (ImpactKind::Noise, 0.15)],
        );

        assert_eq!(impact.len(), 2);
        assert_relative_eq!(impact.get(ImpactKind::Vibration), 0.6, epsilon = 1e-12);
        assert_relative_eq!(impact.get(ImpactKind::Noise), 0.45, epsilon = 1e-12);
        assert_relative_eq!(impact.get(ImpactKind::SafetyRisk), 0.0);
        assert!(!impact.contains(ImpactKind::SafetyRisk));
    }

    #[test]
    fn accumulate_weighted() {
        let mut total = Impact::new();
        let step: Impact = [(ImpactKind::Vibration, 1.0), (ImpactKind::Noise, 0.5)]
            .into_iter()
            .collect();

        total.accumulate(&step, 1.1);
        total.accumulate(&step, 1.2);

        assert_relative_eq!(total.get(ImpactKind::Vibration), 2.3, epsilon = 1e-12);
        assert_relative_eq!(total.get(ImpactKind::Noise), 1.15, epsilon = 1e-12);
    }

    #[test]
    fn names() {
        assert_eq!(ImpactKind::BackEmfReduction.to_string(), "back_emf_reduction");
        assert_eq!(ImpactKind::TemperatureRise.name(), "temperature_rise");
    }
}
