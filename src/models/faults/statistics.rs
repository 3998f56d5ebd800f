use std::collections::{BTreeMap, BTreeSet};

use super::{Defect, FailureMode, Fault, FaultKind, ImpactKind, Severity};

/// Summary of a batch of defects.
///
/// An empty batch yields zero totals and no most-common entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaultStatistics {
    pub total: usize,
    pub average_severity: f64,
    /// Defect count per severity level, index 0 for level 1.
    pub severity_counts: [usize; 5],
    pub kind_counts: BTreeMap<FaultKind, usize>,
    /// Mean of each impact over the defects that carry it.
    pub average_impacts: BTreeMap<ImpactKind, f64>,
    pub most_common_kind: Option<FaultKind>,
    pub most_common_severity: Option<Severity>,
    /// Interaction factors of coupled mixed defects, in batch order.
    pub interaction_factors: Vec<f64>,
    pub failure_modes: BTreeSet<FailureMode>,
}

impl FaultStatistics {
    #[must_use]
    pub fn from_defects(defects: &[Defect]) -> Self {
        if defects.is_empty() {
            return Self::default();
        }

        let mut severity_counts = [0; 5];
        let mut kind_counts = BTreeMap::new();
        let mut impact_sums: BTreeMap<ImpactKind, (f64, usize)> = BTreeMap::new();
        let mut interaction_factors = Vec::new();
        let mut failure_modes = BTreeSet::new();
        let mut severity_sum = 0.0;

        for defect in defects {
            let level = defect.severity.level();
            severity_sum += f64::from(level);
            severity_counts[usize::from(level - 1)] += 1;
            *kind_counts.entry(defect.kind()).or_insert(0) += 1;

            for (kind, value) in defect.impact.iter() {
                let entry = impact_sums.entry(kind).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }

            if let Fault::Mixed(fault) = &defect.fault {
                interaction_factors.extend(fault.interaction_factor());
                failure_modes.insert(fault.failure_mode());
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let total = defects.len() as f64;

        #[allow(clippy::cast_precision_loss)]
        let average_impacts = impact_sums
            .into_iter()
            .map(|(kind, (sum, count))| (kind, sum / count as f64))
            .collect();

        let most_common_kind = most_common(&kind_counts);
        let most_common_severity = severity_counts
            .iter()
            .zip(Severity::ALL)
            .filter(|&(&count, _)| count > 0)
            .rev()
            .max_by_key(|&(&count, _)| count)
            .map(|(_, severity)| severity);

        Self {
            total: defects.len(),
            average_severity: severity_sum / total,
            severity_counts,
            kind_counts,
            average_impacts,
            most_common_kind,
            most_common_severity,
            interaction_factors,
            failure_modes,
        }
    }

    /// Number of defects at `severity`.
    #[must_use]
    pub fn count_at(&self, severity: Severity) -> usize {
        self.severity_counts[usize::from(severity.level() - 1)]
    }
}

/// Key with the highest count, the smallest key on ties.
fn most_common<K: Copy + Ord>(counts: &BTreeMap<K, usize>) -> Option<K> {
    counts
        .iter()
        .rev()
        .max_by_key(|&(_, &count)| count)
        .map(|(&key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::models::faults::{
        FaultGenerator, MechanicalFaultGenerator, MechanicalKind, MixedFaultGenerator, MixedKind,
        test_support::traction_dims,
    };

    fn mechanical(kinds: &[(MechanicalKind, u8)]) -> Vec<Defect> {
        let dims = traction_dims();
        let mut rng = StdRng::seed_from_u64(3);
        kinds
            .iter()
            .map(|&(kind, level)| {
                MechanicalFaultGenerator.generate(
                    kind,
                    &dims,
                    Severity::new(level).unwrap(),
                    &mut rng,
                )
            })
            .collect()
    }

    #[test]
    fn empty_batch() {
        let stats = FaultStatistics::from_defects(&[]);
        assert_eq!(stats.total, 0);
        assert_relative_eq!(stats.average_severity, 0.0);
        assert!(stats.most_common_kind.is_none());
        assert!(stats.most_common_severity.is_none());
    }

    #[test]
    fn counts_and_averages() {
        let defects = mechanical(&[
            (MechanicalKind::Vibration, 1),
            (MechanicalKind::Vibration, 3),
            (MechanicalKind::BearingWear, 3),
            (MechanicalKind::BearingWear, 5),
        ]);
        let stats = FaultStatistics::from_defects(&defects);

        assert_eq!(stats.total, 4);
        assert_relative_eq!(stats.average_severity, 3.0);
        assert_eq!(stats.severity_counts, [1, 0, 2, 0, 1]);
        assert_eq!(stats.count_at(Severity::new(3).unwrap()), 2);
        assert_eq!(stats.most_common_severity, Severity::new(3).ok());
        assert_eq!(
            stats.kind_counts.get(&FaultKind::Mechanical(MechanicalKind::Vibration)),
            Some(&2)
        );
        assert!(stats.interaction_factors.is_empty());
        assert!(stats.failure_modes.is_empty());

        let vibration: f64 = defects
            .iter()
            .map(|defect| defect.impact.get(ImpactKind::Vibration))
            .sum::<f64>()
            / 4.0;
        assert_relative_eq!(stats.average_impacts[&ImpactKind::Vibration], vibration);
    }

    #[test]
    fn ties_go_to_the_first_kind() {
        let defects = mechanical(&[
            (MechanicalKind::Vibration, 2),
            (MechanicalKind::Eccentricity, 4),
        ]);
        let stats = FaultStatistics::from_defects(&defects);

        assert_eq!(
            stats.most_common_kind,
            Some(FaultKind::Mechanical(MechanicalKind::Eccentricity))
        );
        assert_eq!(stats.most_common_severity, Severity::new(2).ok());
    }

    #[test]
    fn mixed_interactions() {
        let dims = traction_dims();
        let generator = MixedFaultGenerator::default();
        let severity = Severity::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let defects = vec![
            generator.generate(MixedKind::ThermalMechanical, &dims, severity, &mut rng),
            generator.generate(MixedKind::ThermalMechanical, &dims, severity, &mut rng),
            generator.generate(MixedKind::AgingRelated, &dims, severity, &mut rng),
        ];
        let stats = FaultStatistics::from_defects(&defects);

        assert_eq!(stats.interaction_factors.len(), 2);
        assert_relative_eq!(stats.interaction_factors[0], 1.5);
        assert_eq!(
            stats.failure_modes.into_iter().collect::<Vec<_>>(),
            [
                FailureMode::ProgressiveThermalMechanical,
                FailureMode::AgingInduced
            ]
        );
    }
}
