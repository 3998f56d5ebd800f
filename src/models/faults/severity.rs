use std::fmt;

use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
};

use crate::support::constraint::{ConstraintError, NonNegative};

use super::FaultError;

/// Default batch weights for severities 1 through 5.
const DEFAULT_WEIGHTS: [f64; 5] = [0.2, 0.3, 0.3, 0.15, 0.05];

/// Fault severity on a 1 (minor) to 5 (critical) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    pub const ALL: [Self; 5] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Creates a severity level.
    ///
    /// # Errors
    ///
    /// Returns [`FaultError::Severity`] if `level` is outside `1..=5`.
    pub fn new(level: u8) -> Result<Self, FaultError> {
        match level {
            0 => Err(FaultError::Severity(ConstraintError::BelowMinimum)),
            1..=5 => Ok(Self(level)),
            _ => Err(FaultError::Severity(ConstraintError::AboveMaximum)),
        }
    }

    /// Clamps `level` into `1..=5`.
    pub(super) fn saturating(level: u32) -> Self {
        Self(u8::try_from(level.clamp(1, 5)).unwrap_or(5))
    }

    /// Draws a severity uniformly from `1..=5`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(1..=5))
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Severity as a fraction of the maximum, `s / 5`.
    #[must_use]
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 5.0
    }

    /// Levels 4 and 5.
    #[must_use]
    pub fn is_critical(self) -> bool {
        self.0 >= 4
    }

    /// Levels 2 and 3.
    #[must_use]
    pub fn is_moderate(self) -> bool {
        matches!(self.0, 2 | 3)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relative weights used to draw severities for a batch.
///
/// Weights need not sum to one; they are normalized when sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityDistribution {
    weights: [f64; 5],
    index: WeightedIndex<f64>,
}

impl Default for SeverityDistribution {
    /// Mostly minor and moderate faults: `0.2, 0.3, 0.3, 0.15, 0.05`.
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS).expect("default severity weights should always be valid")
    }
}

impl SeverityDistribution {
    /// Creates a distribution from weights for severities 1 through 5.
    ///
    /// # Errors
    ///
    /// Returns [`FaultError::Weight`] if a weight is negative or NaN, and
    /// [`FaultError::Weights`] if the weights cannot form a distribution
    /// (all zero, or infinite).
    pub fn new(weights: [f64; 5]) -> Result<Self, FaultError> {
        for (severity, weight) in Severity::ALL.into_iter().zip(weights) {
            NonNegative::new(weight).map_err(|source| FaultError::Weight { severity, source })?;
        }
        let index = WeightedIndex::new(weights).map_err(FaultError::Weights)?;
        Ok(Self { weights, index })
    }

    /// Every severity equally likely.
    #[must_use]
    pub fn uniform() -> Self {
        Self::new([1.0; 5]).expect("uniform severity weights should always be valid")
    }

    #[must_use]
    pub fn weights(&self) -> [f64; 5] {
        self.weights
    }

    /// Normalized probability of drawing `severity`.
    #[must_use]
    pub fn probability(&self, severity: Severity) -> f64 {
        let total: f64 = self.weights.iter().sum();
        self.weights[usize::from(severity.level() - 1)] / total
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Severity {
        Severity::ALL[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn levels() {
        assert_eq!(Severity::new(3).unwrap().level(), 3);
        assert_relative_eq!(Severity::new(4).unwrap().factor(), 0.8);
        assert!(matches!(
            Severity::new(0),
            Err(FaultError::Severity(ConstraintError::BelowMinimum))
        ));
        assert!(matches!(
            Severity::new(6),
            Err(FaultError::Severity(ConstraintError::AboveMaximum))
        ));

        assert_eq!(Severity::saturating(0), Severity::MIN);
        assert_eq!(Severity::saturating(9), Severity::MAX);

        assert!(Severity::MAX.is_critical());
        assert!(Severity::new(2).unwrap().is_moderate());
        assert!(!Severity::MIN.is_moderate());
    }

    #[test]
    fn random_severity_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let severity = Severity::random(&mut rng);
            assert!((Severity::MIN..=Severity::MAX).contains(&severity));
        }
    }

    #[test]
    fn default_weights() {
        let distribution = SeverityDistribution::default();
        assert_relative_eq!(distribution.probability(Severity::new(2).unwrap()), 0.3);
        assert_relative_eq!(distribution.probability(Severity::MAX), 0.05);

        let uniform = SeverityDistribution::uniform();
        assert_relative_eq!(uniform.probability(Severity::MIN), 0.2);
    }

    #[test]
    fn rejects_invalid_weights() {
        assert!(matches!(
            SeverityDistribution::new([0.0; 5]),
            Err(FaultError::Weights(_))
        ));
        assert!(matches!(
            SeverityDistribution::new([1.0, -1.0, 1.0, 1.0, 1.0]),
            Err(FaultError::Weight {
                severity: Severity(2),
                source: ConstraintError::Negative,
            })
        ));
        assert!(matches!(
            SeverityDistribution::new([1.0, 1.0, f64::INFINITY, 1.0, 1.0]),
            Err(FaultError::Weights(_))
        ));
    }

    #[test]
    fn sampling_follows_weights() {
        let distribution = SeverityDistribution::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0_usize; 5];
        for _ in 0..10_000 {
            let severity = distribution.sample(&mut rng);
            counts[usize::from(severity.level() - 1)] += 1;
        }

        // Expected 3000 for levels 2 and 3, 500 for level 5.
        assert!(counts[1] > 2700 && counts[1] < 3300);
        assert!(counts[2] > 2700 && counts[2] < 3300);
        assert!(counts[4] > 350 && counts[4] < 650);

        let uniform = SeverityDistribution::uniform();
        assert_eq!(uniform.weights(), [1.0; 5]);
        for _ in 0..100 {
            let severity = uniform.sample(&mut rng);
            assert!((Severity::MIN..=Severity::MAX).contains(&severity));
        }
    }

    #[test]
    fn degenerate_distribution_always_draws_its_level() {
        let distribution = SeverityDistribution::new([0.0, 0.0, 0.0, 2.0, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(distribution.sample(&mut rng).level(), 4);
        }
    }
}
