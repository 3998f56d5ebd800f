use std::fmt;

/// Qualitative grade of a validation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityLevel {
    NeedsImprovement,
    Acceptable,
    Good,
    VeryGood,
    Excellent,
}

impl QualityLevel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 80.0 {
            Self::VeryGood
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Acceptable
        } else {
            Self::NeedsImprovement
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very good",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::NeedsImprovement => "Needs improvement",
        })
    }
}

/// Follow-up suggested for a validation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Score below 70.
    Redesign,
    /// Score below 85.
    AdjustRatios,
    Conforming,
}

impl Recommendation {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 70.0 {
            Self::Redesign
        } else if score < 85.0 {
            Self::AdjustRatios
        } else {
            Self::Conforming
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Redesign => "Consider redesigning the main dimensions",
            Self::AdjustRatios => "Adjust some geometric ratios",
            Self::Conforming => "Design conforms to the empirical sizing criteria",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(QualityLevel::from_score(100.0), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(90.0), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(80.0), QualityLevel::VeryGood);
        assert_eq!(QualityLevel::from_score(70.0), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(60.0), QualityLevel::Acceptable);
        assert_eq!(QualityLevel::from_score(50.0), QualityLevel::NeedsImprovement);

        assert_eq!(Recommendation::from_score(69.9), Recommendation::Redesign);
        assert_eq!(Recommendation::from_score(80.0), Recommendation::AdjustRatios);
        assert_eq!(Recommendation::from_score(85.0), Recommendation::Conforming);
    }
}
