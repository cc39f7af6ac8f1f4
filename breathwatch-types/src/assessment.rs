//! Output of the risk scorer.

use std::fmt;

/// Maximum score an assessment can carry.
pub const MAX_SCORE: u8 = 100;

/// Overall risk band derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    /// Lower bound (inclusive) of the Moderate band.
    pub const MODERATE_FROM: u8 = 25;
    /// Lower bound (inclusive) of the High band.
    pub const HIGH_FROM: u8 = 50;
    /// Lower bound (inclusive) of the Severe band.
    pub const SEVERE_FROM: u8 = 75;

    /// Map a clamped score to its band.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::SEVERE_FROM {
            RiskLevel::Severe
        } else if score >= Self::HIGH_FROM {
            RiskLevel::High
        } else if score >= Self::MODERATE_FROM {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Severe => "Severe",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a factor pushes risk up, down, or is merely informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FactorDirection {
    Negative,
    #[default]
    Neutral,
    Positive,
}

/// One named contributor to the overall score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RiskFactor {
    pub name: String,
    pub direction: FactorDirection,
    pub explanation: String,

    /// Points added to (or, when negative, removed from) the raw sum.
    pub points: i32,
}

impl RiskFactor {
    /// Create a factor contributing `points` to the score.
    pub fn new(
        name: impl Into<String>,
        direction: FactorDirection,
        explanation: impl Into<String>,
        points: i32,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            explanation: explanation.into(),
            points,
        }
    }
}

/// The result of scoring one reading against one (optional) profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskAssessment {
    /// Clamped score in `[0, 100]`.
    pub score: u8,
    pub level: RiskLevel,

    /// Contributors in evaluation order.
    pub factors: Vec<RiskFactor>,

    /// At most five recommendations in insertion order.
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    /// Sum of factor points before clamping.
    pub fn raw_points(&self) -> i32 {
        self.factors
            .iter()
            .fold(0i32, |acc, f| acc.saturating_add(f.points))
    }

    /// Look up a factor by name.
    pub fn factor(&self, name: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds_are_inclusive() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::Severe);
        assert_eq!(RiskLevel::from_score(MAX_SCORE), RiskLevel::Severe);
    }

    #[test]
    fn test_raw_points_and_lookup() {
        let assessment = RiskAssessment {
            score: 25,
            level: RiskLevel::Moderate,
            factors: vec![
                RiskFactor::new("Air Quality", FactorDirection::Negative, "smog", 30),
                RiskFactor::new("Controller Medication", FactorDirection::Positive, "", -5),
            ],
            recommendations: Vec::new(),
        };

        assert_eq!(assessment.raw_points(), 25);
        assert_eq!(assessment.factor("Air Quality").map(|f| f.points), Some(30));
        assert!(assessment.factor("Pollen").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&FactorDirection::Positive).unwrap();
        assert_eq!(json, r#""positive""#);
    }
}
