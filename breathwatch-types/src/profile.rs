//! Patient health profile consulted by the risk scorer.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Clinician-assigned asthma severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsthmaSeverity {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl AsthmaSeverity {
    pub fn label(self) -> &'static str {
        match self {
            AsthmaSeverity::Mild => "Mild",
            AsthmaSeverity::Moderate => "Moderate",
            AsthmaSeverity::Severe => "Severe",
        }
    }
}

impl fmt::Display for AsthmaSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AsthmaSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" => Ok(AsthmaSeverity::Mild),
            "moderate" => Ok(AsthmaSeverity::Moderate),
            "severe" => Ok(AsthmaSeverity::Severe),
            other => Err(format!(
                "unknown asthma severity '{}' (expected mild, moderate or severe)",
                other
            )),
        }
    }
}

/// Well-known trigger names matched against current conditions.
pub mod triggers {
    pub const POLLEN: &str = "Pollen";
    pub const AIR_POLLUTION: &str = "Air Pollution";
    pub const COLD_AIR: &str = "Cold Air";
}

/// The patient's asthma profile.
///
/// Profiles are read-only input to the scorer; they are owned by the
/// persistence layer and edited through the front end.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct HealthProfile {
    pub asthma_severity: AsthmaSeverity,

    /// Free-text trigger names, e.g. "Pollen" or "Cold Air".
    pub triggers: BTreeSet<String>,

    /// Daily controller (preventer) medications.
    pub controller_medications: Vec<String>,
}

impl HealthProfile {
    /// Create a profile with no triggers or medications.
    pub fn new(asthma_severity: AsthmaSeverity) -> Self {
        Self {
            asthma_severity,
            ..Default::default()
        }
    }

    /// Add a trigger, ignoring blank names.
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        let trigger = trigger.into();
        let trimmed = trigger.trim();
        if !trimmed.is_empty() {
            self.triggers.insert(trimmed.to_string());
        }
        self
    }

    /// Add a controller medication, ignoring blank names.
    pub fn with_medication(mut self, medication: impl Into<String>) -> Self {
        let medication = medication.into();
        let trimmed = medication.trim();
        if !trimmed.is_empty() {
            self.controller_medications.push(trimmed.to_string());
        }
        self
    }

    /// Whether the profile lists `name` as a trigger.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace, so
    /// "cold air" matches a stored "Cold Air".
    pub fn has_trigger(&self, name: &str) -> bool {
        let wanted = name.trim();
        self.triggers
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(wanted))
    }

    /// Returns true if any controller medication is listed.
    pub fn takes_controller_medication(&self) -> bool {
        self.controller_medications
            .iter()
            .any(|m| !m.trim().is_empty())
    }
}
