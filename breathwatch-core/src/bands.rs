//! Shared threshold tables for every banded classification.
//!
//! AQI, pollen and temperature are all classified the same way: an ordered
//! list of bands, highest lower bound first, scanned top-down until the value
//! is at or above a band's bound. Keeping the thresholds here means the scorer,
//! the tracker and any front end agree on a single definition.
//!
//! ```text
//!   value ──▶ [151 VeryUnhealthy] ──▶ [101 Sensitive] ──▶ [51 Moderate] ──▶ [-∞ Good]
//!              first band with value >= lower_bound wins
//! ```

use std::fmt;

use breathwatch_types::{FactorDirection, PollenLevel};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::BandError;

/// Version of the built-in tables. Bump when a bound, message or point
/// value changes so stored assessments can be compared across releases.
pub const BANDS_VERSION: u32 = 1;

/// One row of a classification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<L> {
    /// Inclusive lower bound.
    pub lower_bound: f64,
    pub level: L,
    /// Advisory text shown alongside the level.
    pub message: String,
    /// Display color tag.
    pub color: String,
    /// Risk points this band contributes when used for scoring.
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub direction: FactorDirection,
}

impl<L> Band<L> {
    /// Create an unscored band.
    pub fn new(lower_bound: f64, level: L, message: &str, color: &str) -> Self {
        Self {
            lower_bound,
            level,
            message: message.to_string(),
            color: color.to_string(),
            points: 0,
            direction: FactorDirection::Neutral,
        }
    }

    /// Attach the points and direction used when this band feeds the scorer.
    pub fn scored(mut self, points: i32, direction: FactorDirection) -> Self {
        self.points = points;
        self.direction = direction;
        self
    }
}

/// An ordered, versioned list of bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable<L> {
    version: u32,
    bands: Vec<Band<L>>,
}

impl<L> BandTable<L> {
    /// Build a table, checking that bounds strictly descend.
    pub fn new(version: u32, bands: Vec<Band<L>>) -> Result<Self, BandError> {
        if bands.is_empty() {
            return Err(BandError::Empty);
        }

        for (index, band) in bands.iter().enumerate() {
            let bound = band.lower_bound;
            let below_previous = index == 0 || bound < bands[index - 1].lower_bound;
            if bound.is_nan() || !below_previous {
                return Err(BandError::Unordered { index, bound });
            }
        }

        Ok(Self { version, bands })
    }

    /// Returns the table version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the bands, highest bound first.
    pub fn bands(&self) -> &[Band<L>] {
        &self.bands
    }

    /// First band whose lower bound is at or below `value`.
    ///
    /// Returns `None` for NaN or for values below the last band's bound.
    pub fn classify(&self, value: f64) -> Option<&Band<L>> {
        if value.is_nan() {
            return None;
        }
        self.bands.iter().find(|band| value >= band.lower_bound)
    }
}

/// AQI categories used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    VeryUnhealthy,
}

impl AqiCategory {
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative temperature bands for the daily log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureLevel {
    Hot,
    Warm,
    Normal,
    Cool,
    Cold,
}

impl TemperatureLevel {
    pub fn label(self) -> &'static str {
        match self {
            TemperatureLevel::Hot => "Hot",
            TemperatureLevel::Warm => "Warm",
            TemperatureLevel::Normal => "Normal",
            TemperatureLevel::Cool => "Cool",
            TemperatureLevel::Cold => "Cold",
        }
    }
}

impl fmt::Display for TemperatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The built-in tables are constructed directly: their bounds are literals
// that already satisfy the ordering `new` checks (see `builtin_tables_are_valid`).
fn builtin<L>(bands: Vec<Band<L>>) -> BandTable<L> {
    BandTable {
        version: BANDS_VERSION,
        bands,
    }
}

static AQI_BANDS: Lazy<BandTable<AqiCategory>> = Lazy::new(|| {
    use FactorDirection::*;
    builtin(vec![
        Band::new(
            151.0,
            AqiCategory::VeryUnhealthy,
            "Everyone may experience health effects; people with asthma are at serious risk.",
            "purple",
        )
        .scored(30, Negative),
        Band::new(
            101.0,
            AqiCategory::UnhealthyForSensitiveGroups,
            "People with asthma are likely to be affected.",
            "orange",
        )
        .scored(20, Negative),
        Band::new(
            51.0,
            AqiCategory::Moderate,
            "Acceptable, though unusually sensitive people may notice symptoms.",
            "yellow",
        )
        .scored(10, Neutral),
        Band::new(
            f64::NEG_INFINITY,
            AqiCategory::Good,
            "Air quality poses little or no risk.",
            "green",
        )
        .scored(0, Positive),
    ])
});

static POLLEN_BANDS: Lazy<BandTable<PollenLevel>> = Lazy::new(|| {
    use FactorDirection::*;
    builtin(vec![
        Band::new(
            f64::from(PollenLevel::VeryHigh.ordinal()),
            PollenLevel::VeryHigh,
            "Pollen counts are very high.",
            "red",
        )
        .scored(25, Negative),
        Band::new(
            f64::from(PollenLevel::High.ordinal()),
            PollenLevel::High,
            "Pollen counts are high.",
            "orange",
        )
        .scored(25, Negative),
        Band::new(
            f64::from(PollenLevel::Moderate.ordinal()),
            PollenLevel::Moderate,
            "Pollen counts are moderate.",
            "yellow",
        )
        .scored(10, Neutral),
        Band::new(
            f64::NEG_INFINITY,
            PollenLevel::Low,
            "Pollen counts are low.",
            "green",
        )
        .scored(0, Positive),
    ])
});

static TEMPERATURE_BANDS: Lazy<BandTable<TemperatureLevel>> = Lazy::new(|| {
    builtin(vec![
        Band::new(
            35.0,
            TemperatureLevel::Hot,
            "Extreme heat can trigger symptoms. Stay in air-conditioned spaces and keep hydrated.",
            "red",
        ),
        Band::new(
            30.0,
            TemperatureLevel::Warm,
            "Warm weather. Limit strenuous outdoor activity during the hottest hours.",
            "orange",
        ),
        Band::new(
            20.0,
            TemperatureLevel::Normal,
            "Comfortable temperature for most outdoor activities.",
            "green",
        ),
        Band::new(
            10.0,
            TemperatureLevel::Cool,
            "Cool air. Consider a scarf over your nose and mouth outdoors.",
            "blue",
        ),
        Band::new(
            f64::NEG_INFINITY,
            TemperatureLevel::Cold,
            "Cold air is a common trigger. Cover your nose and mouth and keep your rescue inhaler close.",
            "purple",
        ),
    ])
});

/// The AQI scoring table.
pub fn aqi_bands() -> &'static BandTable<AqiCategory> {
    &AQI_BANDS
}

/// The pollen scoring table, keyed by [`PollenLevel::ordinal`].
pub fn pollen_bands() -> &'static BandTable<PollenLevel> {
    &POLLEN_BANDS
}

/// The temperature advisory table.
pub fn temperature_bands() -> &'static BandTable<TemperatureLevel> {
    &TEMPERATURE_BANDS
}
