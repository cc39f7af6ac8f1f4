//! Environmental readings supplied to the risk scorer.

use std::fmt;
use std::str::FromStr;

/// Pollen count category as reported by the environmental provider.
///
/// Variants are ordered from least to most severe, so `PollenLevel::High >
/// PollenLevel::Moderate` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PollenLevel {
    #[default]
    Low,
    Moderate,
    High,
    #[cfg_attr(feature = "serde", serde(rename = "Very High", alias = "VeryHigh"))]
    VeryHigh,
}

impl PollenLevel {
    /// All levels, least severe first.
    pub const ALL: [PollenLevel; 4] = [
        PollenLevel::Low,
        PollenLevel::Moderate,
        PollenLevel::High,
        PollenLevel::VeryHigh,
    ];

    /// Position on the severity scale (Low = 0, Very High = 3).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// High and Very High both count as "high pollen" for triggers and advice.
    pub fn is_high(self) -> bool {
        self >= PollenLevel::High
    }

    pub fn label(self) -> &'static str {
        match self {
            PollenLevel::Low => "Low",
            PollenLevel::Moderate => "Moderate",
            PollenLevel::High => "High",
            PollenLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for PollenLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a pollen level string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePollenLevelError(pub String);

impl fmt::Display for ParsePollenLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown pollen level '{}' (expected low, moderate, high or very-high)",
            self.0
        )
    }
}

impl std::error::Error for ParsePollenLevelError {}

impl FromStr for PollenLevel {
    type Err = ParsePollenLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "low" => Ok(PollenLevel::Low),
            "moderate" | "medium" => Ok(PollenLevel::Moderate),
            "high" => Ok(PollenLevel::High),
            "veryhigh" => Ok(PollenLevel::VeryHigh),
            _ => Err(ParsePollenLevelError(s.to_string())),
        }
    }
}

/// A snapshot of outdoor conditions at the patient's location.
///
/// Readings are ephemeral: they are supplied per evaluation and never stored
/// by the scorer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnvironmentalReading {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,

    pub pollen_level: PollenLevel,

    /// Air Quality Index. Negative values are accepted on input and clamped
    /// to zero by [`EnvironmentalReading::sanitized`].
    pub air_quality_index: i32,

    /// Relative humidity in percent.
    pub humidity: f64,
}

impl EnvironmentalReading {
    /// Create a reading from raw values. Nothing is clamped here.
    pub fn new(
        temperature: f64,
        pollen_level: PollenLevel,
        air_quality_index: i32,
        humidity: f64,
    ) -> Self {
        Self {
            temperature,
            pollen_level,
            air_quality_index,
            humidity,
        }
    }

    /// Start building a reading from comfortable defaults.
    pub fn builder() -> EnvironmentalReadingBuilder {
        EnvironmentalReadingBuilder::new()
    }

    /// Return a copy with out-of-range values pulled back into range.
    ///
    /// AQI is clamped to `>= 0` and finite humidity to `[0, 100]`. Non-finite
    /// values are left alone; [`temperature_celsius`](Self::temperature_celsius)
    /// and [`humidity_percent`](Self::humidity_percent) report them as absent.
    pub fn sanitized(&self) -> Self {
        let humidity = if self.humidity.is_finite() {
            self.humidity.clamp(0.0, 100.0)
        } else {
            self.humidity
        };

        Self {
            temperature: self.temperature,
            pollen_level: self.pollen_level,
            air_quality_index: self.air_quality_index.max(0),
            humidity,
        }
    }

    /// True when [`sanitized`](Self::sanitized) would change this reading.
    pub fn needs_clamping(&self) -> bool {
        self.air_quality_index < 0
            || (self.humidity.is_finite() && !(0.0..=100.0).contains(&self.humidity))
    }

    /// Temperature, or `None` if the provider sent NaN or infinity.
    pub fn temperature_celsius(&self) -> Option<f64> {
        self.temperature.is_finite().then_some(self.temperature)
    }

    /// Humidity, or `None` if the provider sent NaN or infinity.
    pub fn humidity_percent(&self) -> Option<f64> {
        self.humidity.is_finite().then_some(self.humidity)
    }
}

/// Builder for `EnvironmentalReading`.
///
/// Unset fields default to a benign reading: 20°C, low pollen, AQI 0 and
/// 45% humidity.
#[derive(Debug)]
pub struct EnvironmentalReadingBuilder {
    temperature: f64,
    pollen_level: PollenLevel,
    air_quality_index: i32,
    humidity: f64,
}

impl EnvironmentalReadingBuilder {
    /// Create a builder with 20°C, low pollen, AQI 0 and 45% humidity.
    pub fn new() -> Self {
        Self {
            temperature: 20.0,
            pollen_level: PollenLevel::Low,
            air_quality_index: 0,
            humidity: 45.0,
        }
    }

    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature = celsius;
        self
    }

    pub fn pollen_level(mut self, level: PollenLevel) -> Self {
        self.pollen_level = level;
        self
    }

    pub fn air_quality_index(mut self, aqi: i32) -> Self {
        self.air_quality_index = aqi;
        self
    }

    pub fn humidity(mut self, percent: f64) -> Self {
        self.humidity = percent;
        self
    }

    /// Build the reading.
    pub fn build(self) -> EnvironmentalReading {
        EnvironmentalReading {
            temperature: self.temperature,
            pollen_level: self.pollen_level,
            air_quality_index: self.air_quality_index,
            humidity: self.humidity,
        }
    }
}

impl Default for EnvironmentalReadingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
