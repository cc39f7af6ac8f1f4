//! # breathwatch-core
//!
//! Asthma risk scoring and temperature tracking for breathwatch.
//!
//! The crate is pure computation plus one persistence seam. Scoring never
//! performs I/O; the temperature tracker and profile repository read and
//! write through an injected [`KeyValueStore`].
//!
//! ## Quick Start
//!
//! ```rust
//! use breathwatch_core::{assess, classify_temperature, MemoryStore, TemperatureTracker};
//! use breathwatch_core::bands::TemperatureLevel;
//! use breathwatch_types::{AsthmaSeverity, EnvironmentalReading, HealthProfile, PollenLevel};
//!
//! let reading = EnvironmentalReading::builder()
//!     .air_quality_index(120)
//!     .pollen_level(PollenLevel::Moderate)
//!     .humidity(40.0)
//!     .temperature(8.0)
//!     .build();
//! let profile = HealthProfile::new(AsthmaSeverity::Moderate).with_trigger("Cold Air");
//!
//! let assessment = assess(Some(&reading), Some(&profile));
//! assert_eq!(assessment.score, 65);
//!
//! let tracker = TemperatureTracker::new(MemoryStore::new());
//! tracker.record_today(8.0).unwrap();
//! assert_eq!(
//!     classify_temperature(8.0).map(|c| c.level),
//!     Some(TemperatureLevel::Cold)
//! );
//! ```
//!
//! ## Modules
//!
//! - [`bands`]: the shared, versioned threshold tables
//! - [`scorer`]: the additive risk model
//! - [`tracker`]: the seven-day temperature log
//! - [`store`]: the key-value interface, file and memory backends

pub mod bands;
mod error;
mod profile;
pub mod scorer;
pub mod store;
pub mod tracker;

pub use error::{BandError, ScoringConfigError, StoreError, TrackerError};
pub use profile::ProfileRepository;
pub use scorer::{assess, ComfortRange, RiskScorer, ScoringConfig};
pub use store::{FileStore, KeyValueStore, MemoryStore, PROFILE_KEY, TEMPERATURE_HISTORY_KEY};
pub use tracker::{classify_temperature, TemperatureClassification, TemperatureSummary, TemperatureTracker};

// Re-export types for convenience
pub use breathwatch_types::{
    AsthmaSeverity, EnvironmentalReading, Extremes, FactorDirection, HealthProfile, PollenLevel,
    RiskAssessment, RiskFactor, RiskLevel, TemperatureHistory, TemperatureRecord,
};
