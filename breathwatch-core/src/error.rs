//! Error types for scoring, tracking and persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Key contains characters outside `[A-Za-z0-9_-]` or is empty.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The value could not be encoded.
    #[error("Failed to serialize value for key {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when building a [`BandTable`](crate::bands::BandTable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BandError {
    #[error("Band table has no bands")]
    Empty,

    /// Bounds must be strictly descending and not NaN.
    #[error("Band {index} has lower bound {bound}, which is not below the previous band")]
    Unordered { index: usize, bound: f64 },
}

/// Errors raised by the [`TemperatureTracker`](crate::TemperatureTracker).
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Temperature must be a finite number, got {0}")]
    NonFinite(f64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by [`ScoringConfig::validate`](crate::ScoringConfig::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringConfigError {
    #[error("scoring.{field} must not be negative, got {value}")]
    NegativePoints { field: &'static str, value: i32 },

    /// Bounds must be finite with `min <= max`.
    #[error("scoring.{field} is not a valid range: {min}..{max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("scoring.cold_air_trigger_below must be a finite number, got {0}")]
    NonFiniteThreshold(f64),

    #[error("scoring.max_recommendations must be at least 1")]
    NoRecommendations,
}
