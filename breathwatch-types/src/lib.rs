//! # breathwatch-types
//!
//! Core types for asthma risk monitoring. This crate defines the data model
//! shared by the scoring library, its persistence layer and any front end that
//! renders results.
//!
//! ## Design Goals
//!
//! - **Plain data**: every type is an ordinary value with no hidden state
//! - **Optional serialization**: enable the `serde` feature to persist or transmit values
//! - **Invariants in the type**: [`TemperatureHistory`] can never hold more than
//!   seven records or two records for the same date
//! - **Versioned schema**: persisted envelopes carry a [`SchemaVersion`]
//!
//! ## Features
//!
//! - `serde`: JSON (or any serde format) support, including `chrono` dates
//!
//! ## Example
//!
//! ```rust
//! use breathwatch_types::{EnvironmentalReading, PollenLevel, TemperatureHistory, TemperatureRecord};
//! use chrono::NaiveDate;
//!
//! let reading = EnvironmentalReading::builder()
//!     .air_quality_index(42)
//!     .pollen_level(PollenLevel::Moderate)
//!     .humidity(45.0)
//!     .temperature(21.5)
//!     .build();
//! assert_eq!(reading.air_quality_index, 42);
//!
//! let mut history = TemperatureHistory::new();
//! let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! history.insert(TemperatureRecord::new(day, 18.0));
//! history.insert(TemperatureRecord::new(day, 23.0));
//! assert_eq!(history.len(), 1);
//! ```
//!
//! ## Schema Version
//!
//! The current schema version is **1**.

mod assessment;
mod profile;
mod reading;
mod temperature;
mod version;

pub use assessment::*;
pub use profile::*;
pub use reading::*;
pub use temperature::*;
pub use version::*;

/// Current schema version.
///
/// Increment this when making breaking changes to any persisted type.
pub const SCHEMA_VERSION: u32 = 1;
