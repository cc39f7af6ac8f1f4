//! # breathwatch
//!
//! Command-line front end for breathwatch: score today's asthma risk, keep a
//! seven-day temperature log and manage the patient's health profile.
//!
//! The scoring and storage logic lives in [`breathwatch_core`]; this crate
//! adds configuration, reading sources and output formatting.
//!
//! ## Usage
//!
//! ```bash
//! # Score a reading from a file against the saved profile
//! breathwatch assess --reading today.json
//!
//! # Or give the conditions directly
//! breathwatch assess --aqi 120 --pollen high --humidity 68 --temperature 8.5
//!
//! breathwatch temp record 8.5
//! breathwatch temp history --format json
//! breathwatch profile set --severity moderate --trigger Pollen --medication Budesonide
//! ```
//!
//! ## As a library
//!
//! ```
//! use breathwatch::{App, StaticSource};
//! use breathwatch_core::{MemoryStore, RiskScorer};
//! use breathwatch_types::{EnvironmentalReading, PollenLevel};
//!
//! let app = App::new(MemoryStore::new(), RiskScorer::default());
//! let mut source = StaticSource::new(EnvironmentalReading::new(22.0, PollenLevel::High, 40, 45.0));
//!
//! let report = app.assess(Some(&mut source), true);
//! assert_eq!(report.assessment.score, 25);
//! ```

pub mod app;
pub mod report;
pub mod settings;
pub mod source;

pub use app::{App, AssessmentReport};
pub use report::OutputFormat;
pub use settings::AppConfig;
pub use source::{FileSource, ReadingSource, StaticSource};
