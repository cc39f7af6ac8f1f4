//! Where environmental readings come from.
//!
//! The scorer never fetches data itself. The CLI picks a [`ReadingSource`]
//! (a JSON file or values given on the command line) and polls it once per
//! assessment.

mod file;
mod static_source;

pub use file::FileSource;
pub use static_source::StaticSource;

use std::fmt::Debug;

use breathwatch_types::EnvironmentalReading;

/// A provider of environmental readings.
///
/// # Example
///
/// ```
/// use breathwatch::{FileSource, ReadingSource};
///
/// let mut source = FileSource::new("reading.json");
/// match source.poll() {
///     Some(reading) => println!("AQI {}", reading.air_quality_index),
///     None => println!("no reading: {:?}", source.error()),
/// }
/// ```
pub trait ReadingSource: Send + Debug {
    /// Poll for a new reading.
    ///
    /// Returns `None` when nothing new is available or the source failed;
    /// check [`ReadingSource::error`] to tell the two apart.
    fn poll(&mut self) -> Option<EnvironmentalReading>;

    /// Human-readable description, shown alongside the assessment.
    fn description(&self) -> &str;

    /// The error from the last poll, if it failed.
    fn error(&self) -> Option<&str>;
}
