use breathwatch_types::EnvironmentalReading;

use super::ReadingSource;

/// A reading supplied up front, typically assembled from CLI flags.
///
/// Yields the reading on the first poll only.
#[derive(Debug, Clone)]
pub struct StaticSource {
    reading: Option<EnvironmentalReading>,
    description: String,
}

impl StaticSource {
    /// Create a source described as "command line".
    pub fn new(reading: EnvironmentalReading) -> Self {
        Self::with_description(reading, "command line")
    }

    /// Create a source with a custom description.
    pub fn with_description(reading: EnvironmentalReading, description: impl Into<String>) -> Self {
        Self {
            reading: Some(reading),
            description: description.into(),
        }
    }
}

impl ReadingSource for StaticSource {
    fn poll(&mut self) -> Option<EnvironmentalReading> {
        self.reading.take()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
