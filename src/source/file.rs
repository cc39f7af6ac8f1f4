//! JSON file reading source.
//!
//! The file holds a single camelCase reading, as written by a weather
//! station bridge or by hand:
//!
//! ```json
//! { "temperature": 8.5, "pollenLevel": "High", "airQualityIndex": 120, "humidity": 68 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use breathwatch_types::EnvironmentalReading;
use tracing::debug;

use super::ReadingSource;

/// Reads an [`EnvironmentalReading`] from a JSON file on every poll.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
}

impl FileSource {
    /// Create a source for the reading file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
        }
    }

    /// Returns the path of the reading file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<EnvironmentalReading, String> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| format!("Read error: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Parse error: {}", e))
    }
}

impl ReadingSource for FileSource {
    fn poll(&mut self) -> Option<EnvironmentalReading> {
        match self.load() {
            Ok(reading) => {
                self.last_error = None;
                debug!(path = %self.path.display(), "read environmental reading");
                Some(reading)
            }
            Err(error) => {
                self.last_error = Some(error);
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
