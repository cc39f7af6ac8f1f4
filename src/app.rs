//! Application state shared by every CLI command.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use breathwatch_core::{
    classify_temperature, FileStore, KeyValueStore, ProfileRepository, RiskScorer,
    TemperatureClassification, TemperatureSummary, TemperatureTracker,
};
use breathwatch_types::{EnvironmentalReading, HealthProfile, RiskAssessment, TemperatureHistory};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::settings::AppConfig;
use crate::source::ReadingSource;

/// An assessment together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Description of the reading source, if one was used.
    pub source: Option<String>,
    /// Why the source produced no reading, if it failed.
    pub source_error: Option<String>,
    pub reading: Option<EnvironmentalReading>,
    pub profile: Option<HealthProfile>,
    pub assessment: RiskAssessment,
}

/// Ties the scorer to persisted profile and temperature data.
#[derive(Debug)]
pub struct App<S> {
    scorer: RiskScorer,
    profiles: ProfileRepository<Arc<S>>,
    tracker: TemperatureTracker<Arc<S>>,
}

impl App<FileStore> {
    /// Open the file-backed store configured in `config`.
    pub fn open(config: &AppConfig) -> Self {
        Self::open_at(&config.data_dir, config)
    }

    fn open_at(data_dir: &Path, config: &AppConfig) -> Self {
        Self::new(FileStore::new(data_dir), RiskScorer::new(config.scoring.clone()))
    }
}

impl<S: KeyValueStore> App<S> {
    /// Create an app over `store`, scoring with `scorer`.
    pub fn new(store: S, scorer: RiskScorer) -> Self {
        let store = Arc::new(store);
        Self {
            scorer,
            profiles: ProfileRepository::new(Arc::clone(&store)),
            tracker: TemperatureTracker::new(store),
        }
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Score the next reading from `source` against the stored profile.
    ///
    /// A source that yields nothing is not an error: the assessment simply
    /// omits environmental factors and the failure is reported alongside.
    pub fn assess(
        &self,
        source: Option<&mut dyn ReadingSource>,
        use_profile: bool,
    ) -> AssessmentReport {
        let (description, reading, source_error) = match source {
            Some(source) => {
                let reading = source.poll();
                let error = source.error().map(str::to_string);
                if let Some(error) = &error {
                    warn!(source = source.description(), %error, "no reading available");
                }
                (Some(source.description().to_string()), reading, error)
            }
            None => (None, None, None),
        };

        let profile = if use_profile { self.profile() } else { None };
        let assessment = self.scorer.assess(reading.as_ref(), profile.as_ref());

        AssessmentReport {
            source: description,
            source_error,
            reading,
            profile,
            assessment,
        }
    }

    /// The saved profile, if any.
    pub fn profile(&self) -> Option<HealthProfile> {
        self.profiles.load()
    }

    /// Replace the saved profile.
    pub fn save_profile(&self, profile: &HealthProfile) -> Result<()> {
        self.profiles
            .save(profile)
            .context("Failed to save health profile")?;
        info!(severity = %profile.asthma_severity, "saved health profile");
        Ok(())
    }

    /// Delete the saved profile.
    pub fn clear_profile(&self) -> Result<()> {
        self.profiles
            .clear()
            .context("Failed to clear health profile")
    }

    /// Record a temperature for `date`, or for today when `None`.
    pub fn record_temperature(
        &self,
        date: Option<NaiveDate>,
        celsius: f64,
    ) -> Result<TemperatureHistory> {
        let history = match date {
            Some(date) => self.tracker.record_on(date, celsius),
            None => self.tracker.record_today(celsius),
        }
        .context("Failed to record temperature")?;
        Ok(history)
    }

    /// Summarize the stored temperature log.
    pub fn temperature_summary(&self) -> TemperatureSummary {
        self.tracker.summary()
    }

    /// Classify a temperature without recording it.
    pub fn classify(&self, celsius: f64) -> Option<TemperatureClassification> {
        classify_temperature(celsius)
    }
}
