//! Seven-day temperature log backed by a [`KeyValueStore`].

use breathwatch_types::{Extremes, TemperatureHistory, TemperatureRecord};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bands::{temperature_bands, TemperatureLevel};
use crate::error::TrackerError;
use crate::store::{load_json, save_json, KeyValueStore, TEMPERATURE_HISTORY_KEY};

/// Qualitative band for a single temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureClassification {
    pub level: TemperatureLevel,
    pub message: String,
    pub color: String,
}

/// Classify a temperature in °C.
///
/// Bands are checked hottest first and each lower bound is inclusive:
/// 35 is Hot, 34.999 is Warm. Returns `None` only for NaN.
pub fn classify_temperature(celsius: f64) -> Option<TemperatureClassification> {
    temperature_bands()
        .classify(celsius)
        .map(|band| TemperatureClassification {
            level: band.level,
            message: band.message.clone(),
            color: band.color.clone(),
        })
}

/// Everything a dashboard shows about the recent temperature log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub history: TemperatureHistory,
    pub extremes: Extremes,
    pub average: Option<f64>,
    /// Classification of the most recent record.
    pub latest: Option<TemperatureClassification>,
}

/// Records daily temperatures and keeps the last seven days.
///
/// Each write loads the stored history, inserts the new record and replaces
/// the stored value wholesale. There must be a single writer per store key.
///
/// # Example
///
/// ```
/// use breathwatch_core::{MemoryStore, TemperatureTracker};
/// use chrono::NaiveDate;
///
/// let tracker = TemperatureTracker::new(MemoryStore::new());
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
///
/// let history = tracker.record_on(day, 4.5).unwrap();
/// assert_eq!(history.len(), 1);
/// assert_eq!(tracker.history(), history);
/// ```
#[derive(Debug)]
pub struct TemperatureTracker<S> {
    store: S,
}

impl<S: KeyValueStore> TemperatureTracker<S> {
    /// Create a tracker over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored history. Missing or malformed data yields an empty log.
    pub fn history(&self) -> TemperatureHistory {
        load_json(&self.store, TEMPERATURE_HISTORY_KEY).unwrap_or_default()
    }

    /// Record a temperature for `date` and persist the updated log.
    pub fn record_on(
        &self,
        date: NaiveDate,
        celsius: f64,
    ) -> Result<TemperatureHistory, TrackerError> {
        if !celsius.is_finite() {
            return Err(TrackerError::NonFinite(celsius));
        }

        let mut history = self.history();
        history.insert(TemperatureRecord::new(date, celsius));
        save_json(&self.store, TEMPERATURE_HISTORY_KEY, &history)?;

        debug!(%date, celsius, days = history.len(), "recorded temperature");
        Ok(history)
    }

    /// Record a temperature for today's local calendar date.
    pub fn record_today(&self, celsius: f64) -> Result<TemperatureHistory, TrackerError> {
        self.record_on(Local::now().date_naive(), celsius)
    }

    /// Load the history with its extremes, average and latest classification.
    pub fn summary(&self) -> TemperatureSummary {
        let history = self.history();
        let latest = history
            .latest()
            .and_then(|r| classify_temperature(r.temperature));

        TemperatureSummary {
            extremes: history.extremes(),
            average: history.average(),
            latest,
            history,
        }
    }

    /// Forget every recorded day.
    pub fn clear(&self) -> Result<(), TrackerError> {
        self.store.remove(TEMPERATURE_HISTORY_KEY)?;
        Ok(())
    }
}
