//! Daily temperature log with a fixed seven-day window.

use std::collections::VecDeque;

use chrono::NaiveDate;

/// Maximum number of daily records kept in a [`TemperatureHistory`].
pub const MAX_HISTORY_DAYS: usize = 7;

/// A single day's temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureRecord {
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl TemperatureRecord {
    /// Create a record for one calendar day.
    pub fn new(date: NaiveDate, temperature: f64) -> Self {
        Self { date, temperature }
    }
}

/// Hottest and coldest days in a history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremes {
    pub hottest: Option<TemperatureRecord>,
    pub coldest: Option<TemperatureRecord>,
}

/// Ordered log of daily temperatures, oldest first.
///
/// Holds at most [`MAX_HISTORY_DAYS`] records and at most one record per
/// date. Every constructor, including deserialization, goes through
/// [`insert`](Self::insert) so the invariant cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<TemperatureRecord>", into = "Vec<TemperatureRecord>")
)]
pub struct TemperatureHistory {
    records: VecDeque<TemperatureRecord>,
}

impl TemperatureHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a day's temperature.
    ///
    /// An existing record for the same date is removed first, so a repeated
    /// date moves to the newest position with the new value. Once the log
    /// exceeds seven days the oldest records are evicted.
    pub fn insert(&mut self, record: TemperatureRecord) {
        self.records.retain(|r| r.date != record.date);
        self.records.push_back(record);
        while self.records.len() > MAX_HISTORY_DAYS {
            self.records.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TemperatureRecord> {
        self.records.iter()
    }

    /// The most recently inserted record.
    pub fn latest(&self) -> Option<&TemperatureRecord> {
        self.records.back()
    }

    /// The record for `date`, if stored.
    pub fn get(&self, date: NaiveDate) -> Option<&TemperatureRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    /// Hottest and coldest records; the earliest wins a tie.
    pub fn extremes(&self) -> Extremes {
        let mut extremes = Extremes::default();

        for record in &self.records {
            match extremes.hottest {
                Some(h) if record.temperature <= h.temperature => {}
                _ => extremes.hottest = Some(*record),
            }
            match extremes.coldest {
                Some(c) if record.temperature >= c.temperature => {}
                _ => extremes.coldest = Some(*record),
            }
        }

        extremes
    }

    /// Mean temperature across the window, if any records exist.
    pub fn average(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.temperature).sum();
        Some(total / self.records.len() as f64)
    }
}

impl From<Vec<TemperatureRecord>> for TemperatureHistory {
    fn from(records: Vec<TemperatureRecord>) -> Self {
        let mut history = TemperatureHistory::new();
        for record in records {
            history.insert(record);
        }
        history
    }
}

impl From<TemperatureHistory> for Vec<TemperatureRecord> {
    fn from(history: TemperatureHistory) -> Self {
        history.records.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TemperatureHistory {
    type Item = &'a TemperatureRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, TemperatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
