//! Property-based tests for the risk scorer and temperature log.
//!
//! These tests verify invariants that should hold for all inputs:
//! - Scores stay within [0, 100] and the level always matches the score
//! - Comfortable readings without a profile score zero
//! - Recommendations never exceed five
//! - The temperature log never exceeds seven days or repeats a date

use breathwatch_core::{assess, MemoryStore, TemperatureTracker};
use breathwatch_types::{
    AsthmaSeverity, EnvironmentalReading, HealthProfile, PollenLevel, RiskLevel,
    MAX_HISTORY_DAYS,
};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;

fn pollen_level() -> impl Strategy<Value = PollenLevel> {
    prop::sample::select(PollenLevel::ALL.to_vec())
}

fn severity() -> impl Strategy<Value = AsthmaSeverity> {
    prop::sample::select(vec![
        AsthmaSeverity::Mild,
        AsthmaSeverity::Moderate,
        AsthmaSeverity::Severe,
    ])
}

fn reading() -> impl Strategy<Value = EnvironmentalReading> {
    (-60.0f64..60.0, pollen_level(), -100i32..600, -20.0f64..140.0).prop_map(
        |(temperature, pollen, aqi, humidity)| {
            EnvironmentalReading::new(temperature, pollen, aqi, humidity)
        },
    )
}

fn profile() -> impl Strategy<Value = HealthProfile> {
    (
        severity(),
        prop::sample::subsequence(vec!["Pollen", "Air Pollution", "Cold Air", "Dust"], 0..=4),
        prop::collection::vec("[A-Za-z]{1,12}", 0..3),
    )
        .prop_map(|(severity, triggers, medications)| {
            let mut profile = HealthProfile::new(severity);
            for trigger in triggers {
                profile = profile.with_trigger(trigger);
            }
            for medication in medications {
                profile = profile.with_medication(medication);
            }
            profile
        })
}

fn date_offset() -> impl Strategy<Value = NaiveDate> {
    (0u64..30).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset)
    })
}

proptest! {
    /// Property: the score is always clamped and the level agrees with it
    #[test]
    fn prop_score_bounded_and_level_consistent(
        reading in prop::option::of(reading()),
        profile in prop::option::of(profile())
    ) {
        let assessment = assess(reading.as_ref(), profile.as_ref());

        prop_assert!(assessment.score <= 100);
        prop_assert_eq!(assessment.level, RiskLevel::from_score(assessment.score));
        prop_assert_eq!(
            i32::from(assessment.score),
            assessment.raw_points().clamp(0, 100)
        );
    }

    /// Property: recommendations are capped at five and never empty
    #[test]
    fn prop_recommendations_capped(
        reading in prop::option::of(reading()),
        profile in prop::option::of(profile())
    ) {
        let assessment = assess(reading.as_ref(), profile.as_ref());
        prop_assert!(assessment.recommendations.len() <= 5);
        prop_assert!(!assessment.recommendations.is_empty());
    }

    /// Property: a reading inside every comfortable range scores zero and
    /// yields at most the single good-air factor
    #[test]
    fn prop_comfortable_reading_scores_zero(
        aqi in 0i32..=50,
        humidity in 30.0f64..=60.0,
        temperature in 10.0f64..=30.0
    ) {
        let reading = EnvironmentalReading::new(temperature, PollenLevel::Low, aqi, humidity);
        let assessment = assess(Some(&reading), None);

        prop_assert_eq!(assessment.score, 0);
        prop_assert_eq!(assessment.level, RiskLevel::Low);
        prop_assert!(assessment.factors.len() <= 1);
        prop_assert!(assessment.factors.iter().all(|f| f.points == 0));
    }

    /// Property: identical inputs give identical assessments
    #[test]
    fn prop_assess_is_pure(reading in reading(), profile in profile()) {
        let first = assess(Some(&reading), Some(&profile));
        let second = assess(Some(&reading), Some(&profile));
        prop_assert_eq!(first, second);
    }

    /// Property: the log holds at most seven unique dates, and the newest
    /// record is always the last one written
    #[test]
    fn prop_history_bounded_and_unique(
        writes in prop::collection::vec((date_offset(), -30.0f64..45.0), 1..40)
    ) {
        let tracker = TemperatureTracker::new(MemoryStore::new());
        for (date, temperature) in &writes {
            tracker.record_on(*date, *temperature).unwrap();
        }

        let history = tracker.history();
        prop_assert!(history.len() <= MAX_HISTORY_DAYS);

        let dates: HashSet<_> = history.iter().map(|r| r.date).collect();
        prop_assert_eq!(dates.len(), history.len());

        let (last_date, last_temperature) = writes[writes.len() - 1];
        let latest = history.latest().unwrap();
        prop_assert_eq!(latest.date, last_date);
        prop_assert_eq!(latest.temperature, last_temperature);
    }

    /// Property: extremes bracket every stored temperature
    #[test]
    fn prop_extremes_bracket_history(
        writes in prop::collection::vec((date_offset(), -30.0f64..45.0), 0..20)
    ) {
        let tracker = TemperatureTracker::new(MemoryStore::new());
        for (date, temperature) in &writes {
            tracker.record_on(*date, *temperature).unwrap();
        }

        let history = tracker.history();
        let extremes = history.extremes();
        match (extremes.hottest, extremes.coldest) {
            (Some(hot), Some(cold)) => {
                for record in &history {
                    prop_assert!(record.temperature <= hot.temperature);
                    prop_assert!(record.temperature >= cold.temperature);
                }
            }
            (None, None) => prop_assert!(history.is_empty()),
            _ => prop_assert!(false, "hottest and coldest must both be set or both be empty"),
        }
    }
}
