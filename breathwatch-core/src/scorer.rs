//! Additive environmental risk scoring.
//!
//! Each condition that is out of its comfortable range adds a fixed number
//! of points; the profile adds severity and trigger points and credits
//! controller medication. The sum is clamped to `[0, 100]` and mapped to a
//! [`RiskLevel`].
//!
//! | Factor                 | Points                        |
//! |------------------------|-------------------------------|
//! | AQI                    | 0 / +10 / +20 / +30 by band   |
//! | Pollen                 | +10 moderate, +25 high        |
//! | Humidity outside 30-60 | +15                           |
//! | Temperature outside 10-30 | +10                        |
//! | Severity               | +10 moderate, +20 severe      |
//! | Trigger overlap        | +15 once                      |
//! | Controller medication  | -5                            |
//!
//! Factors that contribute nothing are omitted, with one exception: a reading
//! always yields exactly one air-quality factor, so a clean reading still
//! explains itself.

use breathwatch_types::{
    triggers, AsthmaSeverity, EnvironmentalReading, FactorDirection, HealthProfile,
    RiskAssessment, RiskFactor, RiskLevel, MAX_SCORE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bands::{aqi_bands, pollen_bands};
use crate::error::ScoringConfigError;

pub const FACTOR_AIR_QUALITY: &str = "Air Quality";
pub const FACTOR_POLLEN: &str = "Pollen";
pub const FACTOR_HUMIDITY: &str = "Humidity";
pub const FACTOR_TEMPERATURE: &str = "Temperature";
pub const FACTOR_SEVERITY: &str = "Asthma Severity";
pub const FACTOR_TRIGGERS: &str = "Trigger Match";
pub const FACTOR_MEDICATION: &str = "Controller Medication";

pub const TIP_POLLEN: &str =
    "Keep windows closed and limit outdoor time while pollen counts are high.";
pub const TIP_PEAK_FLOW: &str = "Monitor your peak flow readings twice daily.";
pub const TIP_RESCUE_INHALER: &str = "Carry your rescue inhaler at all times.";
pub const TIP_LOW_RISK: &str =
    "Conditions look favourable today. Keep following your asthma action plan.";
pub const TIP_MEDICATION: &str =
    "Take your controller medication as prescribed, even on days you feel well.";

/// An inclusive comfortable range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortRange {
    pub min: f64,
    pub max: f64,
}

impl ComfortRange {
    /// Create an inclusive range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the range, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Tunable constants for [`RiskScorer`].
///
/// Deployments can override any field through configuration; missing
/// fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub humidity_range: ComfortRange,
    pub humidity_points: i32,
    pub temperature_range: ComfortRange,
    pub temperature_points: i32,
    pub moderate_severity_points: i32,
    pub severe_severity_points: i32,
    pub trigger_points: i32,
    /// AQI strictly above this matches an "Air Pollution" trigger.
    pub air_pollution_trigger_above: i32,
    /// Temperature strictly below this matches a "Cold Air" trigger.
    pub cold_air_trigger_below: f64,
    /// Points removed when the patient takes a controller medication.
    pub medication_credit: i32,
    /// Pad with generic tips when fewer recommendations than this were produced.
    pub min_recommendations: usize,
    pub max_recommendations: usize,
    /// Scores strictly below this earn a positive-reinforcement tip.
    pub low_risk_below: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            humidity_range: ComfortRange::new(30.0, 60.0),
            humidity_points: 15,
            temperature_range: ComfortRange::new(10.0, 30.0),
            temperature_points: 10,
            moderate_severity_points: 10,
            severe_severity_points: 20,
            trigger_points: 15,
            air_pollution_trigger_above: 100,
            cold_air_trigger_below: 15.0,
            medication_credit: 5,
            min_recommendations: 3,
            max_recommendations: 5,
            low_risk_below: RiskLevel::MODERATE_FROM,
        }
    }
}

impl ScoringConfig {
    /// Check that the configuration describes a usable model.
    ///
    /// Point values must be non-negative (the medication credit is
    /// subtracted, not added), ranges must be finite with `min <= max` and
    /// at least one recommendation must be kept.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let points = [
            ("humidity_points", self.humidity_points),
            ("temperature_points", self.temperature_points),
            ("moderate_severity_points", self.moderate_severity_points),
            ("severe_severity_points", self.severe_severity_points),
            ("trigger_points", self.trigger_points),
            ("medication_credit", self.medication_credit),
        ];
        if let Some((field, value)) = points.into_iter().find(|(_, v)| *v < 0) {
            return Err(ScoringConfigError::NegativePoints { field, value });
        }

        for (field, range) in [
            ("humidity_range", self.humidity_range),
            ("temperature_range", self.temperature_range),
        ] {
            let ordered = range.min.is_finite() && range.max.is_finite() && range.min <= range.max;
            if !ordered {
                return Err(ScoringConfigError::InvalidRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if !self.cold_air_trigger_below.is_finite() {
            return Err(ScoringConfigError::NonFiniteThreshold(
                self.cold_air_trigger_below,
            ));
        }
        if self.max_recommendations == 0 {
            return Err(ScoringConfigError::NoRecommendations);
        }
        Ok(())
    }
}

/// Accumulates factors and recommendations while scoring.
#[derive(Debug, Default)]
struct Tally {
    factors: Vec<RiskFactor>,
    recommendations: Vec<String>,
}

impl Tally {
    fn factor(&mut self, name: &str, direction: FactorDirection, explanation: String, points: i32) {
        self.factors
            .push(RiskFactor::new(name, direction, explanation, points));
    }

    fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }

    /// Saturates rather than overflowing on extreme configured points.
    fn raw(&self) -> i32 {
        self.factors
            .iter()
            .fold(0i32, |acc, f| acc.saturating_add(f.points))
    }
}

/// Stateless risk scorer.
///
/// # Example
///
/// ```
/// use breathwatch_core::RiskScorer;
/// use breathwatch_types::{EnvironmentalReading, PollenLevel, RiskLevel};
///
/// let reading = EnvironmentalReading::builder()
///     .air_quality_index(165)
///     .pollen_level(PollenLevel::High)
///     .build();
///
/// let assessment = RiskScorer::default().assess(Some(&reading), None);
/// assert_eq!(assessment.score, 55);
/// assert_eq!(assessment.level, RiskLevel::High);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    /// Create a scorer with the given configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a reading against an optional profile.
    ///
    /// A missing reading omits every environmental factor (and trigger
    /// matching, which needs current conditions); a missing profile omits
    /// the profile factors. The result depends only on the inputs.
    pub fn assess(
        &self,
        reading: Option<&EnvironmentalReading>,
        profile: Option<&HealthProfile>,
    ) -> RiskAssessment {
        let reading = reading.map(|r| {
            if r.needs_clamping() {
                debug!(
                    aqi = r.air_quality_index,
                    humidity = r.humidity,
                    "clamping out-of-range reading"
                );
            }
            r.sanitized()
        });

        let mut tally = Tally::default();

        if let Some(reading) = &reading {
            self.score_environment(reading, profile, &mut tally);
        }
        if let Some(profile) = profile {
            self.score_profile(profile, reading.as_ref(), &mut tally);
        }

        let raw = tally.raw();
        let score = raw.clamp(0, i32::from(MAX_SCORE)) as u8;
        let level = RiskLevel::from_score(score);
        let recommendations = self.finish_recommendations(tally.recommendations, score);

        debug!(
            raw,
            score,
            level = %level,
            factors = tally.factors.len(),
            "risk assessed"
        );

        RiskAssessment {
            score,
            level,
            factors: tally.factors,
            recommendations,
        }
    }

    fn score_environment(
        &self,
        reading: &EnvironmentalReading,
        profile: Option<&HealthProfile>,
        tally: &mut Tally,
    ) {
        let cfg = &self.config;
        let aqi = reading.air_quality_index;

        if let Some(band) = aqi_bands().classify(f64::from(aqi)) {
            tally.factor(
                FACTOR_AIR_QUALITY,
                band.direction,
                format!("{} (AQI {}). {}", band.level, aqi, band.message),
                band.points,
            );
        }

        let pollen = reading.pollen_level;
        if let Some(band) = pollen_bands().classify(f64::from(pollen.ordinal())) {
            if band.points != 0 {
                let mut explanation = band.message.clone();
                if pollen.is_high() && profile.map_or(false, |p| p.has_trigger(triggers::POLLEN)) {
                    explanation.push_str(" Pollen is one of your listed triggers.");
                }
                tally.factor(FACTOR_POLLEN, band.direction, explanation, band.points);
            }
            if pollen.is_high() {
                tally.recommend(TIP_POLLEN);
            }
        }

        if let Some(humidity) = reading.humidity_percent() {
            let range = cfg.humidity_range;
            if !range.contains(humidity) {
                let (side, tip) = if humidity < range.min {
                    (
                        "below",
                        format!(
                            "Use a humidifier to keep indoor humidity between {}% and {}%.",
                            range.min, range.max
                        ),
                    )
                } else {
                    (
                        "above",
                        format!(
                            "Use a dehumidifier or air conditioning to keep indoor humidity between {}% and {}%.",
                            range.min, range.max
                        ),
                    )
                };
                tally.factor(
                    FACTOR_HUMIDITY,
                    FactorDirection::Negative,
                    format!(
                        "Humidity of {}% is {} the comfortable {}-{}% range.",
                        humidity, side, range.min, range.max
                    ),
                    cfg.humidity_points,
                );
                tally.recommend(tip);
            }
        }

        if let Some(temperature) = reading.temperature_celsius() {
            let range = cfg.temperature_range;
            if !range.contains(temperature) {
                let (side, tip) = if temperature < range.min {
                    (
                        "below",
                        "Cover your nose and mouth with a scarf when outdoors in cold air.",
                    )
                } else {
                    (
                        "above",
                        "Avoid strenuous outdoor activity during the hottest part of the day.",
                    )
                };
                tally.factor(
                    FACTOR_TEMPERATURE,
                    FactorDirection::Negative,
                    format!(
                        "Temperature of {}°C is {} the comfortable {}-{}°C range.",
                        temperature, side, range.min, range.max
                    ),
                    cfg.temperature_points,
                );
                tally.recommend(tip);
            }
        }
    }

    fn score_profile(
        &self,
        profile: &HealthProfile,
        reading: Option<&EnvironmentalReading>,
        tally: &mut Tally,
    ) {
        let cfg = &self.config;

        let severity_points = match profile.asthma_severity {
            AsthmaSeverity::Severe => cfg.severe_severity_points,
            AsthmaSeverity::Moderate => cfg.moderate_severity_points,
            AsthmaSeverity::Mild => 0,
        };
        if severity_points != 0 {
            let direction = match profile.asthma_severity {
                AsthmaSeverity::Severe => FactorDirection::Negative,
                _ => FactorDirection::Neutral,
            };
            tally.factor(
                FACTOR_SEVERITY,
                direction,
                format!(
                    "{} asthma increases sensitivity to environmental triggers.",
                    profile.asthma_severity
                ),
                severity_points,
            );
        }

        let matched = reading
            .map(|r| self.matched_triggers(profile, r))
            .unwrap_or_default();
        if !matched.is_empty() {
            let names = matched.join(", ");
            tally.factor(
                FACTOR_TRIGGERS,
                FactorDirection::Negative,
                format!("Current conditions match your triggers: {}.", names),
                cfg.trigger_points,
            );
            tally.recommend(format!(
                "Today's conditions match your known triggers ({}). Plan indoor activities and follow your action plan.",
                names
            ));
        }

        if profile.takes_controller_medication() {
            tally.factor(
                FACTOR_MEDICATION,
                FactorDirection::Positive,
                format!(
                    "Taking controller medication ({}) lowers your risk.",
                    profile.controller_medications.join(", ")
                ),
                cfg.medication_credit.saturating_neg(),
            );
            tally.recommend(TIP_MEDICATION);
        }
    }

    /// Trigger names from the profile that current conditions satisfy.
    fn matched_triggers(
        &self,
        profile: &HealthProfile,
        reading: &EnvironmentalReading,
    ) -> Vec<&'static str> {
        let cfg = &self.config;
        let mut matched = Vec::new();

        if reading.pollen_level.is_high() && profile.has_trigger(triggers::POLLEN) {
            matched.push(triggers::POLLEN);
        }
        if reading.air_quality_index > cfg.air_pollution_trigger_above
            && profile.has_trigger(triggers::AIR_POLLUTION)
        {
            matched.push(triggers::AIR_POLLUTION);
        }
        let cold = reading
            .temperature_celsius()
            .map_or(false, |t| t < cfg.cold_air_trigger_below);
        if cold && profile.has_trigger(triggers::COLD_AIR) {
            matched.push(triggers::COLD_AIR);
        }

        matched
    }

    fn finish_recommendations(&self, mut recommendations: Vec<String>, score: u8) -> Vec<String> {
        let cfg = &self.config;

        if recommendations.len() < cfg.min_recommendations {
            recommendations.push(TIP_PEAK_FLOW.to_string());
            recommendations.push(TIP_RESCUE_INHALER.to_string());
        }
        if score < cfg.low_risk_below {
            recommendations.push(TIP_LOW_RISK.to_string());
        }
        recommendations.truncate(cfg.max_recommendations);
        recommendations
    }
}

/// Score with the default configuration.
pub fn assess(
    reading: Option<&EnvironmentalReading>,
    profile: Option<&HealthProfile>,
) -> RiskAssessment {
    RiskScorer::default().assess(reading, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breathwatch_types::PollenLevel;

    fn reading(aqi: i32, pollen: PollenLevel, humidity: f64, temperature: f64) -> EnvironmentalReading {
        EnvironmentalReading::new(temperature, pollen, aqi, humidity)
    }

    fn calm() -> EnvironmentalReading {
        reading(30, PollenLevel::Low, 45.0, 20.0)
    }

    #[test]
    fn test_calm_reading_without_profile() {
        let assessment = assess(Some(&calm()), None);

        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.factors.len(), 1);

        let aqi = &assessment.factors[0];
        assert_eq!(aqi.name, FACTOR_AIR_QUALITY);
        assert_eq!(aqi.direction, FactorDirection::Positive);
        assert_eq!(aqi.points, 0);
        assert!(aqi.explanation.starts_with("Good"));

        assert_eq!(
            assessment.recommendations,
            vec![TIP_PEAK_FLOW, TIP_RESCUE_INHALER, TIP_LOW_RISK]
        );
    }

    #[test]
    fn test_aqi_bands_contribute_points() {
        let points = |aqi: i32| {
            assess(Some(&reading(aqi, PollenLevel::Low, 45.0, 20.0)), None)
                .factor(FACTOR_AIR_QUALITY)
                .map(|f| (f.points, f.direction))
        };

        assert_eq!(points(50), Some((0, FactorDirection::Positive)));
        assert_eq!(points(51), Some((10, FactorDirection::Neutral)));
        assert_eq!(points(100), Some((10, FactorDirection::Neutral)));
        assert_eq!(points(101), Some((20, FactorDirection::Negative)));
        assert_eq!(points(150), Some((20, FactorDirection::Negative)));
        assert_eq!(points(151), Some((30, FactorDirection::Negative)));
    }

    #[test]
    fn test_low_pollen_emits_no_factor() {
        let assessment = assess(Some(&calm()), None);
        assert!(assessment.factor(FACTOR_POLLEN).is_none());

        let moderate = assess(Some(&reading(30, PollenLevel::Moderate, 45.0, 20.0)), None);
        assert_eq!(moderate.factor(FACTOR_POLLEN).map(|f| f.points), Some(10));
        assert!(!moderate.recommendations.iter().any(|r| r == TIP_POLLEN));
    }

    #[test]
    fn test_high_pollen_adds_points_and_window_tip() {
        for level in [PollenLevel::High, PollenLevel::VeryHigh] {
            let assessment = assess(Some(&reading(30, level, 45.0, 20.0)), None);
            assert_eq!(assessment.score, 25);
            assert_eq!(assessment.level, RiskLevel::Moderate);
            assert_eq!(assessment.recommendations[0], TIP_POLLEN);
        }
    }

    #[test]
    fn test_humidity_range_is_inclusive() {
        for humidity in [30.0, 60.0] {
            let assessment = assess(Some(&reading(30, PollenLevel::Low, humidity, 20.0)), None);
            assert!(assessment.factor(FACTOR_HUMIDITY).is_none());
        }

        let dry = assess(Some(&reading(30, PollenLevel::Low, 29.9, 20.0)), None);
        assert_eq!(dry.score, 15);
        assert!(dry.recommendations[0].contains("humidifier"));

        let damp = assess(Some(&reading(30, PollenLevel::Low, 61.0, 20.0)), None);
        assert_eq!(damp.score, 15);
        assert!(damp.recommendations[0].contains("dehumidifier"));
    }

    #[test]
    fn test_temperature_range_is_inclusive() {
        for t in [10.0, 30.0] {
            let assessment = assess(Some(&reading(30, PollenLevel::Low, 45.0, t)), None);
            assert!(assessment.factor(FACTOR_TEMPERATURE).is_none());
        }

        let cold = assess(Some(&reading(30, PollenLevel::Low, 45.0, 9.5)), None);
        assert_eq!(cold.factor(FACTOR_TEMPERATURE).map(|f| f.points), Some(10));
        assert!(cold.recommendations[0].contains("scarf"));

        let hot = assess(Some(&reading(30, PollenLevel::Low, 45.0, 31.0)), None);
        assert_eq!(hot.score, 10);
    }

    #[test]
    fn test_reference_example() {
        let reading = reading(165, PollenLevel::High, 68.0, 22.0);
        let profile = HealthProfile::new(AsthmaSeverity::Severe)
            .with_trigger("Pollen")
            .with_medication("X");

        let assessment = assess(Some(&reading), Some(&profile));

        let points = |name: &str| assessment.factor(name).map(|f| f.points);
        assert_eq!(points(FACTOR_AIR_QUALITY), Some(30));
        assert_eq!(points(FACTOR_POLLEN), Some(25));
        assert_eq!(points(FACTOR_HUMIDITY), Some(15));
        assert_eq!(points(FACTOR_SEVERITY), Some(20));
        assert_eq!(points(FACTOR_TRIGGERS), Some(15));
        assert_eq!(points(FACTOR_MEDICATION), Some(-5));
        assert!(assessment.factor(FACTOR_TEMPERATURE).is_none());

        assert!(assessment
            .factor(FACTOR_POLLEN)
            .map_or(false, |f| f.explanation.contains("triggers")));

        assert_eq!(assessment.raw_points(), 100);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::Severe);
    }

    #[test]
    fn test_reference_example_at_comfortable_humidity() {
        let reading = reading(165, PollenLevel::High, 55.0, 22.0);
        let profile = HealthProfile::new(AsthmaSeverity::Severe)
            .with_trigger("Pollen")
            .with_medication("X");

        let assessment = assess(Some(&reading), Some(&profile));
        assert_eq!(assessment.score, 85);
        assert_eq!(assessment.level, RiskLevel::Severe);
        assert_eq!(
            assessment.factors.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec![
                FACTOR_AIR_QUALITY,
                FACTOR_POLLEN,
                FACTOR_SEVERITY,
                FACTOR_TRIGGERS,
                FACTOR_MEDICATION
            ]
        );
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let reading = reading(200, PollenLevel::VeryHigh, 80.0, 2.0);
        let profile = HealthProfile::new(AsthmaSeverity::Severe).with_trigger("Cold Air");

        let assessment = assess(Some(&reading), Some(&profile));
        assert_eq!(assessment.raw_points(), 115);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::Severe);
        assert_eq!(assessment.recommendations.len(), 4);
    }

    #[test]
    fn test_score_never_negative() {
        let profile = HealthProfile::new(AsthmaSeverity::Mild).with_medication("Budesonide");
        let assessment = assess(Some(&calm()), Some(&profile));

        assert_eq!(assessment.raw_points(), -5);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_triggers_counted_once() {
        let reading = reading(120, PollenLevel::High, 45.0, 5.0);
        let profile = HealthProfile::new(AsthmaSeverity::Mild)
            .with_trigger("Pollen")
            .with_trigger("Air Pollution")
            .with_trigger("Cold Air");

        let assessment = assess(Some(&reading), Some(&profile));
        let trigger_factors: Vec<_> = assessment
            .factors
            .iter()
            .filter(|f| f.name == FACTOR_TRIGGERS)
            .collect();

        assert_eq!(trigger_factors.len(), 1);
        assert_eq!(trigger_factors[0].points, 15);
        assert!(trigger_factors[0].explanation.contains("Pollen, Air Pollution, Cold Air"));
        assert!(assessment.factor(FACTOR_SEVERITY).is_none());
    }

    #[test]
    fn test_trigger_thresholds_are_strict() {
        let profile = HealthProfile::new(AsthmaSeverity::Mild)
            .with_trigger("Air Pollution")
            .with_trigger("Cold Air");

        let at_edges = assess(Some(&reading(100, PollenLevel::Low, 45.0, 15.0)), Some(&profile));
        assert!(at_edges.factor(FACTOR_TRIGGERS).is_none());

        let past_edges = assess(Some(&reading(101, PollenLevel::Low, 45.0, 14.9)), Some(&profile));
        assert!(past_edges.factor(FACTOR_TRIGGERS).is_some());
    }

    #[test]
    fn test_missing_reading_skips_environment_and_triggers() {
        let profile = HealthProfile::new(AsthmaSeverity::Moderate).with_trigger("Pollen");
        let assessment = assess(None, Some(&profile));

        assert_eq!(assessment.factors.len(), 1);
        assert_eq!(assessment.factors[0].name, FACTOR_SEVERITY);
        assert_eq!(assessment.factors[0].direction, FactorDirection::Neutral);
        assert_eq!(assessment.score, 10);
    }

    #[test]
    fn test_no_inputs() {
        let assessment = assess(None, None);
        assert_eq!(assessment.score, 0);
        assert!(assessment.factors.is_empty());
        assert_eq!(assessment.recommendations.len(), 3);
    }

    #[test]
    fn test_negative_aqi_is_clamped() {
        let assessment = assess(Some(&reading(-40, PollenLevel::Low, 45.0, 20.0)), None);
        let aqi = assessment.factor(FACTOR_AIR_QUALITY).unwrap();
        assert!(aqi.explanation.contains("AQI 0"));
        assert_eq!(assessment.score, 0);
    }

    #[test]
    fn test_non_finite_values_skip_their_factors() {
        let assessment = assess(Some(&reading(30, PollenLevel::Low, f64::NAN, f64::INFINITY)), None);
        assert!(assessment.factor(FACTOR_HUMIDITY).is_none());
        assert!(assessment.factor(FACTOR_TEMPERATURE).is_none());
        assert_eq!(assessment.score, 0);
    }

    #[test]
    fn test_recommendations_truncated_to_five_in_order() {
        let reading = reading(30, PollenLevel::High, 10.0, 0.0);
        let profile = HealthProfile::new(AsthmaSeverity::Mild)
            .with_trigger("Cold Air")
            .with_medication("Fluticasone");

        let assessment = assess(Some(&reading), Some(&profile));
        assert_eq!(assessment.recommendations.len(), 5);
        assert_eq!(assessment.recommendations[0], TIP_POLLEN);
        assert!(assessment.recommendations[1].contains("humidifier"));
        assert!(assessment.recommendations[2].contains("scarf"));
        assert!(assessment.recommendations[3].contains("Cold Air"));
        assert_eq!(assessment.recommendations[4], TIP_MEDICATION);
    }

    #[test]
    fn test_padding_happens_only_below_three() {
        let two = assess(Some(&reading(30, PollenLevel::High, 70.0, 20.0)), None);
        assert_eq!(two.recommendations.len(), 4);
        assert_eq!(two.recommendations[2], TIP_PEAK_FLOW);

        let three = assess(Some(&reading(30, PollenLevel::High, 70.0, 35.0)), None);
        assert_eq!(three.recommendations.len(), 3);
        assert!(!three.recommendations.iter().any(|r| r == TIP_PEAK_FLOW));
    }

    #[test]
    fn test_assess_is_idempotent() {
        let reading = reading(120, PollenLevel::Moderate, 20.0, 12.0);
        let profile = HealthProfile::new(AsthmaSeverity::Severe).with_trigger("Air Pollution");
        let scorer = RiskScorer::default();

        let first = scorer.assess(Some(&reading), Some(&profile));
        let second = scorer.assess(Some(&reading), Some(&profile));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_config_changes_ranges() {
        let config = ScoringConfig {
            humidity_range: ComfortRange::new(40.0, 50.0),
            max_recommendations: 2,
            ..ScoringConfig::default()
        };
        let scorer = RiskScorer::new(config);

        let assessment = scorer.assess(Some(&reading(30, PollenLevel::Low, 35.0, 20.0)), None);
        assert_eq!(assessment.score, 15);
        assert_eq!(assessment.recommendations.len(), 2);
    }

    #[test]
    fn test_config_deserializes_partial() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"trigger_points": 30, "humidity_range": {"min": 25, "max": 65}}"#)
                .unwrap();
        assert_eq!(config.trigger_points, 30);
        assert_eq!(config.humidity_range, ComfortRange::new(25.0, 65.0));
        assert_eq!(config.temperature_points, 10);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ScoringConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_negative_points() {
        let config = ScoringConfig {
            medication_credit: i32::MIN,
            ..ScoringConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ScoringConfigError::NegativePoints {
                field: "medication_credit",
                value: i32::MIN
            })
        );
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = ScoringConfig {
            humidity_range: ComfortRange::new(70.0, 30.0),
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringConfigError::InvalidRange { field: "humidity_range", .. })
        ));

        let config = ScoringConfig {
            temperature_range: ComfortRange::new(f64::NAN, 30.0),
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringConfigError::InvalidRange { field: "temperature_range", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_recommendations() {
        let config = ScoringConfig {
            max_recommendations: 0,
            ..ScoringConfig::default()
        };
        assert_eq!(config.validate(), Err(ScoringConfigError::NoRecommendations));

        let config = ScoringConfig {
            cold_air_trigger_below: f64::INFINITY,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringConfigError::NonFiniteThreshold(_))
        ));
    }

    #[test]
    fn test_extreme_points_saturate_instead_of_overflowing() {
        let config = ScoringConfig {
            humidity_points: i32::MAX,
            medication_credit: i32::MIN,
            ..ScoringConfig::default()
        };
        let scorer = RiskScorer::new(config);
        let profile = HealthProfile::new(AsthmaSeverity::Severe).with_medication("Budesonide");

        let assessment = scorer.assess(
            Some(&reading(165, PollenLevel::High, 90.0, 22.0)),
            Some(&profile),
        );
        assert_eq!(assessment.score, 100);
        assert_eq!(
            assessment.factor(FACTOR_MEDICATION).map(|f| f.points),
            Some(i32::MAX)
        );
        assert_eq!(assessment.raw_points(), i32::MAX);
    }
}
