//! Human-readable and JSON rendering of command results.

use std::fmt::Write as _;

use anyhow::Result;
use breathwatch_core::{TemperatureClassification, TemperatureSummary};
use breathwatch_types::{FactorDirection, HealthProfile, RiskLevel};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::app::AssessmentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serialize `value` as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Paint `text` with one of the band color names.
fn paint(text: &str, color: &str) -> ColoredString {
    match color {
        "red" => text.red(),
        "orange" => text.truecolor(255, 165, 0),
        "yellow" => text.yellow(),
        "green" => text.green(),
        "blue" => text.blue(),
        "purple" => text.purple(),
        _ => text.normal(),
    }
}

fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "green",
        RiskLevel::Moderate => "yellow",
        RiskLevel::High => "orange",
        RiskLevel::Severe => "red",
    }
}

fn direction_marker(direction: FactorDirection) -> ColoredString {
    match direction {
        FactorDirection::Negative => "▲".red(),
        FactorDirection::Neutral => "●".yellow(),
        FactorDirection::Positive => "▼".green(),
    }
}

/// Render an assessment as colored text.
pub fn render_assessment(report: &AssessmentReport) -> String {
    let assessment = &report.assessment;
    let mut out = String::new();

    let headline = format!("{} risk ({}/100)", assessment.level, assessment.score);
    let _ = writeln!(
        out,
        "{}",
        paint(&headline, level_color(assessment.level)).bold()
    );

    if let Some(source) = &report.source {
        let _ = writeln!(out, "Source: {}", source);
    }
    if let Some(error) = &report.source_error {
        let _ = writeln!(out, "{} {}", "Reading unavailable:".yellow(), error);
    }
    if let Some(reading) = &report.reading {
        let _ = writeln!(
            out,
            "Conditions: {}°C, {}% humidity, AQI {}, {} pollen",
            reading.temperature, reading.humidity, reading.air_quality_index, reading.pollen_level
        );
    }
    if report.profile.is_none() {
        let _ = writeln!(out, "{}", "No health profile applied".dimmed());
    }

    if !assessment.factors.is_empty() {
        let _ = writeln!(out, "\n{}", "Factors".bold());
        let width = assessment
            .factors
            .iter()
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(0);
        for factor in &assessment.factors {
            let _ = writeln!(
                out,
                "  {} {:<width$} {:>+4}  {}",
                direction_marker(factor.direction),
                factor.name,
                factor.points,
                factor.explanation,
                width = width
            );
        }
    }

    let _ = writeln!(out, "\n{}", "Recommendations".bold());
    for tip in &assessment.recommendations {
        let _ = writeln!(out, "  - {}", tip);
    }
    out
}

/// Render a single temperature classification.
pub fn render_classification(celsius: f64, classification: &TemperatureClassification) -> String {
    format!(
        "{}°C: {} - {}\n",
        celsius,
        paint(classification.level.label(), &classification.color).bold(),
        classification.message
    )
}

/// Render the temperature log with extremes and average.
pub fn render_temperature_summary(summary: &TemperatureSummary) -> String {
    let mut out = String::new();
    if summary.history.is_empty() {
        let _ = writeln!(out, "No temperatures recorded yet.");
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        format!("Last {} day(s)", summary.history.len()).bold()
    );
    for record in &summary.history {
        let _ = writeln!(out, "  {}  {:>6.1}°C", record.date, record.temperature);
    }

    if let Some(hot) = summary.extremes.hottest {
        let _ = writeln!(
            out,
            "Hottest: {:.1}°C on {}",
            hot.temperature, hot.date
        );
    }
    if let Some(cold) = summary.extremes.coldest {
        let _ = writeln!(
            out,
            "Coldest: {:.1}°C on {}",
            cold.temperature, cold.date
        );
    }
    if let Some(average) = summary.average {
        let _ = writeln!(out, "Average: {:.1}°C", average);
    }
    if let Some(latest) = &summary.latest {
        let _ = writeln!(
            out,
            "Latest: {} - {}",
            paint(latest.level.label(), &latest.color),
            latest.message
        );
    }
    out
}

/// Render the saved profile, or a note that none exists.
pub fn render_profile(profile: Option<&HealthProfile>) -> String {
    let Some(profile) = profile else {
        return "No health profile saved.\n".to_string();
    };

    let list = |items: Vec<&str>| {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "Asthma severity: {}", profile.asthma_severity);
    let _ = writeln!(
        out,
        "Triggers: {}",
        list(profile.triggers.iter().map(String::as_str).collect())
    );
    let _ = writeln!(
        out,
        "Controller medications: {}",
        list(
            profile
                .controller_medications
                .iter()
                .map(String::as_str)
                .collect()
        )
    );
    out
}
