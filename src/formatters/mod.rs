// ABOUTME: Summary formatting for computed workout figures
// ABOUTME: Renders the fixed one-line text template (English or Russian) or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Summary Formatting
//!
//! The text template is fixed: field order is workout type, duration,
//! distance, mean speed, calories, and every number is printed with exactly
//! three decimal digits.
//!
//! ```text
//! Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 797.805.
//! ```

use std::fmt;
use std::str::FromStr;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::CalorieResult;

/// Language of the text summary labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLanguage {
    /// English labels
    #[default]
    English,
    /// Russian labels
    Russian,
}

impl MessageLanguage {
    /// Short language tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
}

impl fmt::Display for MessageLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            other => Err(AppError::config(format!(
                "Unknown message language: '{other}'. Valid options: en, ru"
            ))),
        }
    }
}

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One-line text summary
    #[default]
    Text,
    /// `CalorieResult` serialized as a single JSON object
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Renders a [`CalorieResult`] as the fixed one-line message
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter {
    language: MessageLanguage,
}

impl SummaryFormatter {
    /// Formatter for the given label language
    #[must_use]
    pub const fn new(language: MessageLanguage) -> Self {
        Self { language }
    }

    /// Label language in use
    #[must_use]
    pub const fn language(&self) -> MessageLanguage {
        self.language
    }

    /// Render the summary line
    #[must_use]
    pub fn format(&self, result: &CalorieResult) -> String {
        let CalorieResult {
            workout_kind,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        } = result;

        match self.language {
            MessageLanguage::English => format!(
                "Workout type: {workout_kind}; \
                 Duration: {duration_hours:.3} h; \
                 Distance: {distance_km:.3} km; \
                 Mean speed: {mean_speed_kmh:.3} km/h; \
                 Calories burned: {calories:.3}."
            ),
            MessageLanguage::Russian => format!(
                "Тип тренировки: {workout_kind}; \
                 Длительность: {duration_hours:.3} ч.; \
                 Дистанция: {distance_km:.3} км; \
                 Ср. скорость: {mean_speed_kmh:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn format_output(
    result: &CalorieResult,
    format: OutputFormat,
    formatter: &SummaryFormatter,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(formatter.format(result)),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}
