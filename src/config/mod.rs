// ABOUTME: Environment-driven report configuration (label language and output format)
// ABOUTME: Reads WORKOUT_* variables with defaults; command-line flags override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report configuration
//!
//! Configuration is environment-only:
//!
//! - `WORKOUT_MESSAGE_LANGUAGE`: `en` (default) or `ru`
//! - `WORKOUT_OUTPUT_FORMAT`: `text` (default) or `json`

use std::env;
use thiserror::Error;
use tracing::debug;
use workout_core::errors::AppError;

use crate::formatters::{MessageLanguage, OutputFormat, SummaryFormatter};

/// Environment variable selecting the summary label language
pub const MESSAGE_LANGUAGE_VAR: &str = "WORKOUT_MESSAGE_LANGUAGE";

/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_VAR: &str = "WORKOUT_OUTPUT_FORMAT";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set to a value outside the accepted set
    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue {
        /// Environment variable name
        variable: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Environment variable access error (e.g. not valid unicode)
    #[error("Environment variable error for {variable}: {source}")]
    EnvVar {
        /// Environment variable name
        variable: &'static str,
        /// Underlying error
        #[source]
        source: env::VarError,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}

/// Settings controlling how summaries are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Label language for text output
    pub language: MessageLanguage,
    /// Output format
    pub output_format: OutputFormat,
}

impl ReportConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but not valid unicode or not
    /// one of the accepted values
    pub fn from_env() -> Result<Self, ConfigError> {
        let language = read_var(MESSAGE_LANGUAGE_VAR)?.unwrap_or_default();
        let output_format = read_var(OUTPUT_FORMAT_VAR)?.unwrap_or_default();

        let config = Self {
            language,
            output_format,
        };
        debug!(language = %config.language, format = %config.output_format, "report configuration loaded");
        Ok(config)
    }

    /// Apply explicit overrides (e.g. from command-line flags)
    #[must_use]
    pub fn with_overrides(
        self,
        language: Option<MessageLanguage>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        Self {
            language: language.unwrap_or(self.language),
            output_format: output_format.unwrap_or(self.output_format),
        }
    }

    /// Text formatter for the configured language
    #[must_use]
    pub const fn formatter(&self) -> SummaryFormatter {
        SummaryFormatter::new(self.language)
    }
}

fn read_var<T>(variable: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr<Err = AppError>,
{
    match env::var(variable) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|e: AppError| ConfigError::InvalidValue {
                variable,
                reason: e.message,
            }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { variable, source }),
    }
}
