// ABOUTME: Unified error handling for workout parsing, dispatch, and reporting
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible boundary in the workspace reports an [`AppError`] carrying a
//! stable [`ErrorCode`]. Callers branch on the code rather than on message
//! text, so the two dispatch failures (unknown workout kind and malformed
//! payload) stay distinguishable in tests and in the CLI.
//!
//! The calculation layer itself never fails: once a workout model has been
//! constructed, distance, speed, and calorie formulas are total functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Workout code is not one of the known kinds
    #[serde(rename = "UNKNOWN_WORKOUT_KIND")]
    UnknownWorkoutKind,
    /// Payload arity or field type does not match the workout kind
    #[serde(rename = "INVALID_PAYLOAD")]
    InvalidPayload,
    /// Configuration value could not be interpreted
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Input or output serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Input source could not be read
    #[serde(rename = "INPUT_UNAVAILABLE")]
    InputUnavailable,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutKind => "No such workout kind",
            Self::InvalidPayload => "Invalid workout data",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InputUnavailable => "Input could not be read",
        }
    }

    /// Stable machine-readable name, matching the serde representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutKind => "UNKNOWN_WORKOUT_KIND",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::InputUnavailable => "INPUT_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the workspace
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Workout code not in the known set
    #[must_use]
    pub fn unknown_workout_kind(code: impl AsRef<str>) -> Self {
        Self::new(
            ErrorCode::UnknownWorkoutKind,
            format!("'{}' is not a known workout code", code.as_ref()),
        )
    }

    /// Payload does not fit the selected workout kind
    #[must_use]
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPayload, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Input source could not be read
    #[must_use]
    pub fn input_unavailable(source: impl AsRef<str>, error: &std::io::Error) -> Self {
        Self::new(
            ErrorCode::InputUnavailable,
            format!("{}: {error}", source.as_ref()),
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
