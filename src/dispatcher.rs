// ABOUTME: Workout package dispatcher mapping a workout code and payload to a calorie model
// ABOUTME: Validates payload arity and integer fields, reporting typed errors on mismatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Package Dispatch
//!
//! A package is a workout code (`SWM`, `RUN`, `WLK`) paired with a flat list
//! of numbers whose length and order depend on the code:
//!
//! | Code  | Payload                                                             |
//! |-------|---------------------------------------------------------------------|
//! | `RUN` | `action_count, duration_hours, weight_kg`                           |
//! | `WLK` | `action_count, duration_hours, weight_kg, height_cm`                |
//! | `SWM` | `action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count` |
//!
//! The dispatcher is the only fallible step between raw input and a summary.
//! Rejections are logged and returned as `AppError` so callers can tell an
//! unknown code apart from a malformed payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutKind;
use workout_intelligence::{CalorieModel, Running, SportsWalking, Swimming};

/// One raw workout package
///
/// Payload values are kept as raw JSON so that a mistyped value rejects only
/// its own package, with `InvalidPayload`, when the package is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Workout code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Payload values in the order the code expects
    pub data: Vec<Value>,
}

impl WorkoutPackage {
    /// Create a package from a code and numeric payload
    ///
    /// Non-finite numbers have no JSON representation and are stored as
    /// `null`, which [`Self::read`] rejects.
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into_iter().map(Value::from).collect(),
        }
    }

    /// Create a package from a code and a comma-separated payload such as
    /// `15000,1,75`
    ///
    /// Values that are not numbers are kept as text and rejected by
    /// [`Self::read`] after the code has been resolved. Blank input yields an
    /// empty payload, rejected on arity.
    #[must_use]
    pub fn from_text(workout_type: impl Into<String>, values: &str) -> Self {
        let data = if values.trim().is_empty() {
            Vec::new()
        } else {
            values
                .split(',')
                .map(str::trim)
                .map(|raw| {
                    raw.parse::<f64>()
                        .map_or_else(|_| Value::String(raw.to_owned()), Value::from)
                })
                .collect()
        };
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Build the calorie model for this package
    ///
    /// # Errors
    ///
    /// Same as [`read_package`]; additionally `ErrorCode::InvalidPayload` if
    /// a payload value is not a number. The code is resolved first.
    pub fn read(&self) -> AppResult<CalorieModel> {
        let outcome = WorkoutKind::from_code(&self.workout_type).and_then(|kind| {
            let data = numeric_payload(&self.data)?;
            build_model(kind, &data)
        });
        log_outcome(&self.workout_type, outcome)
    }
}

/// Construct the calorie model for a workout code and payload
///
/// # Errors
///
/// - `ErrorCode::UnknownWorkoutKind` if `workout_type` is not `SWM`, `RUN` or `WLK`
/// - `ErrorCode::InvalidPayload` if the payload length differs from the kind's
///   field count, or a count field is not a non-negative whole number
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<CalorieModel> {
    let outcome = WorkoutKind::from_code(workout_type).and_then(|kind| build_model(kind, data));
    log_outcome(workout_type, outcome)
}

fn log_outcome(workout_type: &str, outcome: AppResult<CalorieModel>) -> AppResult<CalorieModel> {
    match &outcome {
        Ok(model) => debug!(code = workout_type, kind = %model.kind(), "workout package accepted"),
        Err(e) => warn!(
            code = workout_type,
            error.code = %e.code,
            error.message = %e.message,
            "workout package rejected"
        ),
    }
    outcome
}

fn numeric_payload(values: &[Value]) -> AppResult<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_f64().ok_or_else(|| {
                AppError::invalid_payload(format!(
                    "value {value} at position {index} is not a number"
                ))
            })
        })
        .collect()
}

fn build_model(kind: WorkoutKind, data: &[f64]) -> AppResult<CalorieModel> {
    let model: CalorieModel = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Running::new(count_field(kind, 0, action)?, duration, weight).into()
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(count_field(kind, 0, action)?, duration, weight, height).into()
        }
        (WorkoutKind::Swimming, &[action, duration, weight, pool_length, laps]) => Swimming::new(
            count_field(kind, 0, action)?,
            duration,
            weight,
            pool_length,
            count_field(kind, 4, laps)?,
        )
        .into(),
        _ => {
            return Err(AppError::invalid_payload(format!(
                "{kind} expects {} values ({}), got {}",
                kind.arity(),
                kind.payload_fields().join(", "),
                data.len()
            )))
        }
    };
    Ok(model)
}

/// Convert a count field (steps, strokes, laps) to an integer
fn count_field(kind: WorkoutKind, position: usize, value: f64) -> AppResult<u32> {
    let whole = value.is_finite() && value.fract() == 0.0;
    if !whole || value < 0.0 || value > f64::from(u32::MAX) {
        let field = kind.payload_fields().get(position).copied().unwrap_or("count");
        return Err(AppError::invalid_payload(format!(
            "{kind} field '{field}' must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u32)
}

/// Parse a JSON array of packages
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if the text is not a JSON array of
/// `{"workout_type": ..., "data": [...]}` objects. Mistyped payload values are
/// not an error here; they reject their own package when it is read.
pub fn parse_packages(json: &str) -> AppResult<Vec<WorkoutPackage>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of packages from a file
///
/// # Errors
///
/// Returns `ErrorCode::InputUnavailable` if the file cannot be read, or the
/// errors of [`parse_packages`]
pub fn load_packages(path: &Path) -> AppResult<Vec<WorkoutPackage>> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::input_unavailable(path.display().to_string(), &e))?;
    parse_packages(&json)
}

/// Sample packages: one swim, one run, one walk
#[must_use]
pub fn demo_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
