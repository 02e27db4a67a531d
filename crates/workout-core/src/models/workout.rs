// ABOUTME: Workout kind enumeration mapping input codes to calculation variants
// ABOUTME: Defines the RUN/WLK/SWM codes, display names, and expected payload layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Enumeration of supported workout kinds
///
/// Each kind is identified on input by a three-letter code and expects a
/// payload of a fixed length and field order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Running, code `RUN`
    Running,
    /// Sports walking, code `WLK`
    SportsWalking,
    /// Pool swimming, code `SWM`
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds, in input-code order `SWM`, `RUN`, `WLK`
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Resolve a workout code (`SWM`, `RUN`, `WLK`)
    ///
    /// Codes are matched exactly; `run` is not `RUN`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::UnknownWorkoutKind` for any other code
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(AppError::unknown_workout_kind(other)),
        }
    }

    /// Input code for this kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Name reported as the workout type in summaries
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Payload field names in the order they must be supplied
    #[must_use]
    pub const fn payload_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }

    /// Number of payload values this kind expects
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.payload_fields().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
