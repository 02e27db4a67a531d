// ABOUTME: Computed workout summary carrying distance, speed, and calories
// ABOUTME: Derived on demand from a workout model and handed to the formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::WorkoutKind;

/// Figures computed for a single workout
///
/// Never cached: a model recomputes this every time it is asked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Kind of workout these figures describe
    pub workout_kind: WorkoutKind,
    /// Workout duration in hours, as supplied
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed over the whole workout in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories: f64,
}
