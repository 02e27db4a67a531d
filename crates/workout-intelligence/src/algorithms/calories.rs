// ABOUTME: Calorie models for running, sports walking, and swimming workouts
// ABOUTME: Computes distance, mean speed, and energy spent from raw workout measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::trace;
use workout_core::constants::units::{CM_PER_M, METERS_PER_KM, MINUTES_PER_HOUR};
use workout_core::models::{CalorieResult, WorkoutKind};

use crate::physiological_constants::{running, step_length, swimming, walking};

/// Measurements shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseMeasurements {
    /// Steps (running, walking) or strokes (swimming)
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete body weight in kilograms
    pub weight_kg: f64,
}

impl BaseMeasurements {
    /// Bundle the shared measurements
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    fn duration_minutes(&self) -> f64 {
        self.duration_hours * MINUTES_PER_HOUR
    }
}

/// Calculations common to every workout kind
///
/// `distance_km` and `mean_speed_kmh` have default implementations driven by
/// [`Self::STEP_LENGTH_M`]; each kind supplies its own calorie formula.
pub trait TrainingCalculator {
    /// Workout kind reported in summaries
    const KIND: WorkoutKind;

    /// Distance covered by one action, in meters
    const STEP_LENGTH_M: f64;

    /// Shared measurements
    fn measurements(&self) -> &BaseMeasurements;

    /// Energy spent in kilocalories
    fn spent_calories(&self) -> f64;

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.measurements().action_count) * Self::STEP_LENGTH_M / METERS_PER_KM
    }

    /// Mean speed over the whole workout in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.measurements().duration_hours
    }

    /// Assemble the summary; every figure is recomputed on each call
    fn summary(&self) -> CalorieResult {
        CalorieResult {
            workout_kind: Self::KIND,
            duration_hours: self.measurements().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Shared measurements
    pub base: BaseMeasurements,
}

impl Running {
    /// Build a running workout
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: BaseMeasurements::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl TrainingCalculator for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;
    const STEP_LENGTH_M: f64 = step_length::STEP_M;

    fn measurements(&self) -> &BaseMeasurements {
        &self.base
    }

    // (18 * speed + 1.79) * weight / 1000 * minutes
    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> f64 {
        (running::MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + running::MEAN_SPEED_SHIFT)
            * self.base.weight_kg
            / METERS_PER_KM
            * self.base.duration_minutes()
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Shared measurements
    pub base: BaseMeasurements,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    /// Build a sports walking workout
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: BaseMeasurements::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl TrainingCalculator for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;
    const STEP_LENGTH_M: f64 = step_length::STEP_M;

    fn measurements(&self) -> &BaseMeasurements {
        &self.base
    }

    // (0.035 * weight + ((speed * 0.278)^2 / height_m) * 0.029 * weight) * minutes
    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> f64 {
        let height_m = self.height_cm / CM_PER_M;
        let speed_msec = self.mean_speed_kmh() * walking::KMH_IN_MSEC;
        (walking::WEIGHT_MULTIPLIER * self.base.weight_kg
            + speed_msec.powi(2) / height_m
                * walking::SPEED_HEIGHT_MULTIPLIER
                * self.base.weight_kg)
            * self.base.duration_minutes()
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Shared measurements
    pub base: BaseMeasurements,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_lap_count: u32,
}

impl Swimming {
    /// Build a swimming workout
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Self {
        Self {
            base: BaseMeasurements::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_lap_count,
        }
    }
}

impl TrainingCalculator for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const STEP_LENGTH_M: f64 = step_length::STROKE_M;

    fn measurements(&self) -> &BaseMeasurements {
        &self.base
    }

    // Pool based, independent of the stroke distance.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count)
            / METERS_PER_KM
            / self.base.duration_hours
    }

    // (speed + 1.1) * 2 * weight * hours
    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::MEAN_SPEED_SHIFT)
            * swimming::SPEED_MULTIPLIER
            * self.base.weight_kg
            * self.base.duration_hours
    }
}

/// Calorie model for one workout
///
/// Closed over the supported kinds; build one through the dispatcher or
/// directly from a variant via `From`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalorieModel {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl CalorieModel {
    /// Workout kind of this model
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => Running::KIND,
            Self::SportsWalking(_) => SportsWalking::KIND,
            Self::Swimming(_) => Swimming::KIND,
        }
    }

    /// Shared measurements
    #[must_use]
    pub const fn measurements(&self) -> &BaseMeasurements {
        match self {
            Self::Running(w) => &w.base,
            Self::SportsWalking(w) => &w.base,
            Self::Swimming(w) => &w.base,
        }
    }

    /// Distance covered in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance_km(),
            Self::SportsWalking(w) => w.distance_km(),
            Self::Swimming(w) => w.distance_km(),
        }
    }

    /// Mean speed over the whole workout in km/h
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed_kmh(),
            Self::SportsWalking(w) => w.mean_speed_kmh(),
            Self::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Energy spent in kilocalories
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::SportsWalking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    /// Compute the full summary for this workout
    #[must_use]
    pub fn summary(&self) -> CalorieResult {
        let result = match self {
            Self::Running(w) => w.summary(),
            Self::SportsWalking(w) => w.summary(),
            Self::Swimming(w) => w.summary(),
        };
        trace!(
            kind = %result.workout_kind,
            distance_km = result.distance_km,
            mean_speed_kmh = result.mean_speed_kmh,
            calories = result.calories,
            "computed workout summary"
        );
        result
    }
}

impl From<Running> for CalorieModel {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for CalorieModel {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for CalorieModel {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}
