// ABOUTME: Workout calculation engine for distance, mean speed, and calories
// ABOUTME: Provides the closed set of calorie models and their physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Intelligence
//!
//! Pure calculation layer. Every function here is deterministic and
//! infallible once a model has been built from valid measurements.

/// Calculation algorithms (calorie models per workout kind)
pub mod algorithms;

/// Coefficients used by the calorie formulas
pub mod physiological_constants;

pub use algorithms::calories::{
    BaseMeasurements, CalorieModel, Running, SportsWalking, Swimming, TrainingCalculator,
};
