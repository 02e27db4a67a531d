// ABOUTME: Core data models for workout statistics
// ABOUTME: Re-exports WorkoutKind and CalorieResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutKind`: the closed set of supported workouts and their input codes
//! - `CalorieResult`: distance, speed, and calorie figures computed for one workout

mod summary;
mod workout;

pub use summary::CalorieResult;
pub use workout::WorkoutKind;
