// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Dispatches raw workout packages to calorie models and formats the summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Computes distance, mean speed, and calories burned for running, sports
//! walking, and swimming workouts from raw sensor-style packages, and renders
//! a one-line summary per workout.
//!
//! ## Architecture
//!
//! - **dispatcher**: maps a workout code and a numeric payload to a calorie model
//! - **formatters**: renders a computed summary as text or JSON
//! - **report**: runs a set of packages end to end and collects the output
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! The calculation engine lives in `workout-intelligence`; shared errors and
//! models live in `workout-core`.
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_tracker::dispatcher::read_package;
//! use workout_tracker::formatters::SummaryFormatter;
//!
//! let model = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let line = SummaryFormatter::default().format(&model.summary());
//! assert!(line.starts_with("Workout type: Running; Duration: 1.000 h; Distance: 9.750 km;"));
//! # Ok::<(), workout_tracker::errors::AppError>(())
//! ```

/// Workout code and payload dispatch
pub mod dispatcher;

/// Summary formatting (text template and JSON)
pub mod formatters;

/// End-to-end processing of workout packages
pub mod report;

/// Environment-driven report configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Re-export of the unified error types
pub mod errors {
    pub use workout_core::errors::{AppError, AppResult, ErrorCode};
}

/// Re-export of the core data models
pub mod models {
    pub use workout_core::models::{CalorieResult, WorkoutKind};
}

/// Re-export of the calculation engine
pub mod intelligence {
    pub use workout_intelligence::{
        BaseMeasurements, CalorieModel, Running, SportsWalking, Swimming, TrainingCalculator,
    };
}
