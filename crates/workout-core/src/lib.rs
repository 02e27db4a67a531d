// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, unit constants, and workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for workout
//! statistics. It is designed to change infrequently so the calculation
//! engine and the reporting layer can build on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion constants
//! - **models**: Workout kinds and computed summaries

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion constants
pub mod constants;

/// Core data models (`WorkoutKind`, `CalorieResult`)
pub mod models;
