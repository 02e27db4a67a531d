// ABOUTME: Algorithm module for workout calculations
// ABOUTME: Provides enum-based dispatch over the running, walking, and swimming calorie models

//! Algorithm Selection Module
//!
//! Workout calculations use enum dispatch over a closed set of variants.
//! There is no standalone base model, so a calorie calculation can never be
//! requested from something that does not define one.

/// Calorie models for running, sports walking, and swimming
pub mod calories;

pub use calories::CalorieModel;
