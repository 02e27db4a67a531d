// ABOUTME: Unit tests for the running, walking, and swimming calorie models
// ABOUTME: Expected values are recomputed from the published formulas, not copied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp, clippy::suboptimal_flops)]
#![allow(missing_docs)]

use workout_tracker::intelligence::{
    CalorieModel, Running, SportsWalking, Swimming, TrainingCalculator,
};
use workout_tracker::models::WorkoutKind;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_running_distance_uses_step_length() {
    for steps in [0_u32, 1, 999, 15000, 42_195] {
        let run = Running::new(steps, 1.5, 70.0);
        assert_close(run.distance_km(), f64::from(steps) * 0.65 / 1000.0);
    }
}

#[test]
fn test_running_mean_speed_is_distance_over_duration() {
    let run = Running::new(12000, 0.75, 68.0);
    assert_close(run.mean_speed_kmh(), run.distance_km() / 0.75);
}

#[test]
fn test_running_calories() {
    let run = Running::new(15000, 1.0, 75.0);
    let speed = 15000.0 * 0.65 / 1000.0 / 1.0;
    let expected = (18.0 * speed + 1.79) * 75.0 / 1000.0 * (1.0 * 60.0);

    assert_close(run.distance_km(), 9.75);
    assert_close(run.mean_speed_kmh(), 9.75);
    assert_close(run.spent_calories(), expected);
}

#[test]
fn test_walking_calories() {
    let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0);
    let speed = 9000.0 * 0.65 / 1000.0 / 1.0;
    let height_m = 180.0 / 100.0;
    let expected =
        (0.035 * 75.0 + ((speed * 0.278_f64).powi(2) / height_m) * 0.029 * 75.0) * (1.0 * 60.0);

    assert_close(walk.distance_km(), 5.85);
    assert_close(walk.mean_speed_kmh(), 5.85);
    assert_close(walk.spent_calories(), expected);
}

#[test]
fn test_walking_taller_athlete_burns_less_at_same_speed() {
    let short = SportsWalking::new(9000, 1.0, 75.0, 160.0);
    let tall = SportsWalking::new(9000, 1.0, 75.0, 200.0);
    assert!(tall.spent_calories() < short.spent_calories());
}

#[test]
fn test_swimming_distance_uses_stroke_length() {
    let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
    assert_close(swim.distance_km(), 720.0 * 1.38 / 1000.0);
}

#[test]
fn test_swimming_speed_is_pool_based() {
    let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
    assert_close(swim.mean_speed_kmh(), 25.0 * 40.0 / 1000.0 / 1.0);

    // Stroke count has no influence on speed
    let other = Swimming::new(1, 1.0, 80.0, 25.0, 40);
    assert_eq!(swim.mean_speed_kmh(), other.mean_speed_kmh());
    assert!(swim.mean_speed_kmh() != swim.distance_km() / 1.0);
}

#[test]
fn test_swimming_calories() {
    let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
    assert_close(swim.spent_calories(), (1.0 + 1.1) * 2.0 * 80.0 * 1.0);
    assert_close(swim.spent_calories(), 336.0);
}

#[test]
fn test_swimming_half_hour() {
    let swim = Swimming::new(500, 0.5, 60.0, 50.0, 20);
    let speed = 50.0 * 20.0 / 1000.0 / 0.5;
    assert_close(swim.mean_speed_kmh(), 2.0);
    assert_close(swim.spent_calories(), (speed + 1.1) * 2.0 * 60.0 * 0.5);
}

#[test]
fn test_calorie_model_dispatches_to_variant() {
    let variants: [CalorieModel; 3] = [
        Running::new(15000, 1.0, 75.0).into(),
        SportsWalking::new(9000, 1.0, 75.0, 180.0).into(),
        Swimming::new(720, 1.0, 80.0, 25.0, 40).into(),
    ];
    let kinds: Vec<WorkoutKind> = variants.iter().map(CalorieModel::kind).collect();
    assert_eq!(
        kinds,
        vec![
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
            WorkoutKind::Swimming
        ]
    );

    let CalorieModel::Swimming(swim) = variants[2] else {
        panic!("expected swimming model");
    };
    assert_eq!(variants[2].mean_speed_kmh(), swim.mean_speed_kmh());
    assert_eq!(variants[2].spent_calories(), swim.spent_calories());
    assert_eq!(variants[2].measurements().weight_kg, 80.0);
}

#[test]
fn test_summary_collects_all_figures() {
    let model = CalorieModel::from(Running::new(15000, 1.0, 75.0));
    let summary = model.summary();

    assert_eq!(summary.workout_kind, WorkoutKind::Running);
    assert_eq!(summary.duration_hours, 1.0);
    assert_eq!(summary.distance_km, model.distance_km());
    assert_eq!(summary.mean_speed_kmh, model.mean_speed_kmh());
    assert_eq!(summary.calories, model.spent_calories());
}

#[test]
fn test_calculations_are_deterministic() {
    let walk = SportsWalking::new(12345, 1.25, 81.3, 176.0);
    let first = walk.summary();
    let second = walk.summary();
    assert_eq!(first.calories.to_bits(), second.calories.to_bits());
    assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
    assert_eq!(first.mean_speed_kmh.to_bits(), second.mean_speed_kmh.to_bits());
}

#[test]
fn test_zero_actions_give_zero_distance() {
    let run = Running::new(0, 1.0, 75.0);
    assert_eq!(run.distance_km(), 0.0);
    assert_eq!(run.mean_speed_kmh(), 0.0);
    // Resting term remains
    assert_close(run.spent_calories(), 1.79 * 75.0 / 1000.0 * 60.0);
}
