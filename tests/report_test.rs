// ABOUTME: End-to-end tests running workout packages through dispatch and formatting
// ABOUTME: Verifies output order and that rejected packages do not stop processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::config::ReportConfig;
use workout_tracker::dispatcher::{demo_packages, parse_packages, WorkoutPackage};
use workout_tracker::errors::ErrorCode;
use workout_tracker::formatters::{MessageLanguage, OutputFormat};
use workout_tracker::report::process_packages;

#[test]
fn test_demo_packages_produce_three_lines() {
    let outcome = process_packages(&demo_packages(), &ReportConfig::default()).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(
        outcome.lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 797.805.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 349.252.",
        ]
    );
}

#[test]
fn test_rejected_packages_are_collected() {
    let packages = vec![
        WorkoutPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("RUN", vec![1.0, 2.0]),
    ];
    let outcome = process_packages(&packages, &ReportConfig::default()).unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.lines.len(), 1);
    assert!(outcome.lines[0].starts_with("Workout type: Running;"));

    assert_eq!(outcome.rejected.len(), 2);
    assert_eq!(outcome.rejected[0].index, 0);
    assert_eq!(outcome.rejected[0].workout_type, "XYZ");
    assert_eq!(outcome.rejected[0].error.code, ErrorCode::UnknownWorkoutKind);
    assert_eq!(outcome.rejected[1].index, 2);
    assert_eq!(outcome.rejected[1].error.code, ErrorCode::InvalidPayload);
}

#[test]
fn test_mistyped_batch_package_does_not_stop_others() {
    let packages = parse_packages(
        r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "RUN", "data": [15000, "1", 75]}
        ]"#,
    )
    .unwrap();
    let outcome = process_packages(&packages, &ReportConfig::default()).unwrap();

    assert_eq!(
        outcome.lines,
        vec![
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 797.805."
        ]
    );
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].index, 1);
    assert_eq!(outcome.rejected[0].error.code, ErrorCode::InvalidPayload);
}

#[test]
fn test_single_text_package_with_unknown_code() {
    let packages = vec![WorkoutPackage::from_text("XYZ", "abc")];
    let outcome = process_packages(&packages, &ReportConfig::default()).unwrap();

    assert!(outcome.lines.is_empty());
    assert_eq!(outcome.rejected[0].error.code, ErrorCode::UnknownWorkoutKind);
}

#[test]
fn test_json_output_in_russian_config_is_unaffected_by_language() {
    let config = ReportConfig {
        language: MessageLanguage::Russian,
        output_format: OutputFormat::Json,
    };
    let packages = vec![WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0])];
    let outcome = process_packages(&packages, &config).unwrap();

    let value: serde_json::Value = serde_json::from_str(&outcome.lines[0]).unwrap();
    assert_eq!(value["workout_kind"], "Swimming");
    assert_eq!(value["calories"], 336.0);
}

#[test]
fn test_empty_input() {
    let outcome = process_packages(&[], &ReportConfig::default()).unwrap();
    assert!(outcome.is_complete());
    assert!(outcome.lines.is_empty());
}
