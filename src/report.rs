// ABOUTME: End-to-end processing of workout packages into formatted summary lines
// ABOUTME: Rejected packages are collected alongside the output instead of stopping the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use workout_core::errors::{AppError, AppResult};

use crate::config::ReportConfig;
use crate::dispatcher::WorkoutPackage;
use crate::formatters::format_output;

/// A package that could not be turned into a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPackage {
    /// Position of the package in the input
    pub index: usize,
    /// Workout code as supplied
    pub workout_type: String,
    /// Reason for rejection
    pub error: AppError,
}

/// Output of a processing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    /// One formatted line per accepted package, in input order
    pub lines: Vec<String>,
    /// Packages that were rejected
    pub rejected: Vec<RejectedPackage>,
}

impl ReportOutcome {
    /// Whether every package produced a summary
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Process packages in order, formatting each accepted one
///
/// A rejected package does not prevent the rest from being processed.
///
/// # Errors
///
/// Returns an error only if formatting an accepted summary fails
pub fn process_packages(
    packages: &[WorkoutPackage],
    config: &ReportConfig,
) -> AppResult<ReportOutcome> {
    let formatter = config.formatter();
    let mut outcome = ReportOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(model) => {
                let line = format_output(&model.summary(), config.output_format, &formatter)?;
                outcome.lines.push(line);
            }
            Err(error) => outcome.rejected.push(RejectedPackage {
                index,
                workout_type: package.workout_type.clone(),
                error,
            }),
        }
    }

    info!(
        total = packages.len(),
        accepted = outcome.lines.len(),
        rejected = outcome.rejected.len(),
        "workout packages processed"
    );
    Ok(outcome)
}
