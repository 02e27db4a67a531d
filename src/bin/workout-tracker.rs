// ABOUTME: Workout tracker CLI - prints distance, speed, and calorie summaries
// ABOUTME: Processes the sample packages, a single package, or a JSON batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print summaries for the built-in sample packages
//! workout-tracker demo
//!
//! # Summarize a single package
//! workout-tracker report RUN 15000,1,75
//!
//! # Russian labels, JSON batch from a file
//! workout-tracker --language ru batch --file packages.json
//!
//! # JSON output, batch from stdin
//! echo '[{"workout_type":"WLK","data":[9000,1,75,180]}]' | workout-tracker --format json batch
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use workout_tracker::{
    config::ReportConfig,
    dispatcher::{demo_packages, load_packages, parse_packages, WorkoutPackage},
    errors::AppError,
    formatters::{MessageLanguage, OutputFormat},
    logging::LoggingConfig,
    report::process_packages,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Workout distance, speed, and calorie summaries",
    long_about = "Computes distance, mean speed, and calories burned for running (RUN), \
                  sports walking (WLK), and swimming (SWM) workouts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: text or json (overrides WORKOUT_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Summary label language: en or ru (overrides WORKOUT_MESSAGE_LANGUAGE)
    #[arg(long, global = true)]
    language: Option<MessageLanguage>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the built-in sample packages
    Demo,

    /// Summarize a single package
    Report {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Comma-separated payload, e.g. 15000,1,75
        #[arg(allow_hyphen_values = true)]
        values: String,
    },

    /// Summarize a JSON array of packages
    Batch {
        /// File to read; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = ReportConfig::from_env()
        .map_err(AppError::from)?
        .with_overrides(cli.language, cli.format);

    let packages = match cli.command {
        Command::Demo => demo_packages(),
        Command::Report { code, values } => vec![WorkoutPackage::from_text(code, &values)],
        Command::Batch { file: Some(path) } => load_packages(&path)?,
        Command::Batch { file: None } => {
            let json = io::read_to_string(io::stdin())
                .map_err(|e| AppError::input_unavailable("stdin", &e))?;
            parse_packages(&json)?
        }
    };

    let outcome = process_packages(&packages, &config)?;
    for line in &outcome.lines {
        println!("{line}");
    }

    if !outcome.is_complete() {
        bail!(
            "{} of {} packages rejected",
            outcome.rejected.len(),
            packages.len()
        );
    }
    Ok(())
}
