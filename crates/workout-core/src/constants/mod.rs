// ABOUTME: Application constants organized by domain
// ABOUTME: Currently holds unit conversion factors used by calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants
pub mod units;
