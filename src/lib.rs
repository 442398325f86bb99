// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Turns raw sensor packages into distance, speed and calorie summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Computes distance, mean speed and spent calories for running, sports
//! walking and swimming workouts from raw tracker packages, and renders one
//! summary line per workout.
//!
//! ## Pipeline
//!
//! - **Dispatcher**: workout code + flat values -> [`models::Workout`]
//! - **Intelligence**: per-variant distance, speed and calorie formulas
//! - **Formatters**: [`models::ComputedSummary`] -> text or JSON line
//! - **Driver**: runs the pipeline over a batch in input order
//!
//! ```rust
//! use workout_tracker::dispatcher::read_package;
//! use workout_tracker::formatters::format_summary;
//! use workout_tracker::intelligence::WorkoutMetrics;
//!
//! # fn main() -> workout_tracker::errors::AppResult<()> {
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let line = format_summary(&workout.summarize()?);
//! assert!(line.starts_with("Training type: Running; Duration: 1.000 h.;"));
//! # Ok(())
//! # }
//! ```

/// Environment configuration with command-line overrides
pub mod config;

/// Unit conversions and formula coefficients
pub mod constants;

/// Workout code dispatch and package decoding
pub mod dispatcher;

/// Batch processing of packages
pub mod driver;

/// Unified error handling with error codes
pub mod errors;

/// Summary rendering (text template, JSON lines)
pub mod formatters;

/// Distance, speed and calorie calculations
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

/// Workout records and computed summaries
pub mod models;
