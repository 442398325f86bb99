// ABOUTME: Configuration module for tracker runtime settings
// ABOUTME: Environment-only configuration with command-line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the workout tracker
//!
//! | Variable                 | Values          | Default |
//! |--------------------------|-----------------|---------|
//! | `WORKOUT_OUTPUT_FORMAT`  | `text`, `json`  | `text`  |
//! | `WORKOUT_FAILURE_POLICY` | `abort`, `skip` | `abort` |
//!
//! Logging is configured separately by [`crate::logging::LoggingConfig`].

/// Environment configuration
pub mod environment;

pub use environment::TrackerConfig;
