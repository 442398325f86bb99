// ABOUTME: Core data models for workout records and their computed summaries
// ABOUTME: Re-exports record variants, the tagged Workout enum and ComputedSummary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Workout`: tagged enum over the supported workout records
//! - `SensorReadings`: readings common to every workout
//! - `ComputedSummary`: derived statistics for one workout
//!
//! Records are immutable once constructed; fields are reachable only through
//! accessors.

/// Computed summary produced from a workout record
pub mod summary;

/// Workout record types
pub mod workout;

pub use summary::ComputedSummary;
pub use workout::{Running, SensorReadings, SportsWalking, Swimming, Workout};
