// ABOUTME: Computed workout summary produced once per workout record
// ABOUTME: Immutable bundle of type label, duration, distance, speed and calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Derived statistics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedSummary {
    /// Variant display name (`Running`, `SportsWalking`, `Swimming`)
    pub workout_type: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed over the whole duration in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}
