// ABOUTME: Swimming speed from pool geometry and the swimming calorie formula
// ABOUTME: Distance keeps the stroke-based default with a 1.38 m stroke length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{checked_div, WorkoutMetrics};
use crate::constants::{step_length, swimming, units};
use crate::errors::AppResult;
use crate::models::{SensorReadings, Swimming};

impl WorkoutMetrics for Swimming {
    fn readings(&self) -> &SensorReadings {
        Self::readings(self)
    }

    fn display_name(&self) -> &'static str {
        "Swimming"
    }

    fn step_length_m(&self) -> f64 {
        step_length::STROKE_M
    }

    /// Pool length x laps, independent of stroke count
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        checked_div(
            self.pool_length_m() * self.pool_laps() / units::M_IN_KM,
            Self::readings(self).duration_hours(),
            "duration_hours",
        )
    }

    fn spent_calories_kcal(&self) -> AppResult<f64> {
        let readings = Self::readings(self);
        Ok((self.mean_speed_kmh()? + swimming::CALORIES_MEAN_SPEED_SHIFT)
            * swimming::CALORIES_WEIGHT_MULTIPLIER
            * readings.weight_kg()
            * readings.duration_hours())
    }
}
