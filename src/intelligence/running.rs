// ABOUTME: Running calorie formula on top of the step-based distance and speed defaults
// ABOUTME: calories = (18 x speed + 1.79) x weight / 1000 x duration x 60
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutMetrics;
use crate::constants::{running, units};
use crate::errors::AppResult;
use crate::models::{Running, SensorReadings};

impl WorkoutMetrics for Running {
    fn readings(&self) -> &SensorReadings {
        Self::readings(self)
    }

    fn display_name(&self) -> &'static str {
        "Running"
    }

    fn spent_calories_kcal(&self) -> AppResult<f64> {
        let readings = Self::readings(self);
        Ok((running::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()?
            + running::CALORIES_MEAN_SPEED_SHIFT)
            * readings.weight_kg()
            / units::M_IN_KM
            * readings.duration_hours()
            * units::MIN_IN_HOUR)
    }
}
