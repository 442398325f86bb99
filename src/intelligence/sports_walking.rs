// ABOUTME: Sports walking calorie formula using weight, height and mean speed in m/s
// ABOUTME: Mean speed comes from the shared step-based default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{checked_div, WorkoutMetrics};
use crate::constants::{units, walking};
use crate::errors::AppResult;
use crate::models::{SensorReadings, SportsWalking};

impl WorkoutMetrics for SportsWalking {
    fn readings(&self) -> &SensorReadings {
        Self::readings(self)
    }

    fn display_name(&self) -> &'static str {
        "SportsWalking"
    }

    /// `(0.035 x weight + (speed_ms^2 / height_m) x 0.029 x weight) x duration_min`
    fn spent_calories_kcal(&self) -> AppResult<f64> {
        let readings = Self::readings(self);
        let speed_ms = self.mean_speed_kmh()? * units::KMH_IN_MSEC;
        let height_m = self.height_cm() / units::CM_IN_M;
        let speed_height_ratio = checked_div(speed_ms.powi(2), height_m, "height_cm")?;

        Ok((walking::CALORIES_WEIGHT_MULTIPLIER * readings.weight_kg()
            + speed_height_ratio * (walking::CALORIES_SPEED_HEIGHT_MULTIPLIER * readings.weight_kg()))
            * (readings.duration_hours() * units::MIN_IN_HOUR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_sample_walk() {
        let walk = SportsWalking::new(SensorReadings::new(9000, 1.0, 75.0), 180.0);
        let summary = walk.summarize().unwrap();
        assert_eq!(summary.workout_type, "SportsWalking");
        assert!((summary.distance_km - 5.85).abs() < 1e-9);
        assert!((summary.mean_speed_kmh - 5.85).abs() < 1e-9);

        let speed = 5.85;
        let expected =
            (0.035 * 75.0 + ((speed * 0.278_f64).powi(2) / (180.0 / 100.0)) * 0.029 * 75.0) * 60.0;
        assert!((summary.calories_kcal - expected).abs() < 1e-6);
        assert!((summary.calories_kcal - 349.252).abs() < 1e-3);
    }

    #[test]
    fn test_zero_height_is_arithmetic_error() {
        let walk = SportsWalking::new(SensorReadings::new(9000, 1.0, 75.0), 0.0);
        let error = walk.spent_calories_kcal().unwrap_err();
        assert_eq!(error.code, ErrorCode::ArithmeticError);
        assert!(error.message.contains("height_cm"));
    }

    #[test]
    fn test_zero_duration_fails_before_height() {
        let walk = SportsWalking::new(SensorReadings::new(9000, 0.0, 75.0), 180.0);
        let error = walk.summarize().unwrap_err();
        assert_eq!(error.code, ErrorCode::ArithmeticError);
        assert!(error.message.contains("duration_hours"));
    }
}
