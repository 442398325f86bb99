// ABOUTME: Workout calculation contract shared by every workout variant
// ABOUTME: Step-based distance and speed defaults, per-variant calorie formulas, enum dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Calculations
//!
//! [`WorkoutMetrics`] is the capability set every workout exposes: distance,
//! mean speed and spent calories. Distance and mean speed have step-based
//! defaults; calories do not, and each variant supplies its own formula.
//!
//! [`Workout`] forwards the capability set to the wrapped variant with plain
//! enum dispatch.
//!
//! ```rust
//! use workout_tracker::intelligence::WorkoutMetrics;
//! use workout_tracker::models::{Running, SensorReadings};
//!
//! # fn example() -> workout_tracker::errors::AppResult<()> {
//! let run = Running::new(SensorReadings::new(15000, 1.0, 75.0));
//! let summary = run.summarize()?;
//! assert_eq!(summary.workout_type, "Running");
//! # Ok(())
//! # }
//! ```

/// Running calorie formula
pub mod running;

/// Sports walking calorie formula
pub mod sports_walking;

/// Swimming speed and calorie formulas
pub mod swimming;

use crate::constants::{step_length, units};
use crate::errors::{AppError, AppResult};
use crate::models::{ComputedSummary, SensorReadings, Workout};

/// Divide, failing instead of producing an infinite or NaN result
///
/// # Errors
///
/// Returns `ErrorCode::ArithmeticError` when `denominator` is zero
pub fn checked_div(numerator: f64, denominator: f64, divisor_name: &str) -> AppResult<f64> {
    if denominator == 0.0 {
        return Err(AppError::division_by_zero(divisor_name));
    }
    Ok(numerator / denominator)
}

/// Distance, speed and calorie calculations for one workout
pub trait WorkoutMetrics {
    /// Readings common to every workout
    fn readings(&self) -> &SensorReadings;

    /// Label used as `workout_type` in summaries
    fn display_name(&self) -> &'static str;

    /// Length of one step or stroke in meters
    fn step_length_m(&self) -> f64 {
        step_length::STEP_M
    }

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.readings().action_count()) * self.step_length_m() / units::M_IN_KM
    }

    /// Mean speed over the whole duration in km/h
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ArithmeticError` when the duration is zero
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        checked_div(
            self.distance_km(),
            self.readings().duration_hours(),
            "duration_hours",
        )
    }

    /// Energy spent in kilocalories
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::NotImplemented` unless the variant provides a formula,
    /// or `ErrorCode::ArithmeticError` when a divisor is zero
    fn spent_calories_kcal(&self) -> AppResult<f64> {
        Err(AppError::not_implemented("spent_calories_kcal"))
    }

    /// Compute the summary for this workout
    ///
    /// # Errors
    ///
    /// Propagates any failure from the speed or calorie calculations
    fn summarize(&self) -> AppResult<ComputedSummary> {
        Ok(ComputedSummary {
            workout_type: self.display_name().to_owned(),
            duration_hours: self.readings().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories_kcal: self.spent_calories_kcal()?,
        })
    }
}

impl WorkoutMetrics for Workout {
    fn readings(&self) -> &SensorReadings {
        match self {
            Self::Running(workout) => workout.readings(),
            Self::SportsWalking(workout) => workout.readings(),
            Self::Swimming(workout) => workout.readings(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Running(workout) => workout.display_name(),
            Self::SportsWalking(workout) => workout.display_name(),
            Self::Swimming(workout) => workout.display_name(),
        }
    }

    fn step_length_m(&self) -> f64 {
        match self {
            Self::Running(workout) => workout.step_length_m(),
            Self::SportsWalking(workout) => workout.step_length_m(),
            Self::Swimming(workout) => workout.step_length_m(),
        }
    }

    fn distance_km(&self) -> f64 {
        match self {
            Self::Running(workout) => workout.distance_km(),
            Self::SportsWalking(workout) => workout.distance_km(),
            Self::Swimming(workout) => workout.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> AppResult<f64> {
        match self {
            Self::Running(workout) => workout.mean_speed_kmh(),
            Self::SportsWalking(workout) => workout.mean_speed_kmh(),
            Self::Swimming(workout) => workout.mean_speed_kmh(),
        }
    }

    fn spent_calories_kcal(&self) -> AppResult<f64> {
        match self {
            Self::Running(workout) => workout.spent_calories_kcal(),
            Self::SportsWalking(workout) => workout.spent_calories_kcal(),
            Self::Swimming(workout) => workout.spent_calories_kcal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::{Running, Swimming};

    /// Workout that relies on every default, including the missing calorie formula
    struct BareWorkout {
        readings: SensorReadings,
    }

    impl WorkoutMetrics for BareWorkout {
        fn readings(&self) -> &SensorReadings {
            &self.readings
        }

        fn display_name(&self) -> &'static str {
            "BareWorkout"
        }
    }

    #[test]
    fn test_default_distance_uses_step_length() {
        let bare = BareWorkout {
            readings: SensorReadings::new(1000, 1.0, 70.0),
        };
        assert!((bare.distance_km() - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_default_calories_not_implemented() {
        let bare = BareWorkout {
            readings: SensorReadings::new(1000, 1.0, 70.0),
        };
        let error = bare.spent_calories_kcal().unwrap_err();
        assert_eq!(error.code, ErrorCode::NotImplemented);

        let error = bare.summarize().unwrap_err();
        assert_eq!(error.code, ErrorCode::NotImplemented);
    }

    #[test]
    fn test_zero_duration_is_arithmetic_error() {
        let run = Running::new(SensorReadings::new(1000, 0.0, 70.0));
        let error = run.mean_speed_kmh().unwrap_err();
        assert_eq!(error.code, ErrorCode::ArithmeticError);
    }

    #[test]
    fn test_checked_div() {
        assert!((checked_div(9.0, 3.0, "x").unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(
            checked_div(1.0, 0.0, "x").unwrap_err().code,
            ErrorCode::ArithmeticError
        );
    }

    #[test]
    fn test_enum_dispatch_matches_variant() {
        let swim = Swimming::new(SensorReadings::new(720, 1.0, 80.0), 25.0, 40.0);
        let workout = Workout::from(swim);
        assert_eq!(workout.display_name(), "Swimming");
        assert!((workout.step_length_m() - 1.38).abs() < 1e-12);
        assert_eq!(workout.summarize().unwrap(), swim.summarize().unwrap());
    }
}
