// ABOUTME: Decodes sensor packages into workout records by workout code
// ABOUTME: Validates value counts and binds positional values to named fields in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Package Dispatcher
//!
//! A package is a workout code plus a flat list of sensor values. The code
//! selects the workout variant; the values are bound to the variant's fields
//! in declaration order after the count has been checked.
//!
//! | Code  | Workout         | Fields                                                         |
//! |-------|-----------------|----------------------------------------------------------------|
//! | `SWM` | `Swimming`      | action_count, duration_hours, weight_kg, pool_length_m, pool_laps |
//! | `RUN` | `Running`       | action_count, duration_hours, weight_kg                        |
//! | `WLK` | `SportsWalking` | action_count, duration_hours, weight_kg, height_cm             |

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Running, SensorReadings, SportsWalking, Swimming, Workout};

/// Short code identifying a workout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    /// Pool swimming
    #[serde(rename = "SWM")]
    Swimming,
    /// Running
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutCode {
    /// Every supported code
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Wire representation of the code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Positional field names the variant expects
    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Swimming => Swimming::FIELDS,
            Self::Running => Running::FIELDS,
            Self::SportsWalking => SportsWalking::FIELDS,
        }
    }

    /// Build the workout from positional values
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ArgumentCount` if the number of values does not match
    /// [`fields`](Self::fields), or `ErrorCode::InvalidInput` for a malformed
    /// action count
    pub fn decode(&self, values: &[f64]) -> AppResult<Workout> {
        let workout = match (self, values) {
            (Self::Swimming, &[action, duration_hours, weight_kg, pool_length_m, pool_laps]) => {
                let readings = self.readings(action, duration_hours, weight_kg)?;
                Swimming::new(readings, pool_length_m, pool_laps).into()
            }
            (Self::Running, &[action, duration_hours, weight_kg]) => {
                Running::new(self.readings(action, duration_hours, weight_kg)?).into()
            }
            (Self::SportsWalking, &[action, duration_hours, weight_kg, height_cm]) => {
                let readings = self.readings(action, duration_hours, weight_kg)?;
                SportsWalking::new(readings, height_cm).into()
            }
            _ => {
                return Err(AppError::argument_count(
                    self.as_str(),
                    self.fields().len(),
                    values.len(),
                ))
            }
        };
        Ok(workout)
    }

    fn readings(
        self,
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
    ) -> AppResult<SensorReadings> {
        Ok(SensorReadings::new(
            action_count(self, action)?,
            duration_hours,
            weight_kg,
        ))
    }
}

impl Display for WorkoutCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| AppError::unknown_workout_code(s))
    }
}

fn action_count(code: WorkoutCode, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(format!(
            "action_count must be a non-negative whole number, got {value}"
        ))
        .with_workout_code(code.as_str()));
    }
    Ok(value as u32)
}

/// Read one sensor package into a workout record
///
/// # Errors
///
/// - `ErrorCode::UnknownWorkoutCode` when `code` is not `SWM`, `RUN` or `WLK`
/// - `ErrorCode::ArgumentCount` when `values` has the wrong length
/// - `ErrorCode::InvalidInput` when the action count is not a whole number
pub fn read_package(code: &str, values: &[f64]) -> AppResult<Workout> {
    let workout_code: WorkoutCode = code.parse()?;
    let workout = workout_code.decode(values)?;
    debug!(code = %workout_code, values = values.len(), "decoded sensor package");
    Ok(workout)
}

/// One raw sensor package as received from the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code, kept as text so unknown codes surface from the dispatcher
    pub code: String,
    /// Positional sensor values
    pub values: Vec<f64>,
}

impl Package {
    /// Create a package
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    /// Decode this package into a workout record
    ///
    /// # Errors
    ///
    /// Same as [`read_package`]
    pub fn decode(&self) -> AppResult<Workout> {
        read_package(&self.code, &self.values)
    }
}

/// Built-in demonstration batch
#[must_use]
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
