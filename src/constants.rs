// ABOUTME: Unit conversions and per-workout formula coefficients
// ABOUTME: Grouped by workout so each calorie formula reads its own coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the workout calculations.

/// Unit conversions
pub mod units {
    /// Meters in one kilometer
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MIN_IN_HOUR: f64 = 60.0;

    /// Centimeters in one meter
    pub const CM_IN_M: f64 = 100.0;

    /// km/h to m/s factor, rounded to three decimals (1000 / 3600 = 0.2777...)
    pub const KMH_IN_MSEC: f64 = 0.278;
}

/// Step (or stroke) lengths used by the step-based distance formula
pub mod step_length {
    /// Running and walking step length in meters
    pub const STEP_M: f64 = 0.65;

    /// Swimming stroke length in meters
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Shift added to the scaled mean speed
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie coefficients
pub mod walking {
    /// Weight coefficient
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Speed-height coefficient
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients
pub mod swimming {
    /// Shift added to mean speed
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Environment variable names read by configuration
pub mod env_vars {
    /// Output format selector (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";

    /// Batch failure policy (`abort` or `skip`)
    pub const FAILURE_POLICY: &str = "WORKOUT_FAILURE_POLICY";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Binary / service name
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}
