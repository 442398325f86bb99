// ABOUTME: Workout record types built from one package of raw sensor readings
// ABOUTME: Running, SportsWalking and Swimming records plus the tagged Workout enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Readings every workout carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl SensorReadings {
    /// Bundle the common readings
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Steps or strokes counted by the tracker
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    readings: SensorReadings,
}

impl Running {
    /// Positional field list, in package order
    pub const FIELDS: &'static [&'static str] = &["action_count", "duration_hours", "weight_kg"];

    /// Create a running record
    #[must_use]
    pub const fn new(readings: SensorReadings) -> Self {
        Self { readings }
    }

    /// Common readings
    #[must_use]
    pub const fn readings(&self) -> &SensorReadings {
        &self.readings
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    readings: SensorReadings,
    height_cm: f64,
}

impl SportsWalking {
    /// Positional field list, in package order
    pub const FIELDS: &'static [&'static str] = &[
        "action_count",
        "duration_hours",
        "weight_kg",
        "height_cm",
    ];

    /// Create a sports walking record
    #[must_use]
    pub const fn new(readings: SensorReadings, height_cm: f64) -> Self {
        Self {
            readings,
            height_cm,
        }
    }

    /// Common readings
    #[must_use]
    pub const fn readings(&self) -> &SensorReadings {
        &self.readings
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    readings: SensorReadings,
    pool_length_m: f64,
    pool_laps: f64,
}

impl Swimming {
    /// Positional field list, in package order
    pub const FIELDS: &'static [&'static str] = &[
        "action_count",
        "duration_hours",
        "weight_kg",
        "pool_length_m",
        "pool_laps",
    ];

    /// Create a swimming record
    #[must_use]
    pub const fn new(readings: SensorReadings, pool_length_m: f64, pool_laps: f64) -> Self {
        Self {
            readings,
            pool_length_m,
            pool_laps,
        }
    }

    /// Common readings
    #[must_use]
    pub const fn readings(&self) -> &SensorReadings {
        &self.readings
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Completed pool lengths
    #[must_use]
    pub const fn pool_laps(&self) -> f64 {
        self.pool_laps
    }
}

/// A decoded workout of any supported kind
///
/// Calculations are dispatched per variant through
/// [`WorkoutMetrics`](crate::intelligence::WorkoutMetrics).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}
