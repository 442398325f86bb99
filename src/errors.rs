// ABOUTME: Unified error type and error codes for workout dispatch, calculation and output
// ABOUTME: Every failure carries an ErrorCode so callers can branch on kind instead of text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! All fallible operations in the crate return [`AppResult`]. Errors are never
//! recovered locally: a failed package stops the batch unless the caller opted
//! into skipping.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// Dispatcher received a code with no matching workout variant
    #[serde(rename = "UNKNOWN_WORKOUT_CODE")]
    UnknownWorkoutCode = 1000,
    /// Value count does not match the variant's field list
    #[serde(rename = "ARGUMENT_COUNT")]
    ArgumentCount = 1001,

    // Calculation (2000-2999)
    /// Division by zero while computing a metric
    #[serde(rename = "ARITHMETIC_ERROR")]
    ArithmeticError = 2000,
    /// Metric requested from the base contract without a concrete formula
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented = 2001,

    // Validation (3000-3999)
    /// A sensor reading is malformed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Package file is not valid JSON or has the wrong shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3001,

    // Configuration (6000-6999)
    /// Environment or flag value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal (9000-9999)
    /// Output could not be written
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Summary could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutCode => "Unknown workout code",
            Self::ArgumentCount => "Wrong number of sensor values for workout",
            Self::ArithmeticError => "Division by zero in workout calculation",
            Self::NotImplemented => "Calculation is not implemented for this workout",
            Self::InvalidInput => "The provided sensor reading is invalid",
            Self::InvalidFormat => "The package data format is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Workout code the failure relates to, if any
    pub workout_code: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the workout code the failure relates to
    #[must_use]
    pub fn with_workout_code(mut self, code: impl Into<String>) -> Self {
        self.context.workout_code = Some(code.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Workout code carried by the error, if any
    #[must_use]
    pub fn workout_code(&self) -> Option<&str> {
        self.context.workout_code.as_deref()
    }

    /// Dispatcher received an unrecognized code
    pub fn unknown_workout_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::UnknownWorkoutCode,
            format!("received unknown workout code \"{code}\""),
        )
        .with_workout_code(code)
    }

    /// Positional value count does not match the variant
    pub fn argument_count(code: impl Into<String>, expected: usize, received: usize) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::ArgumentCount,
            format!("workout \"{code}\" expects {expected} values, received {received}"),
        )
        .with_workout_code(code)
        .with_details(serde_json::json!({
            "expected": expected,
            "received": received,
        }))
    }

    /// Division by zero
    pub fn division_by_zero(divisor: &str) -> Self {
        Self::new(
            ErrorCode::ArithmeticError,
            format!("{divisor} must be nonzero"),
        )
    }

    /// Calculation missing from the base contract
    pub fn not_implemented(operation: &str) -> Self {
        Self::new(
            ErrorCode::NotImplemented,
            format!("{operation} has no default formula"),
        )
    }

    /// Invalid sensor reading
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed package data
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(format!("I/O failure: {error}")).with_source(error)
    }
}
