// ABOUTME: Renders computed workout summaries as fixed-template text or JSON lines
// ABOUTME: Every numeric field in the text template carries exactly three decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default, one human-readable line per workout
//! - **JSON**: One compact JSON object per workout (JSON Lines)

use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};
use crate::models::ComputedSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template text line (default)
    #[default]
    Text,
    /// Compact JSON object per line
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    /// Strict parse used for configuration; unknown names are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "unknown output format \"{other}\", expected text or json"
            ))),
        }
    }
}

/// Render the fixed-template summary line
#[must_use]
pub fn format_summary(summary: &ComputedSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
        summary.workout_type,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal,
    )
}

/// Render a summary in the requested format, without trailing newline
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn format_output(summary: &ComputedSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format_summary(summary)),
        OutputFormat::Json => serde_json::to_string(summary)
            .map_err(|e| AppError::serialization(e.to_string()).with_source(e)),
    }
}
