// ABOUTME: Batch driver running dispatch, summarize and format over packages in order
// ABOUTME: Aborts on the first failing package or skips it, depending on the failure policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::dispatcher::Package;
use crate::errors::{AppError, AppResult};
use crate::formatters::{format_output, OutputFormat};
use crate::intelligence::WorkoutMetrics;

/// What to do when one package fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the batch and return the error
    #[default]
    Abort,
    /// Log the error, count the package as skipped and continue
    Skip,
}

impl FailurePolicy {
    /// Policy name as used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(AppError::config(format!(
                "unknown failure policy \"{other}\", expected abort or skip"
            ))),
        }
    }
}

/// Options controlling one batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    /// Output format for each summary line
    pub format: OutputFormat,
    /// Behavior on a failing package
    pub failure_policy: FailurePolicy,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Packages summarized and written
    pub processed: usize,
    /// Packages that failed under the skip policy
    pub skipped: usize,
}

/// Dispatch, summarize and render one package
///
/// # Errors
///
/// Propagates dispatch, calculation and formatting failures
pub fn process_package(package: &Package, format: OutputFormat) -> AppResult<String> {
    let workout = package.decode()?;
    let summary = workout.summarize()?;
    debug!(
        workout_type = %summary.workout_type,
        calories_kcal = summary.calories_kcal,
        "summarized workout"
    );
    format_output(&summary, format)
}

/// Process packages strictly in input order, writing one line per workout
///
/// # Errors
///
/// Under [`FailurePolicy::Abort`] returns the first package failure. Write
/// failures are returned under either policy.
pub fn run_batch<W: Write>(
    packages: &[Package],
    options: &DriverOptions,
    writer: &mut W,
) -> AppResult<BatchReport> {
    info!(
        packages = packages.len(),
        format = %options.format,
        failure_policy = %options.failure_policy,
        "processing workout batch"
    );

    let mut report = BatchReport::default();
    for (index, package) in packages.iter().enumerate() {
        match process_package(package, options.format) {
            Ok(line) => {
                writeln!(writer, "{line}")?;
                report.processed += 1;
            }
            Err(error) => match options.failure_policy {
                FailurePolicy::Abort => return Err(error),
                FailurePolicy::Skip => {
                    warn!(index, code = %package.code, error = %error, "skipping package");
                    report.skipped += 1;
                }
            },
        }
    }
    writer.flush()?;

    info!(
        processed = report.processed,
        skipped = report.skipped,
        "workout batch complete"
    );
    Ok(report)
}

/// Decode a JSON array of packages
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if the input is not a JSON array of
/// `{"code": ..., "values": [...]}` objects
pub fn load_packages<R: Read>(reader: R) -> AppResult<Vec<Package>> {
    serde_json::from_reader(reader).map_err(|e| {
        AppError::invalid_format(format!("cannot decode packages: {e}")).with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::sample_packages;
    use crate::errors::ErrorCode;

    #[test]
    fn test_sample_batch_output() {
        let mut out = Vec::new();
        let report = run_batch(&sample_packages(), &DriverOptions::default(), &mut out).unwrap();
        assert_eq!(report, BatchReport { processed: 3, skipped: 0 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
                "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805.",
                "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252.",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_abort_stops_at_first_failure() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("FOO", vec![1.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let mut out = Vec::new();
        let error = run_batch(&packages, &DriverOptions::default(), &mut out).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutCode);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_skip_continues_past_failures() {
        let packages = vec![
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 0.0]),
            Package::new("RUN", vec![15000.0, 1.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let options = DriverOptions {
            failure_policy: FailurePolicy::Skip,
            ..DriverOptions::default()
        };
        let mut out = Vec::new();
        let report = run_batch(&packages, &options, &mut out).unwrap();
        assert_eq!(report, BatchReport { processed: 1, skipped: 2 });
        assert!(String::from_utf8(out).unwrap().starts_with("Training type: Running;"));
    }

    #[test]
    fn test_load_packages_rejects_bad_json() {
        let error = load_packages(&b"{\"code\": \"RUN\"}"[..]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("SKIP".parse::<FailurePolicy>().unwrap(), FailurePolicy::Skip);
        assert_eq!(
            "later".parse::<FailurePolicy>().unwrap_err().code,
            ErrorCode::ConfigInvalid
        );
    }
}
