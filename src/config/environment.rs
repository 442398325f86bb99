// ABOUTME: Environment configuration for output format and batch failure policy
// ABOUTME: Values come from environment variables; command-line flags override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;

use tracing::debug;

use crate::constants::env_vars;
use crate::driver::{DriverOptions, FailurePolicy};
use crate::errors::AppResult;
use crate::formatters::OutputFormat;

/// Settings for one tracker run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    /// How summaries are rendered
    pub output_format: OutputFormat,
    /// What happens when a package fails
    pub failure_policy: FailurePolicy,
}

impl TrackerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an unknown value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an unknown value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = lookup(env_vars::OUTPUT_FORMAT)
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();
        let failure_policy = lookup(env_vars::FAILURE_POLICY)
            .map(|value| value.parse::<FailurePolicy>())
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            output_format,
            failure_policy,
        };
        debug!(?config, "loaded tracker configuration");
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment values
    #[must_use]
    pub fn with_overrides(
        mut self,
        output_format: Option<OutputFormat>,
        keep_going: bool,
    ) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        if keep_going {
            self.failure_policy = FailurePolicy::Skip;
        }
        self
    }

    /// Driver options for this configuration
    #[must_use]
    pub const fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            format: self.output_format,
            failure_policy: self.failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn test_values_parsed() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("WORKOUT_OUTPUT_FORMAT", "json"),
            ("WORKOUT_FAILURE_POLICY", "skip"),
        ]))
        .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let error =
            TrackerConfig::from_lookup(lookup_from(&[("WORKOUT_OUTPUT_FORMAT", "xml")])).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_flags_override_environment() {
        let config = TrackerConfig::default().with_overrides(Some(OutputFormat::Json), true);
        let options = config.driver_options();
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.failure_policy, FailurePolicy::Skip);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        env::set_var(env_vars::FAILURE_POLICY, "skip");
        let config = TrackerConfig::from_env();
        env::remove_var(env_vars::FAILURE_POLICY);
        assert_eq!(config.unwrap().failure_policy, FailurePolicy::Skip);
    }
}
