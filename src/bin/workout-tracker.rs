// ABOUTME: Command-line entry point printing one summary line per workout package
// ABOUTME: Reads packages from a JSON file or stdin, or runs the built-in sample batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Summarize the built-in sample packages
//! workout-tracker
//!
//! # Summarize packages from a file as JSON lines, skipping bad entries
//! workout-tracker --input packages.json --format json --keep-going
//!
//! # Read packages from stdin
//! cat packages.json | workout-tracker --input -
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::error;
use workout_tracker::{
    config::TrackerConfig,
    dispatcher::{sample_packages, Package},
    driver::{load_packages, run_batch},
    formatters::OutputFormat,
    logging,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Distance, mean speed and calorie summaries from workout tracker packages"
)]
struct Cli {
    /// JSON file with an array of {"code", "values"} packages, `-` for stdin
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Output format (overrides WORKOUT_OUTPUT_FORMAT)
    #[arg(long, short, value_enum)]
    format: Option<FormatArg>,

    /// Skip failing packages instead of aborting the batch
    #[arg(long)]
    keep_going: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<Vec<Package>> {
    let Some(path) = input else {
        return Ok(sample_packages());
    };
    if path.as_os_str() == "-" {
        return Ok(load_packages(io::stdin().lock())?);
    }
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(load_packages(BufReader::new(file))?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_from_env(cli.verbose)?;

    let config = TrackerConfig::from_env()?
        .with_overrides(cli.format.map(OutputFormat::from), cli.keep_going);
    let packages = read_input(cli.input.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_batch(&packages, &config.driver_options(), &mut out).map_err(|e| {
        error!(code = ?e.code, error = %e, "workout batch failed");
        anyhow::Error::new(e)
    })?;
    Ok(())
}
