//! Configuration module
//!
//! Handles CLI argument parsing, vendor weight files, and validation.

pub mod cli;
pub mod validator;
pub mod weights;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

use crate::model::Position;
use cli::{Cli, ReportFormat};
use weights::VendorWeights;

/// Lower bound on simulator trial counts
pub const MIN_TRIALS: u64 = 100;

/// Upper bound on simulator trial counts
pub const MAX_TRIALS: u64 = 100_000;

/// Default interval between rotation ticks
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(20);

/// Complete run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Position whose pool is built
    pub position: Position,
    /// Advertisement catalog file
    pub catalog_path: PathBuf,
    /// Vendor weight map
    pub weights: VendorWeights,
    /// Reference date for the catalog's active window
    pub reference_date: NaiveDate,
    pub simulation: SimulationConfig,
    pub rotation: RotationConfig,
    pub output: OutputConfig,
}

/// Simulator settings
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of selection trials
    pub trials: u64,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,
}

/// Rotation timer settings
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Interval between ticks
    pub interval: Duration,
    /// Ticks to run in rotate mode before teardown
    pub ticks: u64,
}

/// Report destinations
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: ReportFormat,
    pub json_output: Option<PathBuf>,
    pub csv_output: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from parsed CLI arguments
    ///
    /// Loads the vendor weight file if one was given and resolves the
    /// reference date (today when absent).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let weights = match &cli.weights {
            Some(path) => VendorWeights::from_toml_file(path)?,
            None => VendorWeights::default(),
        };

        let reference_date = match &cli.date {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid reference date '{}'", s))?,
            None => chrono::Local::now().date_naive(),
        };

        Ok(Self {
            position: cli.position.into(),
            catalog_path: cli.catalog.clone(),
            weights,
            reference_date,
            simulation: SimulationConfig {
                trials: cli.trials,
                seed: cli.seed,
            },
            rotation: RotationConfig {
                interval: parse_interval(&cli.interval)?,
                ticks: cli.ticks,
            },
            output: OutputConfig {
                format: cli.format,
                json_output: cli.json_output.clone(),
                csv_output: cli.csv_output.clone(),
            },
        })
    }
}

/// Parse an interval string like `20s`, `500ms`, or `2m`
pub fn parse_interval(s: &str) -> Result<Duration> {
    let s = s.trim();

    let (number, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => s.split_at(idx),
        None => (s, "s"), // bare number means seconds
    };

    let value: u64 = number
        .parse()
        .with_context(|| format!("invalid interval '{}'", s))?;

    let duration = match unit {
        "ms" => Duration::from_millis(value),
        "s" => Duration::from_secs(value),
        "m" => Duration::from_secs(value * 60),
        other => anyhow::bail!("unknown interval unit '{}' in '{}'", other, s),
    };

    if duration.is_zero() {
        anyhow::bail!("interval must be greater than zero");
    }

    Ok(duration)
}
