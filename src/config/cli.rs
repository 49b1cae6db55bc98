//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::model::Position;

/// Execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    /// Simulate mode (default) - run the distribution simulator and report
    Simulate,
    /// Rotate mode - build a pool and drive the live rotation timer
    Rotate,
}

/// adrotor - Weighted advertisement distribution and rotation engine
#[derive(Parser, Debug)]
#[command(name = "adrotor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Execution mode: simulate or rotate
    #[arg(long, value_enum, default_value = "simulate")]
    pub mode: ExecutionMode,

    /// Advertisement catalog file (JSON array of advertisement records)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Vendor weight configuration file (TOML, `[weights]` table)
    ///
    /// When omitted, every vendor gets the default weight of 1.
    #[arg(short = 'w', long)]
    pub weights: Option<PathBuf>,

    /// Ad position to build the pool for
    #[arg(short = 'p', long, value_enum, default_value = "top-banner")]
    pub position: PositionArg,

    /// Reference date for the catalog's active window (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    // === Simulation Options ===
    /// Number of selection trials (100-100000)
    #[arg(short = 'n', long, default_value = "10000")]
    pub trials: u64,

    /// RNG seed for reproducible runs (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    // === Rotation Options ===
    /// Rotation interval between ticks (e.g. 20s, 500ms)
    #[arg(long, default_value = "20s")]
    pub interval: String,

    /// Number of rotation ticks to run before tearing down
    #[arg(long, default_value = "8")]
    pub ticks: u64,

    // === Output Options ===
    /// Report format printed to stdout
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// JSON report file path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// CSV report file path
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Dry run - validate configuration without executing
    #[arg(long)]
    pub dry_run: bool,
}

/// Ad position (CLI surface)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    /// Top banner (responsive mobile/desktop pairs)
    TopBanner,
    /// Left side banner
    LeftBanner,
    /// Right side banner
    RightBanner,
    /// In-feed placement
    Feed,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::TopBanner => Position::TopBanner,
            PositionArg::LeftBanner => Position::LeftBanner,
            PositionArg::RightBanner => Position::RightBanner,
            PositionArg::Feed => Position::Feed,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable table plus bar chart
    Text,
    /// JSON document
    Json,
    /// CSV rows
    Csv,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(crate::config::MIN_TRIALS..=crate::config::MAX_TRIALS).contains(&self.trials) {
            anyhow::bail!(
                "trials must be between {} and {}",
                crate::config::MIN_TRIALS,
                crate::config::MAX_TRIALS
            );
        }

        if self.ticks == 0 {
            anyhow::bail!("ticks must be at least 1");
        }

        if let Some(date) = &self.date {
            if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                anyhow::bail!("date must be in YYYY-MM-DD format, got '{}'", date);
            }
        }

        // Interval string is parsed (and rejected) during config build, but
        // catching an empty value here gives a friendlier message.
        if self.interval.trim().is_empty() {
            anyhow::bail!("interval must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("adrotor").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["ads.json"]);
        assert_eq!(cli.mode, ExecutionMode::Simulate);
        assert_eq!(cli.position, PositionArg::TopBanner);
        assert_eq!(cli.trials, 10000);
        assert_eq!(cli.interval, "20s");
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_trials_bounds() {
        let cli = parse(&["ads.json", "--trials", "50"]);
        assert!(cli.validate().is_err());

        let cli = parse(&["ads.json", "--trials", "200000"]);
        assert!(cli.validate().is_err());

        let cli = parse(&["ads.json", "--trials", "100000"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_bad_date_rejected() {
        let cli = parse(&["ads.json", "--date", "01/02/2026"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_position_conversion() {
        assert_eq!(Position::from(PositionArg::Feed), Position::Feed);
        assert_eq!(Position::from(PositionArg::TopBanner), Position::TopBanner);
    }
}
