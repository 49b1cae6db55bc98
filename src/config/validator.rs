//! Configuration validation
//!
//! Cross-field checks that run after the configuration is fully built,
//! regardless of whether it came from the CLI or was constructed in code.

use anyhow::Result;

use crate::config::{Config, MAX_TRIALS, MIN_TRIALS};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if !(MIN_TRIALS..=MAX_TRIALS).contains(&config.simulation.trials) {
        anyhow::bail!(
            "trials must be between {} and {}, got {}",
            MIN_TRIALS,
            MAX_TRIALS,
            config.simulation.trials
        );
    }

    if config.rotation.interval.is_zero() {
        anyhow::bail!("rotation interval must be greater than zero");
    }

    if config.rotation.ticks == 0 {
        anyhow::bail!("rotation ticks must be at least 1");
    }

    if config.catalog_path.as_os_str().is_empty() {
        anyhow::bail!("catalog path must not be empty");
    }

    Ok(())
}
