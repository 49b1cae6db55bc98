//! Vendor weight configuration
//!
//! Weights arrive as a TOML `[weights]` table mapping vendor slugs to
//! positive integers:
//!
//! ```toml
//! [weights]
//! acme = 3
//! northpole = 1
//! retired-vendor = 0
//! ```
//!
//! Resolution rules, applied at pool-build time:
//!
//! - A missing entry means weight 1.
//! - An explicit 0 excludes the vendor from the pool.
//! - Anything that is not a non-negative integer (negative numbers, floats,
//!   strings, booleans) is coerced to 1. A bad config entry must never
//!   propagate: weights become array replication counts, and a corrupt count
//!   would corrupt the entire pool.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default weight for vendors absent from the configuration
pub const DEFAULT_WEIGHT: u64 = 1;

/// Mapping of vendor slug to display weight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorWeights {
    entries: BTreeMap<String, u64>,
}

impl VendorWeights {
    /// Build from already-sanitized entries (mainly for tests and embedding)
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Load a weight configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read weight file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse weight file: {}", path.display()))
    }

    /// Parse a weight configuration from a TOML string
    ///
    /// The document must contain a `[weights]` table. Entry values are
    /// coerced rather than rejected, so one vendor's malformed weight cannot
    /// take down the whole configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let doc: toml::Value = contents
            .parse()
            .context("Failed to parse TOML weight configuration")?;

        let table = doc
            .get("weights")
            .and_then(|v| v.as_table())
            .context("weight configuration must contain a [weights] table")?;

        let entries = table
            .iter()
            .map(|(slug, value)| (slug.clone(), coerce_weight(value)))
            .collect();

        Ok(Self { entries })
    }

    /// Effective weight for a vendor
    ///
    /// Missing entries resolve to [`DEFAULT_WEIGHT`]; an explicit 0 stays 0
    /// and excludes the vendor.
    pub fn resolve(&self, vendor_slug: &str) -> u64 {
        self.entries
            .get(vendor_slug)
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Number of configured vendors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured entries in slug order (used for pool cache keys)
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Coerce a raw TOML value to an effective weight
fn coerce_weight(value: &toml::Value) -> u64 {
    match value {
        toml::Value::Integer(i) if *i >= 0 => *i as u64,
        _ => DEFAULT_WEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_basic() {
        let weights = VendorWeights::from_toml_str(
            r#"
            [weights]
            acme = 3
            northpole = 1
            "#,
        )
        .unwrap();

        assert_eq!(weights.resolve("acme"), 3);
        assert_eq!(weights.resolve("northpole"), 1);
    }

    #[test]
    fn test_missing_vendor_defaults_to_one() {
        let weights = VendorWeights::from_toml_str("[weights]\n").unwrap();
        assert_eq!(weights.resolve("unknown"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_zero_weight_is_preserved() {
        let weights = VendorWeights::from_toml_str("[weights]\nretired = 0\n").unwrap();
        assert_eq!(weights.resolve("retired"), 0);
    }

    #[test]
    fn test_invalid_values_coerced_to_one() {
        let weights = VendorWeights::from_toml_str(
            r#"
            [weights]
            negative = -5
            fractional = 2.5
            stringy = "3"
            boolean = true
            "#,
        )
        .unwrap();

        assert_eq!(weights.resolve("negative"), 1);
        assert_eq!(weights.resolve("fractional"), 1);
        assert_eq!(weights.resolve("stringy"), 1);
        assert_eq!(weights.resolve("boolean"), 1);
    }

    #[test]
    fn test_missing_weights_table_is_error() {
        assert!(VendorWeights::from_toml_str("acme = 3\n").is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weights]\nacme = 4").unwrap();

        let weights = VendorWeights::from_toml_file(file.path()).unwrap();
        assert_eq!(weights.resolve("acme"), 4);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = VendorWeights::from_toml_file(Path::new("/nonexistent/weights.toml"));
        assert!(err.is_err());
    }
}
