//! Advertisement catalog sources
//!
//! A catalog supplies advertisement records already filtered to a requested
//! position and active date window; the pool builder never re-checks
//! eligibility. The production deployment fronts a backend service, but the
//! same contract is satisfied here by [`FileCatalog`], a JSON file source
//! used by the CLI and the simulator.
//!
//! Ads with incomplete image sets are NOT filtered here — vendor-managed
//! content is expected to be incomplete at times, and the pool builder
//! silently excludes what it cannot display.

use anyhow::Context;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{Advertisement, Position};
use crate::Result;

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode catalog file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of advertisement records for one position
pub trait AdSource {
    /// Advertisements eligible for `position` on `date`
    ///
    /// Returned records are filtered to the position and to
    /// `start_date <= date <= end_date` (open-ended when `end_date` is
    /// absent). Ordering is whatever the underlying source provides; the
    /// pool builder does not depend on it.
    fn ads_for(&self, position: Position, date: NaiveDate) -> Result<Vec<Advertisement>>;
}

/// File-backed catalog holding a JSON array of advertisement records
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and decode every record in the file
    pub fn load_all(&self) -> Result<Vec<Advertisement>> {
        let contents = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;

        let ads: Vec<Advertisement> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Decode {
                path: self.path.clone(),
                source,
            })?;

        Ok(ads)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AdSource for FileCatalog {
    fn ads_for(&self, position: Position, date: NaiveDate) -> Result<Vec<Advertisement>> {
        let ads = self
            .load_all()
            .with_context(|| format!("loading ads for position {}", position))?;

        Ok(ads
            .into_iter()
            .filter(|ad| ad.position == position && is_active(ad, date))
            .collect())
    }
}

/// Whether an ad's date window covers the given date
fn is_active(ad: &Advertisement, date: NaiveDate) -> bool {
    if date < ad.start_date {
        return false;
    }
    match ad.end_date {
        Some(end) => date <= end,
        None => true,
    }
}
