//! Weighted display pools
//!
//! A pool is the flat, replicated list of selectable display entries for one
//! position. Vendor weight is encoded by multiplicity: a vendor with weight
//! 3 appears three times as often in the pool as a weight-1 vendor with the
//! same number of images, so a uniform pick over the pool's index range
//! already yields weighted selection. This trades memory proportional to the
//! total weight for a selector with no search structure at all.
//!
//! Pools are immutable once built. Rebuilding happens only when the
//! (ads, weights, position) dependency triple changes; [`cache::PoolCache`]
//! enforces that.

pub mod builder;
pub mod cache;
pub mod shuffle;

use std::collections::BTreeMap;

use crate::model::{PoolEntry, Position};

/// Ordered sequence of selectable entries for one position
#[derive(Debug, Clone)]
pub struct Pool {
    position: Position,
    entries: Vec<PoolEntry>,
}

impl Pool {
    pub fn new(position: Position, entries: Vec<PoolEntry>) -> Self {
        Self { position, entries }
    }

    /// An empty pool: a valid "nothing to display" state, never an error
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            entries: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoolEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Entry count per vendor slug, in slug order
    pub fn vendor_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.ad.vendor_slug.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct vendors present in the pool, in slug order
    pub fn vendors(&self) -> Vec<String> {
        self.vendor_counts().into_keys().collect()
    }
}
