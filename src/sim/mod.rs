//! Distribution simulation
//!
//! Drives the selector N times against a built pool, tallies hits per
//! vendor, and reports expected-vs-actual percentages. This is the
//! correctness proof for the replication-based weighting: with enough
//! trials the actual share of every vendor converges to
//! `weight / total_weight`.
//!
//! The simulator operates on an independent, read-only pool snapshot and
//! never touches a live rotation scheduler. Whether the pool was shuffled
//! first is irrelevant: the selector is uniform over positions.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::weights::VendorWeights;
use crate::model::Position;
use crate::pool::Pool;
use crate::select::Selector;

/// Expected-vs-actual outcome for one vendor
#[derive(Debug, Clone, Serialize)]
pub struct VendorOutcome {
    pub vendor_slug: String,
    pub weight: u64,
    pub expected_pct: f64,
    pub hits: u64,
    pub actual_pct: f64,
    /// Signed difference, actual minus expected
    pub diff_pct: f64,
}

/// Full simulation report for one position's pool
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    pub position: Position,
    pub trials: u64,
    pub pool_size: usize,
    pub total_weight: u64,
    /// Per-vendor outcomes in slug order
    pub vendors: Vec<VendorOutcome>,
}

/// Run `trials` selections and tally the per-vendor distribution
///
/// Division-by-zero guards: zero trials, an empty pool, or a zero total
/// weight all report 0% rather than failing.
pub fn simulate(
    pool: &Pool,
    weights: &VendorWeights,
    trials: u64,
    selector: &mut Selector,
) -> DistributionReport {
    let mut hits: BTreeMap<String, u64> = pool
        .vendors()
        .into_iter()
        .map(|slug| (slug, 0))
        .collect();

    for _ in 0..trials {
        let Some(index) = selector.select(pool) else {
            break; // empty pool: nothing will ever be selected
        };
        if let Some(entry) = pool.get(index) {
            *hits.entry(entry.ad.vendor_slug.clone()).or_insert(0) += 1;
        }
    }

    let vendor_weights: BTreeMap<String, u64> = hits
        .keys()
        .map(|slug| (slug.clone(), weights.resolve(slug)))
        .collect();
    let total_weight: u64 = vendor_weights.values().sum();

    let vendors = hits
        .into_iter()
        .map(|(vendor_slug, hit_count)| {
            let weight = vendor_weights[&vendor_slug];
            let expected_pct = percentage(weight, total_weight);
            let actual_pct = percentage(hit_count, trials);
            VendorOutcome {
                vendor_slug,
                weight,
                expected_pct,
                hits: hit_count,
                actual_pct,
                diff_pct: actual_pct - expected_pct,
            }
        })
        .collect();

    DistributionReport {
        position: pool.position(),
        trials,
        pool_size: pool.len(),
        total_weight,
        vendors,
    }
}

/// `part / whole * 100`, or 0 when the denominator is 0
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
