//! Memoized pool rebuilding
//!
//! Pool construction and shuffling are synchronous and cheap, but they are
//! recomputed only when the dependency triple (ads, weights, position)
//! changes by value — never on every render or rotation tick. A stale timer
//! advancing into a silently rebuilt pool of different length is exactly the
//! failure mode this cache exists to prevent: consumers observe an explicit
//! rebuild and reinstall their rotation state.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::weights::VendorWeights;
use crate::model::{Advertisement, Position};
use crate::pool::builder::build_pool;
use crate::pool::shuffle::shuffled;
use crate::pool::Pool;

/// Value fingerprint of the (ads, weights, position) dependency triple
#[derive(Debug, Clone, PartialEq, Eq)]
struct PoolKey {
    position: Position,
    weights: Vec<(String, u64)>,
    ads: Vec<AdKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AdKey {
    id: u64,
    vendor_slug: String,
    image_ids: Vec<u64>,
}

impl PoolKey {
    fn new(ads: &[Advertisement], weights: &VendorWeights, position: Position) -> Self {
        Self {
            position,
            weights: weights.entries().map(|(s, w)| (s.to_string(), w)).collect(),
            ads: ads
                .iter()
                .map(|ad| AdKey {
                    id: ad.id,
                    vendor_slug: ad.vendor_slug.clone(),
                    image_ids: ad.images.iter().map(|img| img.id).collect(),
                })
                .collect(),
        }
    }
}

/// Cache holding the current shuffled pool for one display instance
///
/// Each display owns its own cache; there is no cross-instance shared state.
/// The shuffle RNG lives here so that the randomized order is drawn once per
/// rebuild and stays fixed for the pool's lifetime.
#[derive(Debug)]
pub struct PoolCache {
    rng: Xoshiro256PlusPlus,
    key: Option<PoolKey>,
    pool: Option<Pool>,
    rebuilds: u64,
}

impl PoolCache {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
            key: None,
            pool: None,
            rebuilds: 0,
        }
    }

    /// Seeded variant for reproducible tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            key: None,
            pool: None,
            rebuilds: 0,
        }
    }

    /// Return the cached shuffled pool, rebuilding only if the triple changed
    pub fn get_or_build(
        &mut self,
        ads: &[Advertisement],
        weights: &VendorWeights,
        position: Position,
    ) -> &Pool {
        let key = PoolKey::new(ads, weights, position);

        let stale = self.key.as_ref() != Some(&key);
        if stale {
            let pool = shuffled(&build_pool(ads, weights, position), &mut self.rng);
            self.key = Some(key);
            self.pool = Some(pool);
            self.rebuilds += 1;
        }

        // A rebuild always populates the pool slot before this point
        self.pool.get_or_insert_with(|| Pool::empty(position))
    }

    /// Number of rebuilds performed so far
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Drop the cached pool, forcing the next call to rebuild
    pub fn invalidate(&mut self) {
        self.key = None;
        self.pool = None;
    }
}

impl Default for PoolCache {
    fn default() -> Self {
        Self::new()
    }
}
