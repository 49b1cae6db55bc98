//! Weighted selection over a pool
//!
//! Because vendor weight is already encoded as entry multiplicity, a uniform
//! pick over the pool's index range selects each vendor with probability
//! proportional to its configured weight. No cumulative-weight search
//! structure is needed; the cost is pool memory proportional to the total
//! weight, which is negligible at catalog scale.
//!
//! Uses the xoshiro256++ PRNG: fast, good statistical quality, and seedable
//! for reproducible simulation runs.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::pool::Pool;

/// Uniform index selector over a pool
pub struct Selector {
    rng: Xoshiro256PlusPlus,
}

impl Selector {
    /// Create a selector with a random seed
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a selector with a specific seed
    ///
    /// Useful for reproducible simulation runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Pick one entry index, or `None` for an empty pool
    ///
    /// Never indexes out of bounds: the result is always `< pool.len()`.
    pub fn select(&mut self, pool: &Pool) -> Option<usize> {
        if pool.is_empty() {
            return None;
        }
        Some(self.rng.gen_range(0..pool.len()))
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}
