//! Uniform pool shuffling
//!
//! Fisher-Yates over a copy of the pool; the input is never mutated. Every
//! permutation of the entry multiset is equally probable. Shuffling runs
//! once per pool rebuild, not per rotation tick: the randomized order is
//! fixed for the pool's lifetime.

use rand::Rng;

use crate::pool::Pool;

/// Return a uniformly shuffled copy of `pool`
pub fn shuffled<R: Rng>(pool: &Pool, rng: &mut R) -> Pool {
    let mut entries = pool.entries().to_vec();

    // Fisher-Yates: swap each slot with a uniformly chosen slot at or below it
    for i in (1..entries.len()).rev() {
        let j = rng.gen_range(0..=i);
        entries.swap(i, j);
    }

    Pool::new(pool.position(), entries)
}
