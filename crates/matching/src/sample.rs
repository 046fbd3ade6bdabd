//! Right-pool sampling.
//!
//! Kept as a pure function over an injected random source so callers (and
//! tests) can pin the pool with a seeded RNG instead of relying on ambient
//! randomness.

use rand::{seq::SliceRandom, Rng};

use crate::catalog::PairItem;

/// Draws up to `k` items without replacement, in shuffled order. When `k`
/// exceeds the input size the whole shuffled input is returned.
pub fn sample_pool<R: Rng + ?Sized>(items: &[PairItem], k: usize, rng: &mut R) -> Vec<PairItem> {
    let mut pool = items.to_vec();
    pool.shuffle(rng);
    pool.truncate(k);
    pool
}
