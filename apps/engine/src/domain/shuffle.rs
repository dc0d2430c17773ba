//! Deterministic shuffling and seed derivation.
//!
//! Every randomized ordering in a session (the four season queues, the turn
//! order) is a uniform shuffle driven by a seed derived from the session's
//! base seed, so a session is fully reproducible from that one number.
//! `ChaCha20Rng` keeps the permutation stable across `rand` upgrades, which
//! `StdRng` does not guarantee.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Uniformly shuffle `items` in place using a seeded RNG.
pub fn shuffle_with_seed<T>(items: &mut [T], seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Derive the shuffle seed for one season's week queue.
///
/// Unique per (session, season) combination; the multiplier and offset keep
/// it disjoint from [`derive_turn_order_seed`].
pub fn derive_season_seed(base_seed: u64, season_index: usize) -> u64 {
    base_seed
        .wrapping_add((season_index as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}

/// Derive the shuffle seed used to fix the turn order at game start.
pub fn derive_turn_order_seed(base_seed: u64) -> u64 {
    base_seed.wrapping_add(2)
}
