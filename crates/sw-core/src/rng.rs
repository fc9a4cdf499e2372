//! Deterministic, seedable per-walker RNG.
//!
//! Each walker gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (walker_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive walker ids across the seed space.  Two runs with
//! the same seed pick the same sequence of steps.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WalkerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-walker deterministic RNG used to pick the next step.
pub struct WalkerRng(SmallRng);

impl WalkerRng {
    /// Seed deterministically from the run's global seed and a walker id.
    pub fn new(global_seed: u64, walker: WalkerId) -> Self {
        let seed = global_seed ^ (walker.0 as u64).wrapping_mul(MIXING_CONSTANT);
        WalkerRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
