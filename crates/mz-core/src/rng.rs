//! Deterministic per-ghost RNG.
//!
//! Each ghost gets its own independent `SmallRng` seeded by:
//!
//!   seed = game_seed XOR (ghost_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ghost IDs across the seed space.  A ghost's
//! random choices therefore never depend on how many draws another ghost
//! made, and a fixed seed replays a game exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GhostId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-ghost deterministic RNG used by the reference game loop.
pub struct GhostRng(SmallRng);

impl GhostRng {
    /// Seed deterministically from the game's seed and a ghost ID.
    pub fn new(game_seed: u64, ghost: GhostId) -> Self {
        let seed = game_seed ^ (u64::from(ghost.0) + 1).wrapping_mul(MIXING_CONSTANT);
        GhostRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
