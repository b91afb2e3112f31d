//! Deterministic RNG wrapper for waypoint generation.
//!
//! # Determinism strategy
//!
//! A run is seeded once; every consumer that needs randomness derives a child
//! RNG via [`DispatchRng::child`]:
//!
//!   child_seed = next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  The
//! same run seed therefore always produces the same sequence of demo
//! waypoints regardless of how many consumers exist, as long as children are
//! derived in the same order.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded `SmallRng` wrapper used for waypoint generation.
///
/// The type is `Send` but intentionally not `Sync` — RNG state must never be
/// shared between threads; derive a child per task instead.
pub struct DispatchRng(SmallRng);

impl DispatchRng {
    pub fn new(seed: u64) -> Self {
        DispatchRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `DispatchRng` with a different seed offset — useful for
    /// seeding per-task RNGs deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> DispatchRng {
        let child_seed: u64 = self.0.next_u64() ^ offset.wrapping_mul(MIXING_CONSTANT);
        DispatchRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
