//! Uniform selection from the active pool.
//!
//! The generator yields raw `u32` values, so its range is `2^32`. To pick an
//! index below `bound` without modulo bias the sampler rejects every raw value
//! at or above the largest multiple of `bound` that fits in the range and
//! redraws; the accepted value is then reduced modulo `bound`. All of this
//! arithmetic is done in `u64` so the range itself is representable.
//!
//! A [`Sampler`] can only be built from a [`Seed`] (or an explicit generator),
//! which makes drawing from an unseeded generator impossible.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::source::Seed;

/// Number of distinct raw values the generator produces.
pub const GENERATOR_RANGE: u64 = 1 << 32;

/// Seeded random selection of pool slots.
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Consume a seed. One seed per sampler; there is no reseeding.
    pub fn from_seed(seed: Seed) -> Self {
        log::debug!("sampler seeded from {}", seed.origin());
        Self::with_rng(StdRng::from_seed(seed.bytes()))
    }
}

impl<R: RngCore> Sampler<R> {
    /// Use an already-seeded generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly distributed integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// If `bound` is zero or larger than [`GENERATOR_RANGE`].
    pub fn uniform_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "sampling bound must be at least 1");
        let bound = bound as u64;
        assert!(
            bound <= GENERATOR_RANGE,
            "sampling bound {bound} exceeds generator range {GENERATOR_RANGE}"
        );

        let limit = GENERATOR_RANGE - GENERATOR_RANGE % bound;
        loop {
            let raw = u64::from(self.rng.next_u32());
            if raw < limit {
                return (raw % bound) as usize;
            }
        }
    }

    /// `length` characters, each an independent uniform pick of a pool slot.
    ///
    /// # Panics
    ///
    /// If `pool` is empty.
    pub fn fill_random(&mut self, length: usize, pool: &[char]) -> String {
        assert!(!pool.is_empty(), "cannot draw from an empty symbol pool");
        (0..length)
            .map(|_| pool[self.uniform_index(pool.len())])
            .collect()
    }

    /// `count` strings of `length` characters each.
    pub fn generate(&mut self, count: usize, length: usize, pool: &[char]) -> Vec<String> {
        (0..count).map(|_| self.fill_random(length, pool)).collect()
    }
}
