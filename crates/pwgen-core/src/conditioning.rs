//! Seed conditioning.
//!
//! Every piece of seed material, whatever its origin or length, passes through
//! this module before it reaches the generator:
//!
//! ```text
//! OS entropy | seed file bytes | clock nanoseconds → SHA-256 → 32-byte seed
//! ```
//!
//! A short seed file (a few bytes) therefore still spreads over the whole
//! generator state, and equal material always maps to an equal seed.

use sha2::{Digest, Sha256};

/// Size of the generator seed in bytes.
pub const SEED_LEN: usize = 32;

const DOMAIN: &[u8] = b"pwgen seed v1";

/// Hash raw seed material into a generator seed.
///
/// The material is length-prefixed so that `[0]` and `[0, 0]` give
/// different seeds.
pub fn condition_seed(raw: &[u8]) -> [u8; SEED_LEN] {
    let mut h = Sha256::new();
    h.update(DOMAIN);
    h.update((raw.len() as u64).to_le_bytes());
    h.update(raw);
    h.finalize().into()
}
