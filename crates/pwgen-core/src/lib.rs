//! # pwgen-core
//!
//! Randomized password generation from a configurable pool of symbols.
//!
//! ## Quick Start
//!
//! ```
//! use pwgen_core::{Catalog, GeneratorConfig, Sampler, Seed};
//!
//! let config = GeneratorConfig {
//!     symbol_sets: vec!["Alnum".into()],
//!     length: 16,
//!     ..Default::default()
//! };
//! let pool = config.build_pool(&Catalog::predefined()).unwrap();
//!
//! let mut sampler = Sampler::from_seed(Seed::from_source(&config.seed_source));
//! let password = sampler.fill_random(config.length, pool.as_slice());
//! assert_eq!(password.len(), 16);
//! ```
//!
//! ## Architecture
//!
//! Catalog (named sets) → ActivePool (concatenate) → Sampler (rejection sampling) → Output
//!
//! - [`Catalog`] holds the predefined [`SymbolSet`]s, built once.
//! - [`ActivePool`] concatenates the selected sets and literal characters.
//!   Duplicates are kept: every slot is equally likely.
//! - [`Seed`] is read once from a [`SeedSource`] and conditioned with SHA-256.
//!   If the source is unavailable it falls back to the clock and says so.
//! - [`Sampler`] owns the generator and draws unbiased indices into the pool.

pub mod conditioning;
pub mod config;
pub mod error;
pub mod pool;
pub mod sampler;
pub mod source;
pub mod symbols;

pub use config::{DEFAULT_COUNT, DEFAULT_LENGTH, GeneratorConfig};
pub use error::{Error, Result};
pub use pool::ActivePool;
pub use sampler::{GENERATOR_RANGE, Sampler};
pub use source::{Seed, SeedOrigin, SeedSource};
pub use symbols::{Catalog, DEFAULT_SYMBOL_SET, SymbolSet, build_range, union};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
