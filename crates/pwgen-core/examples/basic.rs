//! Basic password generation example.
//!
//! Builds an alphanumeric pool with a few extra symbols, seeds from the
//! operating system, and prints five passwords.
//!
//! Run: `cargo run --example basic`

use pwgen_core::{Catalog, GeneratorConfig, Sampler, Seed};

fn main() -> pwgen_core::Result<()> {
    let config = GeneratorConfig {
        count: 5,
        length: 20,
        symbol_sets: vec!["Alnum".to_string()],
        literals: vec!["-_".to_string()],
        ..Default::default()
    };

    let pool = config.build_pool(&Catalog::predefined())?;
    println!("Pool ({} symbols): {pool}", pool.len());

    let seed = Seed::from_source(&config.seed_source);
    println!("Seed origin: {}", seed.origin());

    let mut sampler = Sampler::from_seed(seed);
    for password in sampler.generate(config.count, config.length, pool.as_slice()) {
        println!("{password}");
    }
    Ok(())
}
