use std::io::Write;

use pwgen_core::{Catalog, GeneratorConfig, Sampler, Seed};

/// Build the pool, seed once, and print `config.count` strings, one per line.
///
/// A seed that fell back to the clock is reported on `err` before any output.
pub fn run(
    config: &GeneratorConfig,
    catalog: &Catalog,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> pwgen_core::Result<()> {
    let pool = config.build_pool(catalog)?;
    log::debug!("pool of {} symbols: {pool}", pool.len());

    let seed = Seed::from_source(&config.seed_source);
    if let Some(reason) = seed.fallback_reason() {
        writeln!(err, "{reason}")?;
        writeln!(err, "WARNING: fallback: using system time as random seed")?;
        writeln!(err, "WARNING: system time is predictable!")?;
    }

    let mut sampler = Sampler::from_seed(seed);
    for _ in 0..config.count {
        let password = sampler.fill_random(config.length, pool.as_slice());
        writeln!(out, "{password}")?;
    }
    out.flush()?;
    Ok(())
}
