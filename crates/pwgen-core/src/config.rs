//! Run configuration and its defaults.

use crate::error::Result;
use crate::pool::ActivePool;
use crate::source::SeedSource;
use crate::symbols::Catalog;

/// Strings generated per run unless overridden.
pub const DEFAULT_COUNT: usize = 1;

/// Characters per string unless overridden.
pub const DEFAULT_LENGTH: usize = 8;

/// Everything one generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub length: usize,
    /// Catalog set names, appended to the pool in order.
    pub symbol_sets: Vec<String>,
    /// Literal characters, appended after the named sets.
    pub literals: Vec<String>,
    pub seed_source: SeedSource,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            length: DEFAULT_LENGTH,
            symbol_sets: Vec::new(),
            literals: Vec::new(),
            seed_source: SeedSource::default(),
        }
    }
}

impl GeneratorConfig {
    /// Assemble the active pool: named sets, then literals, then the default
    /// set if the result is still empty.
    pub fn build_pool(&self, catalog: &Catalog) -> Result<ActivePool> {
        let mut pool = ActivePool::new();
        for name in &self.symbol_sets {
            pool.activate(catalog, name)?;
        }
        for literal in &self.literals {
            pool.extend_from_str(literal)?;
        }
        pool.or_default(catalog)
    }
}
