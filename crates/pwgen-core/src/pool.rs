//! The active symbol pool.
//!
//! Sources are appended in the order the caller supplies them: named sets
//! from the catalog and literal characters. The pool never deduplicates, so
//! each appearance of a character is one more slot for the sampler.

use crate::error::{Error, Result};
use crate::sampler::GENERATOR_RANGE;
use crate::symbols::{Catalog, DEFAULT_SYMBOL_SET, SymbolSet};

/// Concatenation of every symbol source selected for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePool {
    symbols: Vec<char>,
}

impl ActivePool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a catalog set. Returns the number of characters added.
    pub fn extend_from_set(&mut self, set: &SymbolSet) -> Result<usize> {
        log::debug!("activating set {} ({} symbols)", set.name(), set.len());
        self.append(set.characters())
    }

    /// Append literal characters. Returns the number of characters added.
    pub fn extend_from_str(&mut self, literal: &str) -> Result<usize> {
        let chars: Vec<char> = literal.chars().collect();
        log::debug!("activating literal {literal:?} ({} symbols)", chars.len());
        self.append(&chars)
    }

    /// Look `name` up in `catalog` and append it.
    pub fn activate(&mut self, catalog: &Catalog, name: &str) -> Result<usize> {
        let set = catalog.resolve(name)?;
        self.extend_from_set(set)
    }

    /// Fall back to [`DEFAULT_SYMBOL_SET`] when nothing was selected.
    pub fn or_default(mut self, catalog: &Catalog) -> Result<Self> {
        if self.is_empty() {
            self.activate(catalog, DEFAULT_SYMBOL_SET)?;
        }
        Ok(self)
    }

    fn append(&mut self, chars: &[char]) -> Result<usize> {
        self.symbols
            .try_reserve(chars.len())
            .map_err(|_| Error::OutOfMemory {
                requested: chars.len(),
            })?;
        self.symbols.extend_from_slice(chars);
        debug_assert!(self.symbols.len() as u64 <= GENERATOR_RANGE);
        Ok(chars.len())
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// Number of slots, duplicates included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::fmt::Display for ActivePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
