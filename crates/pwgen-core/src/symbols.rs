//! Named symbol sets and the catalog that holds them.
//!
//! A [`SymbolSet`] is an ordered run of characters under a short name. The
//! [`Catalog`] is built once at startup by [`Catalog::predefined`] and only
//! queried afterwards. Primitive sets come from closed ASCII ranges; compound
//! sets are plain concatenations of primitives, so a character listed twice
//! occupies two slots and is drawn twice as often.
//!
//! | name       | characters                                  |
//! |------------|---------------------------------------------|
//! | `asciip`   | 32–126, printable including space           |
//! | `asciipns` | 33–126, printable without space (default)   |
//! | `num`      | 48–57                                       |
//! | `ALPHA`    | 65–90                                       |
//! | `alpha`    | 97–122                                      |
//! | `Alpha`    | `ALPHA` ++ `alpha`                          |
//! | `ALNUM`    | `ALPHA` ++ `num`                            |
//! | `alnum`    | `alpha` ++ `num`                            |
//! | `Alnum`    | `Alpha` ++ `num`                            |
//! | `punct`    | 33–47 ++ 58–64 ++ 91–96 ++ 123–126          |

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Name of the set activated when the caller selects nothing.
pub const DEFAULT_SYMBOL_SET: &str = "asciipns";

/// A named, immutable sequence of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    name: String,
    characters: Vec<char>,
}

impl SymbolSet {
    pub fn new(name: impl Into<String>, characters: Vec<char>) -> Self {
        Self {
            name: name.into(),
            characters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    /// Number of slots, duplicates included.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl std::fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.characters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Set construction
// ---------------------------------------------------------------------------

/// Closed interval of characters from `first` to `last`, ascending.
///
/// # Panics
///
/// If `first > last`.
pub fn build_range(first: char, last: char) -> Vec<char> {
    assert!(
        first <= last,
        "reversed character range: {first:?} > {last:?}"
    );
    (first..=last).collect()
}

/// `a` followed by `b`, order preserved, no deduplication.
pub fn union(a: &[char], b: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Build-once registry of symbol sets, iterated in registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: Vec<SymbolSet>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard sets listed in the module docs.
    pub fn predefined() -> Self {
        let mut catalog = Self::new();

        let printable = build_range(' ', '~');
        let printable_no_space = build_range('!', '~');
        let digits = build_range('0', '9');
        let upper = build_range('A', 'Z');
        let lower = build_range('a', 'z');
        let letters = union(&upper, &lower);

        let punct = [('!', '/'), (':', '@'), ('[', '`'), ('{', '~')]
            .into_iter()
            .flat_map(|(first, last)| build_range(first, last))
            .collect();

        catalog.insert("asciip", printable);
        catalog.insert(DEFAULT_SYMBOL_SET, printable_no_space);
        catalog.insert("num", digits.clone());
        catalog.insert("ALPHA", upper.clone());
        catalog.insert("alpha", lower.clone());
        catalog.insert("Alpha", letters.clone());
        catalog.insert("ALNUM", union(&upper, &digits));
        catalog.insert("alnum", union(&lower, &digits));
        catalog.insert("Alnum", union(&letters, &digits));
        catalog.insert("punct", punct);

        catalog
    }

    /// Add a named set. Names are unique; a second registration fails.
    pub fn register(&mut self, name: &str, characters: Vec<char>) -> Result<&SymbolSet> {
        if self.index.contains_key(name) {
            return Err(Error::DuplicateSymbolSet(name.to_string()));
        }
        Ok(self.insert(name, characters))
    }

    fn insert(&mut self, name: &str, characters: Vec<char>) -> &SymbolSet {
        debug_assert!(!self.index.contains_key(name));
        let slot = self.sets.len();
        self.index.insert(name.to_string(), slot);
        self.sets.push(SymbolSet::new(name, characters));
        &self.sets[slot]
    }

    /// Exact-name lookup.
    pub fn lookup(&self, name: &str) -> Option<&SymbolSet> {
        self.index.get(name).map(|&slot| &self.sets[slot])
    }

    /// Like [`lookup`](Self::lookup), but a miss is an [`Error::UnknownSymbolSet`].
    pub fn resolve(&self, name: &str) -> Result<&SymbolSet> {
        self.lookup(name)
            .ok_or_else(|| Error::UnknownSymbolSet(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolSet> {
        self.sets.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(SymbolSet::name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(catalog: &Catalog, name: &str) -> Vec<char> {
        catalog.lookup(name).unwrap().characters().to_vec()
    }

    fn ascii(first: u8, last: u8) -> Vec<char> {
        (first..=last).map(char::from).collect()
    }

    // -----------------------------------------------------------------------
    // build_range / union
    // -----------------------------------------------------------------------

    #[test]
    fn test_build_range_lengths_and_order() {
        for (first, last) in [('0', '9'), ('A', 'Z'), (' ', '~'), ('x', 'x'), ('!', '/')] {
            let range = build_range(first, last);
            assert_eq!(range.len(), last as usize - first as usize + 1);
            assert_eq!(range.first(), Some(&first));
            assert_eq!(range.last(), Some(&last));
            for pair in range.windows(2) {
                assert_eq!(pair[1] as u32, pair[0] as u32 + 1, "gap in {first}..={last}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "reversed character range")]
    fn test_build_range_reversed_panics() {
        build_range('z', 'a');
    }

    #[test]
    fn test_union_preserves_order_and_duplicates() {
        let joined = union(&['a', 'b'], &['b', 'c']);
        assert_eq!(joined, vec!['a', 'b', 'b', 'c']);
        assert_eq!(union(&[], &['x']), vec!['x']);
        assert!(union(&[], &[]).is_empty());
    }

    // -----------------------------------------------------------------------
    // Predefined sets
    // -----------------------------------------------------------------------

    #[test]
    fn test_predefined_order() {
        let catalog = Catalog::predefined();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            [
                "asciip", "asciipns", "num", "ALPHA", "alpha", "Alpha", "ALNUM", "alnum",
                "Alnum", "punct"
            ]
        );
    }

    #[test]
    fn test_primitive_ranges() {
        let catalog = Catalog::predefined();
        assert_eq!(chars(&catalog, "asciip"), ascii(32, 126));
        assert_eq!(chars(&catalog, "asciipns"), ascii(33, 126));
        assert_eq!(chars(&catalog, "num"), ascii(48, 57));
        assert_eq!(chars(&catalog, "ALPHA"), ascii(65, 90));
        assert_eq!(chars(&catalog, "alpha"), ascii(97, 122));
    }

    #[test]
    fn test_compound_sets_are_concatenations() {
        let catalog = Catalog::predefined();
        let upper = chars(&catalog, "ALPHA");
        let lower = chars(&catalog, "alpha");
        let digits = chars(&catalog, "num");
        let letters = chars(&catalog, "Alpha");

        assert_eq!(letters, [upper.clone(), lower.clone()].concat());
        assert_eq!(chars(&catalog, "ALNUM"), [upper, digits.clone()].concat());
        assert_eq!(chars(&catalog, "alnum"), [lower, digits.clone()].concat());
        assert_eq!(chars(&catalog, "Alnum"), [letters, digits].concat());
    }

    #[test]
    fn test_punct() {
        let catalog = Catalog::predefined();
        let expected = [ascii(33, 47), ascii(58, 64), ascii(91, 96), ascii(123, 126)].concat();
        let punct = chars(&catalog, "punct");
        assert_eq!(punct, expected);
        assert_eq!(punct.len(), 32);
        assert!(punct.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_default_set_size() {
        let catalog = Catalog::predefined();
        let set = catalog.lookup(DEFAULT_SYMBOL_SET).unwrap();
        assert_eq!(set.len(), 94);
        assert!(!set.characters().contains(&' '));
    }

    // -----------------------------------------------------------------------
    // register / lookup
    // -----------------------------------------------------------------------

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::predefined();
        assert!(catalog.lookup("alpha").is_some());
        assert!(catalog.lookup("ALPHA").is_some());
        assert_ne!(catalog.lookup("alpha"), catalog.lookup("ALPHA"));
        assert!(catalog.lookup("alph").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = Catalog::predefined();
        let err = catalog.resolve("greek").unwrap_err();
        assert!(matches!(err, Error::UnknownSymbolSet(name) if name == "greek"));
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let mut catalog = Catalog::predefined();
        let before = catalog.len();
        let err = catalog.register("num", vec!['1']).unwrap_err();
        assert!(matches!(err, Error::DuplicateSymbolSet(_)));
        assert_eq!(catalog.len(), before);
        assert_eq!(chars(&catalog, "num").len(), 10);
    }

    #[test]
    fn test_register_new_set() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        let set = catalog.register("hex", union(&build_range('0', '9'), &build_range('a', 'f')));
        assert_eq!(set.unwrap().len(), 16);
        assert_eq!(catalog.lookup("hex").unwrap().to_string(), "0123456789abcdef");
    }

    #[test]
    fn test_display() {
        let set = SymbolSet::new("bin", vec!['0', '1']);
        assert_eq!(set.to_string(), "01");
        assert_eq!(set.name(), "bin");
    }
}
