use std::io::Write;

use pwgen_core::Catalog;

/// One line per set: two spaces, the name padded to 10, then the characters.
pub fn listing(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|set| format!("  {:<10}{set}\n", set.name()))
        .collect()
}

pub fn run(catalog: &Catalog, out: &mut dyn Write) -> std::io::Result<()> {
    out.write_all(listing(catalog).as_bytes())?;
    out.flush()
}
