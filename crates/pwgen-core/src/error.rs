//! Error type shared by the catalog, pool and seeding layers.

/// Recoverable failures reported to the caller.
///
/// Invariant violations (empty pool at generation time, a sampling bound
/// outside the generator range, a reversed character range) are not
/// represented here; they panic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A symbol set name that the catalog does not contain.
    #[error("no such symbol set: {0}")]
    UnknownSymbolSet(String),

    /// A second registration under an existing name.
    #[error("symbol set already registered: {0}")]
    DuplicateSymbolSet(String),

    /// Growing the active pool failed to allocate.
    #[error("memory allocation failed while growing the symbol pool ({requested} more characters)")]
    OutOfMemory { requested: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_symbol_set() {
        let err = Error::UnknownSymbolSet("greek".into());
        assert_eq!(err.to_string(), "no such symbol set: greek");
    }

    #[test]
    fn test_display_duplicate_symbol_set() {
        let err = Error::DuplicateSymbolSet("num".into());
        assert_eq!(err.to_string(), "symbol set already registered: num");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("closed"));
    }
}
