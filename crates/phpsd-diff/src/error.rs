//! Error types for phpsd-diff

/// Result type for phpsd-diff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying replacements
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Two replacement spans intersect. This indicates a differ or
    /// normalizer invariant violation and is fatal for the file; partial
    /// output is never returned.
    #[error(
        "replacement overlap: entry {start}..{end} begins before the write cursor at byte {cursor}"
    )]
    Overlap {
        start: usize,
        end: usize,
        cursor: usize,
    },

    /// A replacement span reaches past the end of the base text.
    #[error("replacement {start}..{end} exceeds base text length {len}")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}
