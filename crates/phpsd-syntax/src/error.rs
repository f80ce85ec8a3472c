//! Error types for phpsd-syntax

/// Result type for phpsd-syntax operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or printing PHP source
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text is not valid under the grammar.
    #[error("parse error at byte {offset}")]
    Parse { offset: usize },

    /// tree-sitter returned no tree; only happens when parsing is
    /// cancelled externally, which this crate never requests.
    #[error("parser produced no tree")]
    ParserCancelled,

    /// The PHP grammar is incompatible with the linked tree-sitter runtime.
    #[error("failed to load PHP grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// A synthesized node outside the printable subset and without a span
    /// to fall back to.
    #[error("cannot print node kind `{kind}` without a source span")]
    Unprintable { kind: &'static str },
}
