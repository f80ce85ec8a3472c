//! Span model, generic syntax tree model, and PHP parser adapter
//!
//! Provides the byte-range span type, the owned `SyntaxNode` tree that the
//! normalizer and differ operate on, the tree-sitter based PHP parser
//! adapter, and a canonical printer for the normalized tree.

pub mod error;
pub mod kinds;
pub mod node;
pub mod parse;
pub mod print;
pub mod span;

pub use error::{Error, Result};
pub use node::{FieldValue, FlatValue, Scalar, SyntaxNode};
pub use parse::{ParsedSource, parse_source, split_shebang};
pub use print::print_canonical;
pub use span::Span;
