//! Canonicalization of PHP syntax trees
//!
//! A fixed, ordered pipeline of bottom-up rewrite rules that maps
//! syntactically varied but equivalent trees to one canonical shape.
//! Equality between two normalized trees is the system's notion of
//! semantic equality between two source files.

pub mod pipeline;
mod rules;

pub use pipeline::{canonical_source, normalize};
