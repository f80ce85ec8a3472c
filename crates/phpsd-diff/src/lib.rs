//! Structural diffing and patch application
//!
//! Compares two canonical trees node by node, records the minimal spans of
//! the base text to replace with slices of the other text, and splices the
//! recorded replacements while asserting that no two edits overlap.

pub mod differ;
pub mod error;
pub mod patch;
pub mod replacement;

pub use differ::{FileDiff, diff_programs};
pub use error::{Error, Result};
pub use patch::apply_replacements;
pub use replacement::{Replacement, ReplacementSet};
