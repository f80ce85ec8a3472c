//! Patch application with overlap detection

use crate::error::{Error, Result};
use crate::replacement::ReplacementSet;

/// Apply `set` to `base`, producing the patched text.
///
/// Walks the base text copying the untouched gap before each entry, then
/// emits the entry's replacement and advances the cursor past the replaced
/// span. An entry starting before the cursor means two replacements
/// intersect; the whole operation fails and partial output is discarded.
/// An empty set returns the base text unchanged, byte for byte.
pub fn apply_replacements(base: &str, set: &ReplacementSet) -> Result<String> {
    let mut out = String::with_capacity(base.len());
    let mut cursor = 0usize;

    for entry in set.sorted() {
        let span = entry.span;
        if span.start < cursor {
            return Err(Error::Overlap {
                start: span.start,
                end: span.end,
                cursor,
            });
        }
        if span.end > base.len() {
            return Err(Error::OutOfBounds {
                start: span.start,
                end: span.end,
                len: base.len(),
            });
        }
        out.push_str(&base[cursor..span.start]);
        out.push_str(&entry.text);
        cursor = span.end;
    }

    out.push_str(&base[cursor..]);
    Ok(out)
}
