//! Recorded span replacements over one base text

use serde::Serialize;

use phpsd_syntax::Span;

/// Discard `span` of the base text and substitute `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

/// A collection of replacements keyed on one base text's offsets.
///
/// Entries are kept in insertion order and sorted by start offset at
/// application time. Pairwise non-overlap is an invariant of well-formed
/// input; a violation is detected during application and reported, never
/// silently resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplacementSet {
    entries: Vec<Replacement>,
}

impl ReplacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, span: Span, text: impl Into<String>) {
        self.entries.push(Replacement {
            span,
            text: text.into(),
        });
    }

    pub fn push(&mut self, replacement: Replacement) {
        self.entries.push(replacement);
    }

    pub fn extend(&mut self, replacements: impl IntoIterator<Item = Replacement>) {
        self.entries.extend(replacements);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    /// Entries ordered by start offset; ties keep insertion order.
    pub fn sorted(&self) -> Vec<&Replacement> {
        let mut ordered: Vec<&Replacement> = self.entries.iter().collect();
        ordered.sort_by_key(|r| r.span.start);
        ordered
    }
}
