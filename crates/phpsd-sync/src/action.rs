//! Per-file classification

use serde::Serialize;

/// What happened to one relative path when comparing two trees. Computed
/// fresh per run, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    /// Present in the destination only; copied byte-for-byte.
    Added,
    /// Present in the source only; deleted.
    Removed,
    /// Semantic content differs; patched or replaced.
    Changed,
    /// Semantically identical; source bytes untouched.
    Unchanged,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        };
        f.write_str(name)
    }
}
