//! The tree synchronizer
//!
//! Each file pair is processed independently end to end; a failure on one
//! file is recorded and the batch continues. There is no cross-file state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use phpsd_diff::{FileDiff, apply_replacements, diff_programs};
use phpsd_normalize::normalize;
use phpsd_syntax::parse_source;

use crate::action::FileAction;
use crate::discover::php_files;
use crate::error::{Error, Result};

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report what would change without touching the filesystem.
    pub dry_run: bool,
}

/// One classified file in a sync report
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub action: FileAction,
}

/// One file the pipeline gave up on; the file is left untouched
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub message: String,
}

/// Outcome of a sync run across two trees
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl SyncReport {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn count(&self, action: FileAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }

    fn record(&mut self, path: &str, action: FileAction) {
        self.files.push(FileReport {
            path: path.to_string(),
            action,
        });
    }

    fn record_failure(&mut self, path: &str, error: &Error) {
        self.failures.push(FileFailure {
            path: path.to_string(),
            message: error.to_string(),
        });
    }
}

/// Synchronizes a source tree with a destination tree: after a run the
/// source matches the destination's semantic content, files without
/// semantic changes keeping their exact bytes.
pub struct SyncEngine {
    src: PathBuf,
    dst: PathBuf,
    options: SyncOptions,
}

impl SyncEngine {
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>, options: SyncOptions) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            options,
        }
    }

    /// Walk both trees and reconcile them, returning the per-file report.
    ///
    /// Only discovery errors on the roots abort the run; per-file parse
    /// and patch failures are recorded and the remaining files proceed.
    pub fn sync(&self) -> Result<SyncReport> {
        let src_files = php_files(&self.src)?;
        let dst_files = php_files(&self.dst)?;
        let mut report = SyncReport::default();

        for path in &src_files {
            if !dst_files.contains(path) {
                if !self.options.dry_run {
                    let full = self.src.join(path);
                    fs::remove_file(&full).map_err(|e| Error::io(&full, e))?;
                }
                report.record(path, FileAction::Removed);
            }
        }

        for path in &dst_files {
            if src_files.contains(path) {
                match self.sync_common(path) {
                    Ok(action) => report.record(path, action),
                    Err(error) => {
                        tracing::warn!(path = %path, error = %error, "skipping file");
                        report.record_failure(path, &error);
                    }
                }
            } else {
                if !self.options.dry_run {
                    self.copy_added(path)?;
                }
                report.record(path, FileAction::Added);
            }
        }

        Ok(report)
    }

    fn copy_added(&self, path: &str) -> Result<()> {
        let from = self.dst.join(path);
        let to = self.src.join(path);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::copy(&from, &to).map_err(|e| Error::io(&from, e))?;
        Ok(())
    }

    fn sync_common(&self, path: &str) -> Result<FileAction> {
        let src_path = self.src.join(path);
        let dst_path = self.dst.join(path);
        let src_text = read(&src_path)?;
        let dst_text = read(&dst_path)?;

        match sync_texts(&src_text, &dst_text)? {
            None => Ok(FileAction::Unchanged),
            Some(patched) => {
                if !self.options.dry_run {
                    fs::write(&src_path, &patched).map_err(|e| Error::io(&src_path, e))?;
                }
                Ok(FileAction::Changed)
            }
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// The per-file pipeline: parse both sides, normalize, compare top-level
/// shape, then either patch the minimal differing spans or fall back to
/// the destination's whole text. `None` means no semantic change.
pub fn sync_texts(src_text: &str, dst_text: &str) -> Result<Option<String>> {
    let src = parse_source(src_text)?;
    let dst = parse_source(dst_text)?;

    let canonical_src = normalize(src.root);
    let canonical_dst = normalize(dst.root);

    // The differ needs the trees' original spans; normalization keeps
    // them (or marks synthesized nodes span-less), so the canonical trees
    // still index into the parsed texts.
    match diff_programs(&canonical_src, &canonical_dst, &dst.text) {
        FileDiff::Wholesale => {
            tracing::debug!("top-level shape changed, replacing file wholesale");
            Ok(Some(dst_text.to_string()))
        }
        FileDiff::Partial(set) if set.is_empty() => Ok(None),
        FileDiff::Partial(set) => {
            tracing::debug!(replacements = set.len(), "applying partial patch");
            let patched = apply_replacements(&src.text, &set)?;
            Ok(Some(match &src.shebang {
                Some(line) => format!("{line}{patched}"),
                None => patched,
            }))
        }
    }
}
