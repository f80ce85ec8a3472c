//! Sync command implementation

use std::path::Path;

use colored::Colorize;

use phpsd_sync::{FileAction, SyncEngine, SyncOptions, SyncReport};

use crate::error::{CliError, Result};

/// Run the sync command
///
/// Reconciles SRC with DST and prints one line per file. Returns an error
/// (and thus a non-zero exit) when any file failed to parse or patch.
pub fn run_sync(src: &Path, dst: &Path, dry_run: bool, json: bool) -> Result<()> {
    let engine = SyncEngine::new(src, dst, SyncOptions { dry_run });
    let report = engine.sync()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, dry_run);
    }

    if report.success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} file(s) failed",
            report.failures.len()
        )))
    }
}

fn print_report(report: &SyncReport, dry_run: bool) {
    if dry_run {
        println!("{} dry run, no files were modified", "=>".blue().bold());
    }
    for file in &report.files {
        match file.action {
            FileAction::Added => println!("{} {}", "! added:".green().bold(), file.path),
            FileAction::Removed => println!("{} {}", "! removed:".red().bold(), file.path),
            FileAction::Changed => println!("{} {}", "! changed:".yellow().bold(), file.path),
            FileAction::Unchanged => println!("  unchanged: {}", file.path),
        }
    }
    for failure in &report.failures {
        println!(
            "{} {} ({})",
            "! failed:".red().bold(),
            failure.path,
            failure.message
        );
    }
}
