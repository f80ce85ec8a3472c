//! Show-canonical command implementation

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use phpsd_normalize::canonical_source;
use phpsd_sync::php_files;

use crate::error::{CliError, Result};

/// Run the show-canonical command
///
/// Prints each file's path, its canonical rendering, and a blank line.
/// Directory arguments are searched recursively for `.php` files. Files
/// that fail to parse are reported and the rest still print; any failure
/// makes the command exit non-zero.
pub fn run_show_canonical(paths: &[PathBuf]) -> Result<()> {
    let mut failures = 0usize;

    for path in paths {
        for file in expand(path)? {
            match show_file(&file) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("{} {} ({})", "! failed:".red().bold(), file.display(), e);
                    failures += 1;
                }
            }
        }
    }

    if failures == 0 {
        Ok(())
    } else {
        Err(CliError::user(format!("{failures} file(s) failed")))
    }
}

fn expand(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        let files = php_files(path)?;
        Ok(files.into_iter().map(|rel| path.join(rel)).collect())
    } else {
        Ok(vec![path.to_path_buf()])
    }
}

fn show_file(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)?;
    let canonical = canonical_source(&source)?;
    println!("{}", path.display());
    println!("{canonical}");
    Ok(())
}
