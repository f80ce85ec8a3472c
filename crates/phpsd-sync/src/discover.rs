//! PHP file discovery

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Recursively collect the relative paths of `.php` files under `root`,
/// using `/` as the separator regardless of platform, sorted for
/// deterministic reports.
pub fn php_files(root: &Path) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    walk(root, "", &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn walk(dir: &Path, prefix: &str, out: &mut Vec<String>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            walk(&path, &relative, out)?;
        } else if relative.ends_with(".php") {
            out.push(relative);
        }
    }
    Ok(())
}
