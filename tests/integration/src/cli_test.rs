//! End-to-end tests of the phpsd binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn phpsd() -> Command {
    Command::cargo_bin("phpsd").expect("phpsd binary builds")
}

fn write_tree(dir: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
}

#[test]
fn test_sync_reports_every_classification() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_tree(
        src.path(),
        &[
            ("same.php", "<?php echo 'same';\n"),
            ("cosmetic.php", "<?php echo \"Hello, $name!\";\n"),
            ("edited.php", "<?php echo 'old';\n"),
            ("gone.php", "<?php gone();\n"),
        ],
    );
    write_tree(
        dst.path(),
        &[
            ("same.php", "<?php echo 'same';\n"),
            ("cosmetic.php", "<?php echo 'Hello, ' . $name . '!';\n"),
            ("edited.php", "<?php echo 'new';\n"),
            ("fresh.php", "<?php fresh();\n"),
        ],
    );

    phpsd()
        .arg("sync")
        .arg(src.path())
        .arg(dst.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  unchanged: same.php"))
        .stdout(predicate::str::contains("  unchanged: cosmetic.php"))
        .stdout(predicate::str::contains("! changed: edited.php"))
        .stdout(predicate::str::contains("! removed: gone.php"))
        .stdout(predicate::str::contains("! added: fresh.php"));

    // cosmetic differences keep the source's exact bytes
    assert_eq!(
        fs::read_to_string(src.path().join("cosmetic.php")).unwrap(),
        "<?php echo \"Hello, $name!\";\n"
    );
    assert_eq!(
        fs::read_to_string(src.path().join("edited.php")).unwrap(),
        "<?php echo 'new';\n"
    );
    assert!(!src.path().join("gone.php").exists());
    assert!(src.path().join("fresh.php").exists());
}

#[test]
fn test_sync_fails_nonzero_on_unparseable_file() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_tree(src.path(), &[("bad.php", "<?php if (\n")]);
    write_tree(dst.path(), &[("bad.php", "<?php ok();\n")]);

    phpsd()
        .arg("sync")
        .arg(src.path())
        .arg(dst.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("! failed: bad.php"));

    // the failing file is left untouched
    assert_eq!(
        fs::read_to_string(src.path().join("bad.php")).unwrap(),
        "<?php if (\n"
    );
}

#[test]
fn test_sync_requires_both_positional_arguments() {
    let src = TempDir::new().unwrap();
    phpsd()
        .arg("sync")
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_sync_dry_run_leaves_tree_alone() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_tree(src.path(), &[("a.php", "<?php echo 'x';\n")]);
    write_tree(dst.path(), &[("a.php", "<?php echo 'y';\n")]);

    phpsd()
        .arg("sync")
        .arg(src.path())
        .arg(dst.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("! changed: a.php"));

    assert_eq!(
        fs::read_to_string(src.path().join("a.php")).unwrap(),
        "<?php echo 'x';\n"
    );
}

#[test]
fn test_sync_json_report() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_tree(src.path(), &[("a.php", "<?php echo 1;\n")]);
    write_tree(dst.path(), &[("a.php", "<?php echo 1;\n")]);

    let output = phpsd()
        .arg("sync")
        .arg(src.path())
        .arg(dst.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["files"][0]["path"], "a.php");
    assert_eq!(report["files"][0]["action"], "unchanged");
    assert_eq!(report["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn test_show_canonical_prints_normal_form() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.php", "<?php echo \"hello\";\n")]);

    phpsd()
        .arg("show-canonical")
        .arg(dir.path().join("a.php"))
        .assert()
        .success()
        .stdout(predicate::str::contains("a.php"))
        .stdout(predicate::str::contains("echo 'hello';"));
}

#[test]
fn test_show_canonical_requires_a_path() {
    phpsd()
        .arg("show-canonical")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
