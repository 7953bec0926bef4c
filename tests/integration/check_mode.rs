// tests/integration/check_mode.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::create_files_in_order;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-files"))
}

#[test]
fn missing_manifest_is_stale() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["a.txt"]);

    cmd()
        .arg(dir.path())
        .arg("--check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is missing"));
    assert!(!dir.path().join("files.json").exists());
}

#[test]
fn fresh_manifest_passes_then_goes_stale() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["a.txt"]);

    cmd().arg(dir.path()).assert().success();
    cmd()
        .arg(dir.path())
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date (1 entries)"));

    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::remove_file(dir.path().join("a.txt")).unwrap();
    cmd()
        .arg(dir.path())
        .arg("--check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  + b.txt"))
        .stdout(predicate::str::contains("  - a.txt"));
}

#[test]
fn corrupt_manifest_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("files.json"), "{ not json").unwrap();

    cmd()
        .arg(dir.path())
        .arg("--check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON error"));
}
