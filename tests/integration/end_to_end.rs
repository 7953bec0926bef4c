// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;
use file_manifest_engine::birthtime::parse_iso8601;
use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::{create_files_in_order, manifest_paths, parse_manifest, read_manifest};

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-files"))
}

#[test]
fn example_directory_produces_sorted_manifest() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["a.txt", "b.txt"]);
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.txt"), "c").unwrap();
    fs::write(dir.path().join(".gitignore"), "target/").unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("with 2 entries"))
        .stdout(predicate::str::contains("files.json"));

    let entries = read_manifest(dir.path());
    assert_eq!(manifest_paths(&entries), ["a.txt", "b.txt"]);
    for entry in &entries {
        let obj = entry.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        let birthtime = obj["birthtime"].as_str().unwrap();
        assert!(birthtime.ends_with('Z'));
        parse_iso8601(birthtime).unwrap();
    }
}

#[test]
fn defaults_to_current_directory() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["only.md"]);

    cmd().current_dir(dir.path()).assert().success();

    assert_eq!(manifest_paths(&read_manifest(dir.path())), ["only.md"]);
}

#[test]
fn excluded_entries_never_appear() {
    let dir = tempdir().unwrap();
    create_files_in_order(
        dir.path(),
        &[
            "keep.txt",
            "index.html",
            "generate-files.js",
            ".DS_Store",
            "my.gitignore",
            "node_modules_notes.txt",
        ],
    );
    fs::create_dir(dir.path().join(".git")).unwrap();

    cmd().arg(dir.path()).assert().success();

    assert_eq!(manifest_paths(&read_manifest(dir.path())), ["keep.txt"]);
}

#[test]
fn output_is_pretty_printed_with_two_spaces() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["a.txt"]);

    cmd().arg(dir.path()).assert().success();

    let text = fs::read_to_string(dir.path().join("files.json")).unwrap();
    assert!(text.starts_with("[\n  {\n    \"path\": \"a.txt\",\n    \"birthtime\": \""));
}

#[test]
fn empty_directory_gives_empty_array() {
    let dir = tempdir().unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("with 0 entries"));

    assert!(read_manifest(dir.path()).is_empty());
}

#[test]
fn regeneration_does_not_list_itself() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["a.txt", "b.txt"]);

    cmd().arg(dir.path()).assert().success();
    let first = read_manifest(dir.path());
    cmd().arg(dir.path()).assert().success();
    let second = read_manifest(dir.path());

    assert_eq!(first, second);
}

#[test]
fn stdout_mode_prints_json_only() {
    let dir = tempdir().unwrap();
    create_files_in_order(dir.path(), &["a.txt", "b.txt"]);

    let output = cmd().arg(dir.path()).arg("--stdout").output().unwrap();
    assert!(output.status.success());

    let entries = parse_manifest(&String::from_utf8(output.stdout).unwrap());
    assert_eq!(manifest_paths(&entries), ["a.txt", "b.txt"]);
    assert!(!dir.path().join("files.json").exists());
}
