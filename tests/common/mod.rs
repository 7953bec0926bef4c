// tests/common/mod.rs
//! Shared helpers for the CLI test suites.

use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

/// Spacing between file creations so birthtimes differ.
pub const CREATION_GAP: Duration = Duration::from_millis(30);

/// Create `names` in order, pausing between each so their birthtimes ascend.
///
/// # Panics
///
/// Panics with a descriptive message if a file cannot be written.
pub fn create_files_in_order(dir: &Path, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            sleep(CREATION_GAP);
        }
        let path = dir.join(name);
        fs::write(&path, name.as_bytes())
            .unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
    }
}

/// Read `files.json` from `dir` as a JSON array.
///
/// # Panics
///
/// Panics if the file is missing or not a JSON array.
pub fn read_manifest(dir: &Path) -> Vec<serde_json::Value> {
    let path = dir.join("files.json");
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read manifest at {path:?}: {e}"));
    parse_manifest(&text)
}

/// Parse manifest JSON text into its array of entries.
///
/// # Panics
///
/// Panics if `text` is not a JSON array.
pub fn parse_manifest(text: &str) -> Vec<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(text).unwrap_or_else(|e| panic!("Invalid manifest JSON: {e}"));
    value
        .as_array()
        .unwrap_or_else(|| panic!("Expected a JSON array, got: {value}"))
        .clone()
}

/// The `path` field of each entry, in order.
pub fn manifest_paths(entries: &[serde_json::Value]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            e["path"]
                .as_str()
                .unwrap_or_else(|| panic!("Entry without string path: {e}"))
                .to_string()
        })
        .collect()
}
