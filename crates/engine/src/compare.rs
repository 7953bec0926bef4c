use crate::manifest::FileManifest;
use std::collections::BTreeMap;

/// Differences between a stored manifest and a fresh scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    /// Present in both, but with a different birthtime.
    pub changed: Vec<String>,
    /// Paths listed more than once in the stored manifest.
    pub duplicates: Vec<String>,
    /// The stored entries are not in ascending birthtime order.
    pub unsorted: bool,
}

impl ManifestDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && self.duplicates.is_empty()
            && !self.unsorted
    }
}

/// Compare `stored` against `fresh`.
///
/// Entries with equal birthtimes may appear in any relative order, so only
/// the path/birthtime pairs, repeated paths and the stored ordering are checked.
#[must_use]
pub fn diff_manifests(stored: &FileManifest, fresh: &FileManifest) -> ManifestDiff {
    let old: BTreeMap<_, _> = stored.entries().iter().map(|e| (e.path.as_str(), e.birthtime)).collect();
    let new: BTreeMap<_, _> = fresh.entries().iter().map(|e| (e.path.as_str(), e.birthtime)).collect();

    let mut diff = ManifestDiff::default();
    for (path, birthtime) in &new {
        match old.get(path) {
            None => diff.added.push((*path).to_string()),
            Some(prev) if prev != birthtime => diff.changed.push((*path).to_string()),
            Some(_) => {}
        }
    }
    diff.removed = old
        .keys()
        .filter(|path| !new.contains_key(*path))
        .map(|path| (*path).to_string())
        .collect();
    let mut seen = BTreeMap::new();
    for entry in stored.entries() {
        let count = seen.entry(entry.path.as_str()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            diff.duplicates.push(entry.path.clone());
        }
    }
    diff.unsorted = stored
        .entries()
        .windows(2)
        .any(|pair| pair[0].birthtime > pair[1].birthtime);

    diff
}
