// crates/engine/src/manifest.rs
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the target directory, `/`-separated.
    pub path: String,
    #[serde(with = "iso8601")]
    pub birthtime: DateTime<Utc>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, birthtime: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            birthtime,
        }
    }
}

/// Entries ordered by ascending `birthtime`.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileManifest {
    entries: Vec<FileEntry>,
}

impl FileManifest {
    /// Sort `entries` by birthtime. The sort is stable, so ties keep enumeration order.
    #[must_use]
    pub fn from_entries(mut entries: Vec<FileEntry>) -> Self {
        entries.sort_by_key(|e| e.birthtime);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously written manifest, keeping the stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of one directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub manifest: FileManifest,
    /// Entries whose timestamp is a modification time standing in for a creation time.
    pub mtime_fallbacks: usize,
}

mod iso8601 {
    use crate::birthtime::{format_iso8601, parse_iso8601};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        dt: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso8601(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_iso8601(&s).map_err(serde::de::Error::custom)
    }
}
