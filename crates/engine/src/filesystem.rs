use crate::birthtime::file_timestamp;
use crate::config::ManifestConfig;
use crate::error::{EngineError, Result};
use crate::exclusion::is_excluded;
use crate::manifest::{FileEntry, FileManifest, ScanReport};
use crate::options::TimestampSource;
use crate::path::to_manifest_path;
use ignore::WalkBuilder;
use std::path::Path;

/// Scan the direct children of `config.root` and build a sorted manifest.
///
/// Every child is stat'ed (following symlinks). Subdirectories are never
/// descended into and only regular files become entries.
///
/// # Errors
///
/// The first filesystem error aborts the scan: a missing or unreadable root,
/// a root that is not a directory, or a failed stat on any child.
pub fn scan_directory(config: &ManifestConfig) -> Result<ScanReport> {
    let root = &config.root;
    let root_meta = std::fs::metadata(root).map_err(|e| EngineError::DirectoryRead {
        path: root.clone(),
        source: e,
    })?;
    if !root_meta.is_dir() {
        return Err(EngineError::NotADirectory(root.clone()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .build();

    let mut entries = Vec::new();
    let mut mtime_fallbacks = 0;

    for result in walker {
        let entry = result?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let rel = path
            .strip_prefix(root)
            .unwrap_or_else(|_| Path::new(entry.file_name()));
        let rel_str = to_manifest_path(rel);
        let base_name = entry.file_name().to_string_lossy();

        let meta = std::fs::metadata(path).map_err(|e| EngineError::Metadata {
            path: path.to_path_buf(),
            source: e,
        })?;

        if is_excluded(&rel_str, &base_name) {
            tracing::debug!(path = %rel_str, "excluded");
            continue;
        }
        if !meta.is_file() {
            tracing::debug!(path = %rel_str, "not a regular file, skipped");
            continue;
        }

        let (birthtime, source) = file_timestamp(&meta, path, config.fallback)?;
        if source == TimestampSource::Modified {
            mtime_fallbacks += 1;
        }
        tracing::debug!(path = %rel_str, %birthtime, "recorded");
        entries.push(FileEntry::new(rel_str, birthtime));
    }

    Ok(ScanReport {
        manifest: FileManifest::from_entries(entries),
        mtime_fallbacks,
    })
}
