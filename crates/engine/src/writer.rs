// crates/engine/src/writer.rs
use crate::error::{EngineError, Result};
use crate::manifest::FileManifest;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Serialize `manifest` and atomically replace the file at `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_manifest(path: &Path, manifest: &FileManifest) -> Result<()> {
    let json = manifest.to_json_pretty()?;
    atomic_write(path, json.as_bytes()).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `data` to a temp file beside `path`, then rename it into place.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("path has no parent"))?;

    // Same directory so the rename stays on one filesystem.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".files.json.{}.{nanos}.tmp", std::process::id()));

    let result = (|| {
        let mut w = BufWriter::new(File::create(&tmp)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
