// crates/engine/src/lib.rs
use std::path::{Path, PathBuf};

pub mod birthtime;
pub mod compare;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod filesystem;
pub mod manifest;
pub mod options;
pub mod path;
pub mod watch;
pub mod writer;

use crate::compare::{ManifestDiff, diff_manifests};
use crate::config::ManifestConfig;
use crate::error::{EngineError, Result};
use crate::manifest::FileManifest;
use crate::options::RunMode;

/// Name of the manifest written into the target directory.
pub const MANIFEST_FILE_NAME: &str = "files.json";

/// What a single run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Location of the manifest file (written, or compared against).
    pub path: PathBuf,
    pub entries: usize,
    pub mtime_fallbacks: usize,
    pub result: ModeResult,
}

#[derive(Debug)]
pub enum ModeResult {
    Written,
    /// Pretty JSON for the caller to print.
    Printed(String),
    Checked {
        diff: ManifestDiff,
        /// No manifest existed at `path`.
        missing: bool,
    },
}

impl RunOutcome {
    /// `false` only for a check run that found a stale or missing manifest.
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        match &self.result {
            ModeResult::Checked { diff, missing } => !missing && diff.is_empty(),
            ModeResult::Written | ModeResult::Printed(_) => true,
        }
    }
}

/// Scan the target directory and act on the manifest according to `config.mode`.
///
/// Any failure aborts before `files.json` is touched.
///
/// # Errors
///
/// Returns an error for an invalid output name, any filesystem error during
/// the scan, or a failure reading or writing the manifest.
pub fn run(config: &ManifestConfig) -> Result<RunOutcome> {
    validate_output_name(&config.output_name)?;

    let report = filesystem::scan_directory(config)?;
    let path = config.output_path();
    let entries = report.manifest.len();

    let result = match config.mode {
        RunMode::Write => {
            writer::write_manifest(&path, &report.manifest)?;
            ModeResult::Written
        }
        RunMode::Stdout => ModeResult::Printed(report.manifest.to_json_pretty()?),
        RunMode::Check => {
            let (stored, missing) = load_manifest(&path)?;
            ModeResult::Checked {
                diff: diff_manifests(&stored, &report.manifest),
                missing,
            }
        }
    };

    Ok(RunOutcome {
        path,
        entries,
        mtime_fallbacks: report.mtime_fallbacks,
        result,
    })
}

fn load_manifest(path: &Path) -> Result<(FileManifest, bool)> {
    match std::fs::read_to_string(path) {
        Ok(json) => Ok((FileManifest::from_json(&json)?, false)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((FileManifest::default(), true)),
        Err(e) => Err(EngineError::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn validate_output_name(name: &str) -> Result<()> {
    let is_plain = Path::new(name)
        .file_name()
        .is_some_and(|f| f == std::ffi::OsStr::new(name));
    if is_plain {
        Ok(())
    } else {
        Err(EngineError::Config(format!(
            "output name must be a plain file name: {name:?}"
        )))
    }
}
