// crates/engine/src/config.rs
use crate::MANIFEST_FILE_NAME;
use crate::options::{MtimeFallback, RunMode};
use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ManifestConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "MANIFEST_FILE_NAME.to_string()")]
    pub output_name: String,
    #[builder(default)]
    pub mode: RunMode,
    #[builder(default)]
    pub fallback: MtimeFallback,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl ManifestConfig {
    /// Full path of the manifest file inside the target directory.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_name: MANIFEST_FILE_NAME.to_string(),
            mode: RunMode::default(),
            fallback: MtimeFallback::default(),
            watch_interval: Duration::from_secs(1),
        }
    }
}
