// src/config.rs
use crate::cli::Args;
pub use file_manifest_engine::config::{ManifestConfig, ManifestConfigBuilder};
use file_manifest_engine::options::{MtimeFallback, RunMode};
use std::time::Duration;

impl From<Args> for ManifestConfig {
    fn from(args: Args) -> Self {
        let mode = if args.check {
            RunMode::Check
        } else if args.stdout {
            RunMode::Stdout
        } else {
            RunMode::Write
        };

        let fallback = if args.no_mtime_fallback {
            MtimeFallback::Deny
        } else {
            MtimeFallback::Allow
        };

        ManifestConfigBuilder::default()
            .root(args.dir)
            .mode(mode)
            .fallback(fallback)
            .watch_interval(Duration::from_secs(args.watch_interval))
            .build()
            .expect("Failed to build config")
    }
}
