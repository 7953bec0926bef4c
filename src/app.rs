use crate::cli::Args;
use crate::config::ManifestConfig;
use crate::presentation;
use anyhow::{Context, Result};
use file_manifest_engine::watch;

/// Run the command described by `args`.
///
/// Returns `Ok(false)` when a `--check` run found the manifest stale or missing.
pub fn run(args: Args) -> Result<bool> {
    let watch_mode = args.watch;
    let config = ManifestConfig::from(args);

    if watch_mode {
        watch::watch_loop(&config, || {
            if let Err(e) = generate(&config) {
                tracing::error!("{e:#}");
            }
        })
        .context("watch mode failed")?;
        return Ok(true);
    }

    generate(&config)
}

fn generate(config: &ManifestConfig) -> Result<bool> {
    let outcome = file_manifest_engine::run(config).with_context(|| {
        format!("failed to build manifest for {}", config.root.display())
    })?;

    if outcome.mtime_fallbacks > 0 {
        tracing::warn!(
            count = outcome.mtime_fallbacks,
            "modification time used in place of creation time"
        );
    }
    tracing::info!(
        path = %outcome.path.display(),
        entries = outcome.entries,
        "manifest built"
    );

    presentation::print_outcome(&outcome).context("failed to write to stdout")?;
    Ok(outcome.is_up_to_date())
}
