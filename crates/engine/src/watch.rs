// crates/engine/src/watch.rs
use crate::config::ManifestConfig;
use crate::error::{EngineError, Result};
use crate::exclusion::is_excluded;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::channel;

/// Watch the target directory and run `on_change` after each relevant batch of events.
///
/// `on_change` runs once before the first event. Blocks until the watcher
/// shuts down.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved or the watcher cannot be installed.
pub fn watch_loop<F>(config: &ManifestConfig, mut on_change: F) -> Result<()>
where
    F: FnMut(),
{
    let root = config
        .root
        .canonicalize()
        .map_err(|e| EngineError::DirectoryRead {
            path: config.root.clone(),
            source: e,
        })?;

    let (tx, rx) = channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => tracing::warn!("watch error: {e}"),
    })?;
    watcher.watch(&root, RecursiveMode::NonRecursive)?;

    tracing::info!(root = %root.display(), "watching for changes");
    on_change();

    while let Ok(event) = rx.recv() {
        if !is_relevant_event(&root, &event) {
            continue;
        }
        std::thread::sleep(config.watch_interval);
        // Drain the burst
        while rx.try_recv().is_ok() {}

        tracing::info!("change detected, regenerating manifest");
        on_change();
    }

    Ok(())
}

/// Whether `event` touches a direct, non-excluded child of `root`.
///
/// Writes to the manifest itself never count, since `files.json` is excluded.
#[must_use]
pub fn is_relevant_event(root: &Path, event: &Event) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    event.paths.iter().any(|p| {
        if p.parent() != Some(root) {
            return false;
        }
        p.file_name().is_some_and(|name| {
            let name = name.to_string_lossy();
            !is_excluded(&name, &name)
        })
    })
}
