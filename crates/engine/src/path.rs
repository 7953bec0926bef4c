use std::path::{Component, Path};

/// Render a relative path with `/` separators regardless of the host convention.
///
/// Only normal components are kept, so `./a.txt` becomes `a.txt`.
#[must_use]
pub fn to_manifest_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
