// crates/engine/src/exclusion.rs

/// Tokens that keep an entry out of the manifest.
pub const EXCLUDED_TOKENS: [&str; 7] = [
    ".git",
    ".gitignore",
    "node_modules",
    ".DS_Store",
    "files.json",
    "generate-files.js",
    "index.html",
];

/// Returns `true` when an entry must not appear in the manifest.
///
/// A token anywhere inside `relative_path` excludes the entry, as does a
/// `base_name` equal to a token. The substring rule is deliberately broad:
/// `my.gitignore` and `.github` are both excluded.
#[must_use]
pub fn is_excluded(relative_path: &str, base_name: &str) -> bool {
    EXCLUDED_TOKENS
        .iter()
        .any(|token| relative_path.contains(token) || base_name == *token)
}
