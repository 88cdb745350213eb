use std::path::{Path, PathBuf};

/// Extension of the file name including the leading dot (`src/a.test.js` → `.js`).
///
/// Returns `None` when the name has no suffix; dotfiles such as `.eslintrc`
/// count as having no extension.
#[must_use]
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
}

/// Key identifying the physical file behind `path`.
///
/// Falls back to the path as given when it cannot be canonicalized.
#[must_use]
pub fn identity_key(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Render a path with forward slashes for stable output across platforms.
#[must_use]
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
