mod filter;
mod pattern;

pub use filter::{ExcludeFilter, FileFilter};
pub use pattern::GlobPattern;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::Result;
use crate::path_utils::{dotted_extension, identity_key};

/// One file selected for checking, tagged with its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    path: PathBuf,
    extension: Option<String>,
}

impl Target {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = dotted_extension(&path);
        Self { path, extension }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extension including the leading dot, or `None` for files like `Makefile`.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Trait for turning user patterns into the set of files to process.
pub trait FileScanner {
    /// Expand `patterns` into deduplicated targets.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    fn scan(&self, patterns: &[String]) -> Result<Vec<Target>>;
}

/// Expands glob patterns into targets.
///
/// Patterns are expanded independently and their matches unioned. A file
/// reached through several patterns, or through different spellings of the
/// same path, yields a single target at the position of its first match.
pub struct PatternScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> PatternScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for PatternScanner<F> {
    fn scan(&self, patterns: &[String]) -> Result<Vec<Target>> {
        // Compile everything first so a bad pattern fails before any walking.
        let compiled = patterns
            .iter()
            .map(|p| GlobPattern::new(p))
            .collect::<Result<Vec<_>>>()?;

        let mut unique: IndexMap<PathBuf, PathBuf> = IndexMap::new();
        for pattern in &compiled {
            let matches = pattern.expand();
            if matches.is_empty() {
                warn!(pattern = pattern.as_str(), "pattern matched no files");
                continue;
            }
            debug!(pattern = pattern.as_str(), count = matches.len(), "expanded pattern");

            for path in matches {
                if !self.filter.should_include(&path) {
                    debug!(path = %path.display(), "excluded");
                    continue;
                }
                unique.entry(identity_key(&path)).or_insert(path);
            }
        }

        Ok(unique.into_values().map(Target::new).collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
