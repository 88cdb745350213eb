use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{HeaderGuardError, Result};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// A user-supplied glob split into a literal walk root and a matcher for the rest.
///
/// `src/lib/**/*.js` walks `src/lib` and matches `**/*.js` against paths
/// relative to it. `*` never crosses a `/`; `**` spans any number of directories.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
enum PatternKind {
    /// No glob syntax at all: the pattern names one path.
    Literal(PathBuf),
    Glob {
        root: PathBuf,
        matcher: GlobMatcher,
        max_depth: Option<usize>,
    },
}

impl GlobPattern {
    /// Compile a pattern.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the glob syntax is invalid.
    pub fn new(pattern: &str) -> Result<Self> {
        let segments: Vec<&str> = pattern.split('/').collect();
        let literal_len = segments[..segments.len() - 1]
            .iter()
            .take_while(|segment| !has_glob_meta(segment))
            .count();

        if literal_len == segments.len() - 1 && !has_glob_meta(segments[literal_len]) {
            return Ok(Self {
                raw: pattern.to_string(),
                kind: PatternKind::Literal(PathBuf::from(pattern)),
            });
        }

        let root = match segments[..literal_len].join("/") {
            root if !root.is_empty() => PathBuf::from(root),
            _ if pattern.starts_with('/') => PathBuf::from("/"),
            _ => PathBuf::new(),
        };
        let rest = segments[literal_len..].join("/");

        let matcher = GlobBuilder::new(&rest)
            .literal_separator(true)
            .build()
            .map_err(|e| HeaderGuardError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?
            .compile_matcher();

        // Without `**` a match can be no deeper than the number of segments.
        let max_depth = (!rest.contains("**")).then(|| rest.split('/').count());

        Ok(Self {
            raw: pattern.to_string(),
            kind: PatternKind::Glob {
                root,
                matcher,
                max_depth,
            },
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Regular files matched by this pattern, in walk order.
    #[must_use]
    pub fn expand(&self) -> Vec<PathBuf> {
        match &self.kind {
            PatternKind::Literal(path) => {
                if path.is_file() {
                    vec![path.clone()]
                } else {
                    Vec::new()
                }
            }
            PatternKind::Glob {
                root,
                matcher,
                max_depth,
            } => expand_glob(root, matcher, *max_depth),
        }
    }
}

fn expand_glob(root: &Path, matcher: &GlobMatcher, max_depth: Option<usize>) -> Vec<PathBuf> {
    let walk_root = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root
    };

    let mut walker = WalkDir::new(walk_root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    debug!(root = %walk_root.display(), error = %err, "pattern root not readable");
                } else {
                    warn!(error = %err, "skipping unreadable path");
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(walk_root) else {
            continue;
        };
        if matcher.is_match(relative) {
            files.push(root.join(relative));
        }
    }
    files
}

fn has_glob_meta(segment: &str) -> bool {
    segment.contains(GLOB_META)
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
