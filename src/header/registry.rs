use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::error::{HeaderGuardError, Result, TargetError};
use crate::path_utils::dotted_extension;

/// Placeholder in template text replaced with the current calendar year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Templates shipped in the repository's `headers/` directory, compiled in so
/// the binary works without a template directory on disk.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (".css", include_str!("../../headers/copyright.css")),
    (".html", include_str!("../../headers/copyright.html")),
    (".js", include_str!("../../headers/copyright.js")),
    (".py", include_str!("../../headers/copyright.py")),
    (".rs", include_str!("../../headers/copyright.rs")),
    (".scss", include_str!("../../headers/copyright.scss")),
    (".sh", include_str!("../../headers/copyright.sh")),
    (".ts", include_str!("../../headers/copyright.ts")),
];

/// Header templates keyed by source extension (with the leading dot, e.g. `.py`).
///
/// Built once at startup and read-only afterwards, so a shared reference can be
/// handed to every worker.
#[derive(Debug, Default, Clone)]
pub struct HeaderRegistry {
    templates: HashMap<String, String>,
}

impl HeaderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a template for an extension, replacing any previous one.
    pub fn register(&mut self, extension: &str, text: impl Into<String>) {
        self.templates.insert(extension.to_string(), text.into());
    }

    /// Built-in templates using the current local year.
    #[must_use]
    pub fn builtin() -> Self {
        Self::builtin_with_year(chrono::Local::now().year())
    }

    /// Built-in templates with [`YEAR_PLACEHOLDER`] substituted by `year`.
    #[must_use]
    pub fn builtin_with_year(year: i32) -> Self {
        let year = year.to_string();
        let mut registry = Self::new();
        for (extension, text) in BUILTIN_TEMPLATES {
            registry.register(extension, text.replace(YEAR_PLACEHOLDER, &year));
        }
        registry
    }

    /// Load every template in `dir` using the current local year.
    ///
    /// # Errors
    /// See [`HeaderRegistry::load_with_year`].
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_year(dir, chrono::Local::now().year())
    }

    /// Load every template in `dir`, substituting [`YEAR_PLACEHOLDER`] with `year`.
    ///
    /// Each regular file serves the extension of its own file name, so
    /// `copyright.js` provides the header for `.js` sources. Files are visited in
    /// name order; when two files claim the same extension the later one wins.
    ///
    /// # Errors
    /// Returns `TemplateDirectoryMissing` if `dir` cannot be listed and
    /// `TemplateRead` if a template file cannot be read.
    pub fn load_with_year(dir: &Path, year: i32) -> Result<Self> {
        let entries =
            fs::read_dir(dir).map_err(|source| HeaderGuardError::TemplateDirectoryMissing {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| HeaderGuardError::TemplateRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let year = year.to_string();
        let mut registry = Self::new();
        for path in paths {
            let Some(extension) = dotted_extension(&path) else {
                warn!(template = %path.display(), "skipping header template without extension");
                continue;
            };

            let text =
                fs::read_to_string(&path).map_err(|source| HeaderGuardError::TemplateRead {
                    path: path.clone(),
                    source,
                })?;

            if registry.templates.contains_key(&extension) {
                warn!(
                    template = %path.display(),
                    %extension,
                    "header template overrides an earlier one for the same extension"
                );
            }
            debug!(template = %path.display(), %extension, "loaded header template");
            registry.register(&extension, text.replace(YEAR_PLACEHOLDER, &year));
        }

        if registry.is_empty() {
            warn!(dir = %dir.display(), "header template directory is empty");
        }

        Ok(registry)
    }

    /// Template text for `extension`.
    ///
    /// # Errors
    /// Returns `TargetError::UnsupportedExtension` when no template is registered.
    pub fn resolve(&self, extension: &str) -> std::result::Result<&str, TargetError> {
        self.templates
            .get(extension)
            .map(String::as_str)
            .ok_or_else(|| TargetError::UnsupportedExtension(extension.to_string()))
    }

    /// Registered extensions, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<_> = self.templates.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Iterate over `(extension, text)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().map(|(e, t)| (e.as_str(), t.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
