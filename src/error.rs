use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run before any target is processed.
#[derive(Error, Debug)]
pub enum HeaderGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Header template directory not found: {}", path.display())]
    TemplateDirectoryMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read header template: {}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to start worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl HeaderGuardError {
    /// Short name of the error kind, used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::TemplateDirectoryMissing { .. } => "TemplateDirectoryMissing",
            Self::TemplateRead { .. } => "TemplateRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::ThreadPool(_) => "ThreadPool",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Actionable hint for the user, if there is one.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TemplateDirectoryMissing { .. } => Some(
                "Pass --headers <DIR> or set HEADER_GUARD_HEADERS to a directory of header templates",
            ),
            Self::InvalidPattern { .. } => {
                Some("Quote glob patterns so the shell does not expand them")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeaderGuardError>;

/// Reason a single target could not be checked or fixed.
///
/// These never abort the batch; they end up in `Outcome::Failed`.
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("file has no extension")]
    NoExtension,

    #[error("no header template for extension {0}")]
    UnsupportedExtension(String),

    #[error("failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write file: {0}")]
    Write(#[source] std::io::Error),
}

impl TargetError {
    /// Stable identifier used by machine-readable output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoExtension => "no_extension",
            Self::UnsupportedExtension(_) => "unsupported_extension",
            Self::Read(_) => "read",
            Self::Write(_) => "write",
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
