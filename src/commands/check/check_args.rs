use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, ColorChoice};
use crate::error::{HeaderGuardError, Result};
use crate::header::HeaderMarker;
use crate::output::{ColorMode, OutputFormat};
use crate::runner::Mode;

/// Directory name searched next to the executable when `--headers` is not given.
pub const DEFAULT_HEADERS_DIR: &str = "headers";

/// Where header templates are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A template directory given explicitly or found beside the executable.
    Directory(PathBuf),
    /// The templates compiled into the binary.
    Builtin,
}

impl TemplateSource {
    /// An explicit directory always wins. Otherwise `headers/` beside the
    /// executable is used when it exists, and the built-in set when it does not.
    #[must_use]
    pub fn select(explicit: Option<&Path>, beside_exe: Option<&Path>) -> Self {
        match (explicit, beside_exe) {
            (Some(dir), _) => Self::Directory(dir.to_path_buf()),
            (None, Some(dir)) if dir.is_dir() => Self::Directory(dir.to_path_buf()),
            (None, _) => Self::Builtin,
        }
    }
}

/// Validated settings for one run, derived from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: Mode,
    pub marker: HeaderMarker,
    pub templates: TemplateSource,
    pub exclude: Vec<String>,
    pub jobs: Option<usize>,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub verbose: u8,
    pub quiet: bool,
}

impl RunOptions {
    /// Validate the parsed command line.
    ///
    /// # Errors
    /// Returns a configuration error for an empty marker or `--jobs 0`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.marker.is_empty() {
            return Err(HeaderGuardError::Config(
                "--marker must not be empty".to_string(),
            ));
        }
        if cli.jobs == Some(0) {
            return Err(HeaderGuardError::Config(
                "--jobs must be at least 1".to_string(),
            ));
        }

        let beside_exe = if cli.headers.is_none() {
            default_headers_dir()
                .inspect_err(|e| debug!(error = %e, "cannot locate executable directory"))
                .ok()
        } else {
            None
        };
        let templates = TemplateSource::select(cli.headers.as_deref(), beside_exe.as_deref());
        debug!(?templates, "selected header templates");

        Ok(Self {
            mode: if cli.fix { Mode::Fix } else { Mode::Lint },
            marker: HeaderMarker::new(cli.marker.clone()),
            templates,
            exclude: cli.exclude.clone(),
            jobs: cli.jobs,
            format: cli.format,
            color: color_choice_to_mode(cli.color),
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }
}

/// `headers/` beside the running executable.
///
/// # Errors
/// Returns an error if the executable path cannot be determined.
pub fn default_headers_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| HeaderGuardError::Config("executable has no parent directory".into()))?;
    Ok(dir.join(DEFAULT_HEADERS_DIR))
}

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[cfg(test)]
#[path = "check_args_tests.rs"]
mod tests;
