mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use progress::BatchProgress;
pub use text::TextFormatter;

use std::io::{IsTerminal, Write};

use crate::error::Result;
use crate::runner::BatchReport;

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn should_use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::stdout().is_terminal()
            }
        }
    }
}

/// Trait for rendering a batch report.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &BatchReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Write the rendered report (unless `quiet`) and return the exit code for its verdict.
///
/// The verdict is taken from the report as is; nothing here changes it.
///
/// # Errors
/// Returns an error if formatting or writing fails.
pub fn emit_report<W: Write>(
    w: &mut W,
    report: &BatchReport,
    formatter: &dyn ReportFormatter,
    quiet: bool,
) -> Result<i32> {
    if !quiet {
        let output = formatter.format(report)?;
        w.write_all(output.as_bytes())?;
        w.flush()?;
    }
    Ok(report.verdict().exit_code())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
