use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "header-guard")]
#[command(author, version, about = "Check source files for a copyright header, or insert it")]
#[command(long_about = "Checks every file matched by the given glob patterns for a copyright \
    header. In the default lint mode missing headers are reported; with --fix the header \
    template registered for the file's extension is inserted.\n\n\
    Quote patterns so that the shell does not expand them:\n  \
    header-guard --fix 'src/**/*.js'\n\n\
    Exit codes:\n  \
    0 - All files compliant (or all fixed)\n  \
    1 - Missing headers, failed files, or a startup error")]
pub struct Cli {
    /// Glob patterns selecting the files to check (e.g. 'src/**/*.js')
    pub patterns: Vec<String>,

    /// Insert missing headers instead of only reporting them
    #[arg(long)]
    pub fix: bool,

    /// Directory holding one header template per file extension
    #[arg(long, value_name = "DIR", env = "HEADER_GUARD_HEADERS")]
    pub headers: Option<PathBuf>,

    /// Text whose presence anywhere in a file marks it as compliant
    #[arg(long, value_name = "TEXT", default_value = crate::header::DEFAULT_MARKER)]
    pub marker: String,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Maximum number of files processed concurrently
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase output verbosity (-v lists compliant files, -vv enables debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress report output; only the exit code is produced
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
