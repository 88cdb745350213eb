use std::io::Write;

use crate::error::Result;
use crate::path_utils::display_path;
use crate::runner::{BatchReport, Mode, Outcome, RunVerdict, TargetOutcome};

use super::{ColorMode, ReportFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.should_use_colors(),
            verbose,
        }
    }

    const fn status(outcome: &Outcome) -> (&'static str, &'static str, &'static str) {
        match outcome {
            Outcome::AlreadyCompliant => ("·", "OK", ansi::DIM),
            Outcome::Fixed => ("✓", "FIXED", ansi::GREEN),
            Outcome::ReportedMissing => ("✗", "MISSING", ansi::YELLOW),
            Outcome::Failed(_) => ("✖", "FAILED", ansi::RED),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &TargetOutcome, output: &mut Vec<u8>) {
        let (icon, status, color) = Self::status(&result.outcome);
        let status = self.colorize(status, color);
        let path = display_path(result.target.path());

        let line = match &result.outcome {
            Outcome::Failed(reason) => format!("{icon} {status}: {path} ({reason})"),
            _ => format!("{icon} {status}: {path}"),
        };
        writeln!(output, "{line}").ok();
    }

    fn format_summary(&self, report: &BatchReport) -> String {
        let summary = report.summary();
        let verdict = match report.verdict() {
            RunVerdict::Pass => self.colorize("PASSED", ansi::GREEN),
            RunVerdict::Fail => self.colorize("FAILED", ansi::RED),
        };
        format!(
            "{verdict}: {} files checked, {} compliant, {} fixed, {} without header, {} failed",
            summary.total, summary.compliant, summary.fixed, summary.missing, summary.failed
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let mut output = Vec::new();

        for result in report.results() {
            let compliant = matches!(result.outcome, Outcome::AlreadyCompliant);
            if compliant && self.verbose == 0 {
                continue;
            }
            self.format_result(result, &mut output);
        }

        if !report.results().is_empty() {
            writeln!(output).ok();
        }
        writeln!(output, "{}", self.format_summary(report)).ok();

        if report.mode() == Mode::Lint && report.summary().missing > 0 {
            let help = self.colorize("help:", ansi::CYAN);
            writeln!(output, "  {help} re-run with --fix to insert headers").ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
