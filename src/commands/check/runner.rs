use std::io::Write;

use tracing::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::header::{HeaderMarker, HeaderRegistry};
use crate::output::{
    BatchProgress, ErrorOutput, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
    emit_report,
};
use crate::runner::{BatchRunner, FileStore, FsFileStore, Mode};
use crate::scanner::{ExcludeFilter, FileScanner, PatternScanner};
use crate::EXIT_FAILURE;

use super::check_args::{RunOptions, TemplateSource, color_choice_to_mode};

/// Dependencies of a run, built once before any target is touched.
pub struct CheckContext {
    pub registry: HeaderRegistry,
    /// Injectable pattern expansion.
    pub scanner: Box<dyn FileScanner>,
    /// Injectable file access.
    pub store: Box<dyn FileStore>,
}

impl CheckContext {
    /// Production factory: loads templates and compiles exclude patterns.
    ///
    /// # Errors
    /// Returns an error if the template directory cannot be loaded or an
    /// exclude pattern is invalid.
    pub fn from_options(options: &RunOptions) -> Result<Self> {
        let registry = match &options.templates {
            TemplateSource::Directory(dir) => {
                let registry = HeaderRegistry::load(dir)?;
                info!(
                    dir = %dir.display(),
                    extensions = ?registry.extensions(),
                    "loaded header templates"
                );
                registry
            }
            TemplateSource::Builtin => {
                let registry = HeaderRegistry::builtin();
                info!(extensions = ?registry.extensions(), "using built-in header templates");
                registry
            }
        };

        let filter = ExcludeFilter::new(&options.exclude)?;

        Ok(Self {
            registry,
            scanner: Box::new(PatternScanner::new(filter)),
            store: Box::new(FsFileStore),
        })
    }
}

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_fatal(&e);
            EXIT_FAILURE
        }
    }
}

/// Runs the check with real dependencies and writes the report to stdout.
///
/// # Errors
/// Returns an error for fatal startup problems (options, templates, patterns).
pub fn run_check_impl(cli: &Cli) -> Result<i32> {
    let options = RunOptions::from_cli(cli)?;
    let ctx = CheckContext::from_options(&options)?;

    if options.mode == Mode::Fix {
        warn_templates_without_marker(&ctx.registry, &options);
    }

    let stdout = std::io::stdout();
    run_check_with_context(&cli.patterns, &options, &ctx, &mut stdout.lock())
}

/// Core of the check: resolve targets, run the batch, report.
///
/// Accepts pre-built dependencies so tests can inject their own.
///
/// # Errors
/// Returns an error if a pattern is invalid, the worker pool cannot be
/// created, or the report cannot be written.
pub fn run_check_with_context<W: Write>(
    patterns: &[String],
    options: &RunOptions,
    ctx: &CheckContext,
    out: &mut W,
) -> Result<i32> {
    // 1. Resolve patterns into unique targets
    let targets = ctx.scanner.scan(patterns)?;
    info!(targets = targets.len(), mode = ?options.mode, "starting batch");

    // 2. Process every target and wait for all of them
    let progress = BatchProgress::new(targets.len() as u64, options.quiet);
    let runner = BatchRunner::new(&ctx.registry, &options.marker, ctx.store.as_ref())
        .with_progress(&progress);
    let report = match options.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
            runner.run_in_pool(&pool, targets, options.mode)
        }
        None => runner.run(targets, options.mode),
    };
    progress.finish();

    // 3. Report and map the verdict to an exit code
    let formatter = make_formatter(options);
    emit_report(out, &report, formatter.as_ref(), options.quiet)
}

fn make_formatter(options: &RunOptions) -> Box<dyn ReportFormatter> {
    match options.format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(options.color, options.verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// A template without the marker would be inserted again on every run.
fn warn_templates_without_marker(registry: &HeaderRegistry, options: &RunOptions) {
    let offending = templates_without_marker(registry, &options.marker);
    if offending.is_empty() || options.quiet {
        return;
    }
    ErrorOutput::new(options.color).print_warning(
        &format!(
            "header templates for {} do not contain the marker '{}'",
            offending.join(", "),
            options.marker.as_str()
        ),
        Some("Fixed files will still be reported as missing a header; add the marker to the template"),
    );
}

fn templates_without_marker<'r>(
    registry: &'r HeaderRegistry,
    marker: &HeaderMarker,
) -> Vec<&'r str> {
    let mut offending: Vec<&str> = registry
        .iter()
        .filter(|(_, text)| !marker.is_compliant(text.as_bytes()))
        .map(|(extension, _)| extension)
        .collect();
    offending.sort_unstable();
    offending
}

#[cfg(test)]
#[path = "check_run_tests.rs"]
mod tests;
