use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}";

/// Ticks once per settled target, on stderr so the report on stdout stays clean.
///
/// Drawing is disabled when quiet or when stderr is not a terminal; the
/// position is tracked either way.
#[derive(Clone)]
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let draw = !quiet && std::io::stderr().is_terminal();
        Self::with_drawing(total, draw)
    }

    fn with_drawing(total: u64, draw: bool) -> Self {
        let target = if draw {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(total), target);
        // SAFETY: TEMPLATE is a constant with valid placeholders
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        bar.set_message("Checking headers");
        Self { bar }
    }

    /// Safe to call from rayon workers.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
