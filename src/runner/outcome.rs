use serde::Serialize;

use crate::error::TargetError;
use crate::scanner::Target;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Whether a run only reports missing headers or also inserts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Lint,
    Fix,
}

/// Final result for one target. Produced exactly once per target per run.
#[derive(Debug)]
pub enum Outcome {
    /// The marker was already present; the file was not touched.
    AlreadyCompliant,
    /// The header was inserted and written back (fix mode).
    Fixed,
    /// The header is missing (lint mode).
    ReportedMissing,
    /// The target could not be checked or fixed.
    Failed(TargetError),
}

impl Outcome {
    /// True for outcomes compatible with a passing run.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyCompliant | Self::Fixed)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AlreadyCompliant => "compliant",
            Self::Fixed => "fixed",
            Self::ReportedMissing => "missing",
            Self::Failed(_) => "failed",
        }
    }
}

/// Aggregate pass/fail decision for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunVerdict {
    Pass,
    Fail,
}

impl RunVerdict {
    /// `Pass` iff every outcome is compliant or fixed. An empty set passes.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Self {
        if outcomes.into_iter().all(Outcome::is_success) {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pass => EXIT_SUCCESS,
            Self::Fail => EXIT_FAILURE,
        }
    }
}

#[derive(Debug)]
pub struct TargetOutcome {
    pub target: Target,
    pub outcome: Outcome,
}

/// Outcome counts by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub compliant: usize,
    pub fixed: usize,
    pub missing: usize,
    pub failed: usize,
}

/// Every target's outcome for one run, together with the verdict derived from them.
///
/// The verdict is computed in the constructor from the complete result list, so
/// a report can only exist once all outcomes have settled.
#[derive(Debug)]
pub struct BatchReport {
    mode: Mode,
    results: Vec<TargetOutcome>,
    verdict: RunVerdict,
}

impl BatchReport {
    #[must_use]
    pub fn new(mode: Mode, results: Vec<TargetOutcome>) -> Self {
        let verdict = RunVerdict::from_outcomes(results.iter().map(|r| &r.outcome));
        Self {
            mode,
            results,
            verdict,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn results(&self) -> &[TargetOutcome] {
        &self.results
    }

    #[must_use]
    pub const fn verdict(&self) -> RunVerdict {
        self.verdict
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        self.results
            .iter()
            .fold(Summary::default(), |mut summary, result| {
                summary.total += 1;
                match result.outcome {
                    Outcome::AlreadyCompliant => summary.compliant += 1,
                    Outcome::Fixed => summary.fixed += 1,
                    Outcome::ReportedMissing => summary.missing += 1,
                    Outcome::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
