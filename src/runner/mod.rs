mod outcome;
mod store;

pub use outcome::{BatchReport, Mode, Outcome, RunVerdict, Summary, TargetOutcome};
pub use store::{FileStore, FsFileStore};

use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::debug;

use crate::error::TargetError;
use crate::header::{HeaderMarker, HeaderRegistry, insert_header};
use crate::output::BatchProgress;
use crate::scanner::Target;

/// Runs the per-file pipeline over a batch of targets.
///
/// Every target is processed independently (read, classify, then report or
/// insert and write). Targets are mapped to outcomes with a parallel iterator
/// and collected into a vector with one entry per target, in target order.
/// `collect` returns only once every target has settled, and the verdict is
/// derived from that complete vector.
pub struct BatchRunner<'a> {
    registry: &'a HeaderRegistry,
    marker: &'a HeaderMarker,
    store: &'a dyn FileStore,
    progress: Option<&'a BatchProgress>,
}

impl<'a> BatchRunner<'a> {
    #[must_use]
    pub fn new(
        registry: &'a HeaderRegistry,
        marker: &'a HeaderMarker,
        store: &'a dyn FileStore,
    ) -> Self {
        Self {
            registry,
            marker,
            store,
            progress: None,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, progress: &'a BatchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Process all targets on the global rayon pool.
    #[must_use]
    pub fn run(&self, targets: Vec<Target>, mode: Mode) -> BatchReport {
        let results: Vec<TargetOutcome> = targets
            .into_par_iter()
            .map(|target| {
                let outcome = self.process(&target, mode);
                debug!(
                    path = %target.path().display(),
                    outcome = outcome.label(),
                    "target settled"
                );
                if let Some(progress) = self.progress {
                    progress.inc();
                }
                TargetOutcome { target, outcome }
            })
            .collect();

        BatchReport::new(mode, results)
    }

    /// Process all targets on a dedicated pool, bounding concurrency to its size.
    #[must_use]
    pub fn run_in_pool(
        &self,
        pool: &ThreadPool,
        targets: Vec<Target>,
        mode: Mode,
    ) -> BatchReport {
        pool.install(|| self.run(targets, mode))
    }

    /// Outcome for a single target. Errors are folded into `Outcome::Failed`.
    #[must_use]
    pub fn process(&self, target: &Target, mode: Mode) -> Outcome {
        self.try_process(target, mode).unwrap_or_else(Outcome::Failed)
    }

    fn try_process(&self, target: &Target, mode: Mode) -> Result<Outcome, TargetError> {
        let extension = target.extension().ok_or(TargetError::NoExtension)?;
        let content = self.store.read(target.path()).map_err(TargetError::Read)?;

        if self.marker.is_compliant(&content) {
            return Ok(Outcome::AlreadyCompliant);
        }

        match mode {
            Mode::Lint => Ok(Outcome::ReportedMissing),
            Mode::Fix => {
                let header = self.registry.resolve(extension)?;
                let updated = insert_header(&content, header);
                self.store
                    .write(target.path(), &updated)
                    .map_err(TargetError::Write)?;
                Ok(Outcome::Fixed)
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
