use crate::engine::error::FileError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::analyze::structure_name;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Results of a batch run: what worked and what did not, in input order.
#[derive(Debug)]
pub struct BatchSummary<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<FileError>,
}

impl<T> Default for BatchSummary<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T> BatchSummary<T> {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies `process` to every path in order. A failing file is logged and recorded,
/// then the batch moves on to the next one.
pub(crate) fn run_batch<T, F>(
    paths: &[PathBuf],
    progress: &ProgressReporter,
    mut process: F,
) -> BatchSummary<T>
where
    F: FnMut(&Path) -> Result<T, FileError>,
{
    progress.report(Progress::BatchStart {
        total_files: paths.len() as u64,
    });

    let mut summary = BatchSummary::default();
    for path in paths {
        progress.report(Progress::FileStart {
            name: structure_name(path),
        });
        match process(path) {
            Ok(value) => {
                progress.report(Progress::FileFinish);
                summary.succeeded.push(value);
            }
            Err(e) => {
                error!("{}", e);
                progress.report(Progress::FileFailed {
                    name: e.name.clone(),
                });
                summary.failed.push(e);
            }
        }
    }

    info!(
        succeeded = summary.succeeded.len(),
        failed = summary.failed.len(),
        "Batch finished."
    );
    progress.report(Progress::BatchFinish);
    summary
}
