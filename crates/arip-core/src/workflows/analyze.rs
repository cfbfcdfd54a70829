use crate::core::io::loader;
use crate::core::io::models::{Model, ModelIndex, extract_models};
use crate::engine::collaborators::{GeometryEngine, Reporter};
use crate::engine::error::{FileError, FileErrorKind};
use crate::engine::pipeline::{ModelOutcome, Pipeline};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::batch::{BatchSummary, run_batch};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub name: String,
    pub models: Vec<(ModelIndex, ModelOutcome)>,
}

/// Canonical structure name: the file name with up to two extensions removed, so
/// `1abc.pdb` and `1abc.pdb.gz` both become `1abc`.
pub fn structure_name(path: &Path) -> String {
    path.file_stem()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Loads a file and splits it into models.
pub(crate) fn load_models(path: &Path) -> Result<(String, Vec<Model>), FileError> {
    let name = structure_name(path);
    let lines = loader::load_lines(path).map_err(|e| FileError::new(&name, e))?;
    let models = extract_models(lines).map_err(|e| FileError::new(&name, e))?;
    Ok((name, models.into_models()))
}

/// Runs every model of one structure file through the pipeline, in file order.
///
/// # Errors
///
/// Returns [`FileError`] if the file cannot be loaded, its model blocks are corrupted,
/// or any model fails. Models already reported before the failure stay reported.
#[instrument(skip_all, name = "analyze_file", fields(path = %path.display()))]
pub fn analyze_file<G, R>(
    path: &Path,
    pipeline: &Pipeline<'_, G, R>,
    progress: &ProgressReporter,
) -> Result<FileReport, FileError>
where
    G: GeometryEngine,
    R: Reporter<G>,
{
    let (name, models) = load_models(path)?;
    info!(models = models.len(), "Analyzing structure {}.", name);

    let mut outcomes = Vec::with_capacity(models.len());
    for model in models {
        let outcome = pipeline
            .run_model(model.index, &name, &model.lines)
            .map_err(|source| {
                FileError::new(
                    &name,
                    FileErrorKind::Model {
                        index: model.index,
                        source,
                    },
                )
            })?;
        progress.report(Progress::ModelFinish {
            index: model.index,
            outcome,
        });
        outcomes.push((model.index, outcome));
    }

    Ok(FileReport {
        name,
        models: outcomes,
    })
}

/// Analyses many files one after another; failed files are logged and collected.
pub fn analyze_batch<G, R>(
    paths: &[PathBuf],
    pipeline: &Pipeline<'_, G, R>,
    progress: &ProgressReporter,
) -> BatchSummary<FileReport>
where
    G: GeometryEngine,
    R: Reporter<G>,
{
    run_batch(paths, progress, |path| analyze_file(path, pipeline, progress))
}
