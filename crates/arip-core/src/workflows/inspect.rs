use crate::core::classifier::Classifier;
use crate::core::filter;
use crate::core::io::models::ModelIndex;
use crate::core::lookup::{LookupTable, ResidueClass};
use crate::core::models::table::PartitionedTable;
use crate::engine::error::{FileError, FileErrorKind, ModelError};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::analyze::load_models;
use crate::workflows::batch::{BatchSummary, run_batch};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionCounts {
    pub amino_acid: usize,
    pub nucleotide: usize,
    pub non_standard: usize,
}

impl PartitionCounts {
    pub fn total(&self) -> usize {
        self.amino_acid + self.nucleotide + self.non_standard
    }
}

impl From<&PartitionedTable> for PartitionCounts {
    fn from(table: &PartitionedTable) -> Self {
        Self {
            amino_acid: table.partition(ResidueClass::AminoAcid).len(),
            nucleotide: table.partition(ResidueClass::Nucleotide).len(),
            non_standard: table.partition(ResidueClass::NonStandard).len(),
        }
    }
}

/// Classification result of one model. `partitions` is `None` when no atom passed
/// the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInspection {
    pub index: ModelIndex,
    pub partitions: Option<PartitionedTable>,
}

impl ModelInspection {
    pub fn counts(&self) -> Option<PartitionCounts> {
        self.partitions.as_ref().map(PartitionCounts::from)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileInspection {
    pub name: String,
    pub models: Vec<ModelInspection>,
}

impl FileInspection {
    /// Sum of the partition counts over every non-empty model.
    pub fn counts(&self) -> PartitionCounts {
        self.models
            .iter()
            .filter_map(ModelInspection::counts)
            .fold(PartitionCounts::default(), |acc, c| PartitionCounts {
                amino_acid: acc.amino_acid + c.amino_acid,
                nucleotide: acc.nucleotide + c.nucleotide,
                non_standard: acc.non_standard + c.non_standard,
            })
    }
}

fn inspect_model(
    classifier: &Classifier<'_>,
    lines: &[String],
    verbose: bool,
) -> Result<Option<PartitionedTable>, ModelError> {
    let records = filter::admit(lines)?;
    if records.is_empty() {
        return Ok(None);
    }
    Ok(Some(classifier.classify(&records, verbose)?))
}

/// Loads, filters and classifies every model of a structure file without invoking any
/// geometry step.
///
/// # Errors
///
/// Returns [`FileError`] on the same conditions as the analysis workflow: unreadable
/// input, corrupted model blocks, malformed records or unresolvable atoms.
#[instrument(skip_all, name = "inspect_file", fields(path = %path.display()))]
pub fn inspect_file(
    path: &Path,
    table: &LookupTable,
    verbose: bool,
) -> Result<FileInspection, FileError> {
    let (name, models) = load_models(path)?;
    let classifier = Classifier::new(table);

    let mut inspections = Vec::with_capacity(models.len());
    for model in models {
        let partitions = inspect_model(&classifier, &model.lines, verbose).map_err(|source| {
            FileError::new(
                &name,
                FileErrorKind::Model {
                    index: model.index,
                    source,
                },
            )
        })?;
        if partitions.is_none() {
            info!("Skipping file {} due to no valid atoms", model.index.label(&name));
        }
        inspections.push(ModelInspection {
            index: model.index,
            partitions,
        });
    }

    Ok(FileInspection {
        name,
        models: inspections,
    })
}

/// Inspects many files one after another; failed files are logged and collected.
pub fn inspect_batch(
    paths: &[PathBuf],
    table: &LookupTable,
    verbose: bool,
    progress: &ProgressReporter,
) -> BatchSummary<FileInspection> {
    run_batch(paths, progress, |path| {
        let inspection = inspect_file(path, table, verbose)?;
        progress.report(Progress::Message(format!(
            "{}: {} model(s)",
            inspection.name,
            inspection.models.len()
        )));
        Ok(inspection)
    })
}
