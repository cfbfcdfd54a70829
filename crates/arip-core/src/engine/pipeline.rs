use crate::core::classifier::Classifier;
use crate::core::filter;
use crate::core::io::models::ModelIndex;
use crate::core::io::record::RecordView;
use crate::core::lookup::LookupTable;
use crate::engine::collaborators::{GeometryEngine, ModelReport, Reporter, VolumeOutcome};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::{ModelError, Step};
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No atom line of the model passed the admissibility filter.
    NoValidAtoms,
    /// The volume step signalled resource exhaustion.
    ResourceExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelOutcome {
    Completed { elapsed: Duration },
    Skipped(SkipReason),
}

/// Drives one model at a time through classification, geometry and reporting.
pub struct Pipeline<'a, G, R> {
    table: &'a LookupTable,
    geometry: &'a G,
    reporter: &'a R,
    config: &'a AnalysisConfig,
}

impl<'a, G, R> Pipeline<'a, G, R>
where
    G: GeometryEngine,
    R: Reporter<G>,
{
    pub fn new(
        table: &'a LookupTable,
        geometry: &'a G,
        reporter: &'a R,
        config: &'a AnalysisConfig,
    ) -> Self {
        Self {
            table,
            geometry,
            reporter,
            config,
        }
    }

    /// Analyses one model.
    ///
    /// Models without admissible atoms are skipped before any collaborator is called.
    /// A resource-exhaustion signal from the volume step skips the model before the
    /// surface step and the report.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for malformed records, atoms missing from the lookup table
    /// and collaborator failures.
    #[instrument(skip_all, name = "model_pipeline", fields(model = %index.label(structure_name)))]
    pub fn run_model<S: AsRef<str>>(
        &self,
        index: ModelIndex,
        structure_name: &str,
        lines: &[S],
    ) -> Result<ModelOutcome, ModelError> {
        let records = filter::admit(lines)?;
        if records.is_empty() {
            info!(
                "Skipping file {} due to no valid atoms",
                index.label(structure_name)
            );
            return Ok(ModelOutcome::Skipped(SkipReason::NoValidAtoms));
        }

        let outcome = self.analyze(index, structure_name, &records)?;
        if let ModelOutcome::Completed { elapsed } = outcome {
            info!(
                "The PDB {} run OK, time cost: {:.3}s",
                index.label(structure_name),
                elapsed.as_secs_f64()
            );
        }
        Ok(outcome)
    }

    fn analyze(
        &self,
        index: ModelIndex,
        structure_name: &str,
        records: &[RecordView<'_>],
    ) -> Result<ModelOutcome, ModelError> {
        let start = Instant::now();
        let verbose = self.config.verbose();

        let partitioned = Classifier::new(self.table).classify(records, verbose)?;

        let dihedral = if partitioned.amino_acid.is_empty() {
            None
        } else {
            let atom_lines = records
                .iter()
                .map(RecordView::line)
                .collect::<Vec<_>>()
                .join("\n");
            self.geometry
                .dihedral(structure_name, &atom_lines, verbose)
                .map_err(|source| ModelError::Collaborator {
                    step: Step::Dihedral,
                    source,
                })?
        };

        let atoms = partitioned.combined();
        let sampling = &self.config.sampling;
        let volume_outcome = self
            .geometry
            .volume(&atoms, sampling.density, sampling.interval)
            .map_err(|source| ModelError::Collaborator {
                step: Step::Volume,
                source,
            })?;

        let (contacts, volume) = match volume_outcome {
            VolumeOutcome::Computed { contacts, volume } => (contacts, volume),
            VolumeOutcome::Exhausted => {
                warn!(
                    "Skipping file {} due to insufficient memory or no valid atoms",
                    index.label(structure_name)
                );
                return Ok(ModelOutcome::Skipped(SkipReason::ResourceExhausted));
            }
        };

        let surface = self
            .geometry
            .surface(&sampling.reference_path, &atoms.contact_atoms(), &contacts)
            .map_err(|source| ModelError::Collaborator {
                step: Step::Surface,
                source,
            })?;

        let report: ModelReport<'_, G> = ModelReport {
            index,
            structure_name,
            dihedral: dihedral.as_ref(),
            surface: &surface,
            volume: &volume,
        };
        self.reporter
            .write_report(&report, &self.config.report)
            .map_err(|source| ModelError::Collaborator {
                step: Step::Report,
                source,
            })?;

        Ok(ModelOutcome::Completed {
            elapsed: start.elapsed(),
        })
    }
}
