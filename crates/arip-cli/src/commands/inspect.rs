use crate::cli::InspectArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::utils::inputs::expand_inputs;
use crate::utils::progress::CliProgressHandler;
use arip::core::lookup::LookupTable;
use arip::engine::progress::ProgressReporter;
use arip::workflows::batch::BatchSummary;
use arip::workflows::inspect::{FileInspection, PartitionCounts, inspect_batch};
use std::fmt::Write;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args)?;

    let table = load_table(&config)?;
    let paths = expand_inputs(&config.inputs, &config.extensions)?;
    if paths.is_empty() {
        return Err(CliError::Argument(
            "No structure files found in the given inputs.".to_string(),
        ));
    }
    info!("Inspecting {} structure file(s).", paths.len());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let summary = inspect_batch(&paths, &table, false, &reporter);

    for inspection in &summary.succeeded {
        print!("{}", format_inspection(inspection, config.dump));
    }
    finish(&summary)
}

fn load_table(config: &AppConfig) -> Result<LookupTable> {
    let table = match &config.lookup_path {
        Some(path) => {
            info!("Loading lookup table from {:?}", path);
            LookupTable::load(path)?
        }
        None => LookupTable::builtin()?,
    };
    Ok(table.with_probe_radius(config.probe_radius))
}

fn format_inspection(inspection: &FileInspection, dump: bool) -> String {
    let mut out = String::new();
    for model in &inspection.models {
        let label = model.index.label(&inspection.name);
        match &model.partitions {
            Some(partitions) => {
                let counts = PartitionCounts::from(partitions);
                let _ = writeln!(
                    out,
                    "{}: {} atoms (amino acid {}, nucleotide {}, non-standard {})",
                    label,
                    counts.total(),
                    counts.amino_acid,
                    counts.nucleotide,
                    counts.non_standard
                );
                if dump {
                    out.push_str(&partitions.render());
                }
            }
            None => {
                let _ = writeln!(out, "{}: no valid atoms", label);
            }
        }
    }
    out
}

fn finish(summary: &BatchSummary<FileInspection>) -> Result<()> {
    for failure in &summary.failed {
        eprintln!("✗ {}", failure);
    }
    println!(
        "Inspected {} file(s): {} succeeded, {} failed.",
        summary.total(),
        summary.succeeded.len(),
        summary.failed.len()
    );
    if summary.is_clean() {
        Ok(())
    } else {
        Err(CliError::Batch {
            failed: summary.failed.len(),
            total: summary.total(),
        })
    }
}
