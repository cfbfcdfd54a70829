use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "ARIP CLI - Loads protein and nucleic-acid structures, splits them into models and classifies every atom against a physicochemical lookup table.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, split and classify structure files without running any geometry step.
    Inspect(InspectArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Structure files (.pdb, .ent, optionally gzip-compressed) or directories containing them.
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the atom property table with a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub lookup: Option<PathBuf>,

    /// Override the water probe radius in Angstroms.
    #[arg(short = 'r', long, value_name = "FLOAT")]
    pub probe_radius: Option<f64>,

    /// Print the classified atom tables of every model.
    #[arg(long)]
    pub dump: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S lookup.probe-radius=1.2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
