use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "SolvSieve CLI - Curate solvation free-energy data sets by functional group and stage molecular-simulation estimation requests.",
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

    /// Path to the configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a data set's unique molecules into functional-group categories.
    Classify(ClassifyArgs),
    /// Filter a data set down to one functional-group category (or an explicit identifier list).
    Filter(FilterArgs),
    /// Stage an estimation request: filter to the target category and write the request files.
    Stage(StageArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the input data set (.json, or .csv for a FreeSolv-style table).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the full per-category identifier mapping to this JSON file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Path to the input data set (.json, or .csv for a FreeSolv-style table).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the filtered data set.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Functional-group category to keep (e.g. 'alcohols', 'terminal_alkynes').
    #[arg(short = 'C', long, value_name = "NAME", conflicts_with = "smiles")]
    pub category: Option<String>,

    /// Explicit component identifiers to keep instead of a category.
    #[arg(short, long, value_name = "SMILES", num_args(1..))]
    pub smiles: Vec<String>,
}

/// Arguments for the `stage` subcommand.
#[derive(Args, Debug)]
pub struct StageArgs {
    /// Path to the input data set (.json, or .csv for a FreeSolv-style table).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory the staged request files are written into.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Functional-group category to stage, overriding the config file.
    #[arg(short = 'C', long, value_name = "NAME")]
    pub category: Option<String>,

    /// Main force-field file (.offxml). Falls back to the OFF environment variable.
    #[arg(long, value_name = "PATH")]
    pub force_field: Option<PathBuf>,

    /// Water-model force-field file (.offxml). Falls back to the WATERFF environment variable.
    #[arg(long, value_name = "PATH")]
    pub water_force_field: Option<PathBuf>,

    /// Override the number of molecules per simulation box.
    #[arg(short, long, value_name = "INT")]
    pub n_molecules: Option<usize>,
}
