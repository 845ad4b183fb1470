//! Command-line parsing for the gear ratio calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! calculation code. Tooth counts stay raw strings here; they are normalized by
//! the teeth parser once a command runs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::ComponentKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gears", version, about = "Bicycle gear ratio calculator")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute gear tables for front and rear tooth counts.
    Calc(CalcArgs),
    /// Print only the overall range percentage.
    Range(TeethArgs),
    /// Compute gear tables for two catalog components.
    Compare(CompareArgs),
    /// Show a saved configuration with its gear tables.
    Show(ShowArgs),
    /// List catalog components.
    Components(ComponentsArgs),
    /// List saved configurations with their overall range.
    Summary(CatalogArgs),
    /// Overall range for every chainring × cassette pairing.
    Matrix(CatalogArgs),
    /// Strictly validate a tooth list.
    Validate(ValidateArgs),
}

impl Command {
    /// Whether the command reads the preference window or catalog settings.
    /// `range` and `validate` only need the log filter.
    pub fn reads_settings(&self) -> bool {
        !matches!(self, Command::Range(_) | Command::Validate(_))
    }
}

/// Raw front/rear tooth counts.
///
/// Accepts `50,34`, `"[50, 34]"` or a single number.
#[derive(Debug, Args, Clone)]
pub struct TeethArgs {
    /// Chainring tooth counts.
    #[arg(short, long, value_name = "TEETH")]
    pub front: String,

    /// Cassette tooth counts (any order).
    #[arg(short, long, value_name = "TEETH")]
    pub rear: String,
}

/// Preference window overrides.
#[derive(Debug, Args, Clone, Default)]
pub struct WindowArgs {
    /// Lower bound of the comfortable ratio window.
    #[arg(long)]
    pub min_ratio: Option<f64>,

    /// Upper bound of the comfortable ratio window.
    #[arg(long)]
    pub max_ratio: Option<f64>,

    /// Skip ratio classification.
    #[arg(long, conflicts_with_all = ["min_ratio", "max_ratio"])]
    pub no_classify: bool,
}

/// Catalog location.
#[derive(Debug, Args, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file (defaults to GEARS_CATALOG, then the built-in catalog).
    #[arg(long, value_name = "JSON")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub teeth: TeethArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Export the calculation to JSON.
    #[arg(long = "export-json", value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Export one row per gear to CSV.
    #[arg(long = "export-csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Chainring id or name.
    #[arg(short, long)]
    pub front: String,

    /// Cassette id or name.
    #[arg(short, long)]
    pub rear: String,

    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Configuration id.
    pub id: String,

    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ComponentsArgs {
    /// Only list one kind of component.
    #[arg(long, value_enum)]
    pub kind: Option<ComponentKind>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ValidateArgs {
    /// Tooth counts to validate.
    #[arg(short, long, value_name = "TEETH")]
    pub teeth: String,

    /// Declared speed count; the list must have exactly this many entries.
    #[arg(long)]
    pub speed: Option<u32>,
}
