//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Herograph CLI - Count what characters share across comics, series, stories and events.
#[derive(Debug, Parser)]
#[command(name = "herograph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HEROGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Character catalog file (JSON array), overrides the configured one
    #[arg(long, global = true, env = "HEROGRAPH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every character name in the catalog
    Names,

    /// Show how many sub-entities of each type a character has
    Show(ShowArgs),

    /// List the sub-entities shared by all given characters
    Common(CommonArgs),

    /// Build the pairwise relationship table
    Table(TableArgs),

    /// Fetch the full character catalog from the remote API
    Fetch(FetchArgs),

    /// Query the remote total for a collection
    Count(CountArgs),
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Exact character name
    pub name: String,
}

/// Arguments for the common command.
#[derive(Debug, Parser)]
pub struct CommonArgs {
    /// Entity type (comics, series, stories, events)
    pub entity: String,

    /// Character names (at least one)
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the table command.
#[derive(Debug, Parser)]
pub struct TableArgs {
    /// Entity type (comics, series, stories, events)
    pub entity: String,

    /// Character names; every catalog character when omitted
    pub names: Vec<String>,

    /// Write the table as CSV to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the fetch command.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// File to write the fetched JSON array to
    #[arg(short, long)]
    pub output: PathBuf,

    /// API settings file (JSON), overrides the configured `[api]` table
    #[arg(long)]
    pub api_config: Option<PathBuf>,
}

/// Arguments for the count command.
#[derive(Debug, Parser)]
pub struct CountArgs {
    /// Collection (characters, comics, series, stories, events)
    pub resource: String,

    /// API settings file (JSON), overrides the configured `[api]` table
    #[arg(long)]
    pub api_config: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
        }
    }
}
