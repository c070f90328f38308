//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// td - Foreign-key dependency chains between the tables of a schema
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the schema file (key column usage as YAML)
    #[arg(short, long, global = true, default_value = td_core::schema::DEFAULT_SCHEMA_FILE)]
    pub schema: PathBuf,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every dependency chain ending at a table
    Paths(PathsArgs),

    /// List the tables referring to a table, directly or indirectly
    Referrers(ReferrersArgs),

    /// Check whether one table comes before another in a chain to a table
    RefersTo(RefersToArgs),
}

/// Output formats shared by the listing commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per entry
    Text,
    /// JSON array
    Json,
}

/// Arguments for the paths command
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Target table
    pub table: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the referrers command
#[derive(Args, Debug)]
pub struct ReferrersArgs {
    /// Target table
    pub table: String,

    /// List each referring table once
    #[arg(long)]
    pub distinct: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the refers-to command
#[derive(Args, Debug)]
pub struct RefersToArgs {
    /// Target table whose chains are searched
    pub table: String,

    /// Table expected earlier in the chain
    pub referrer: String,

    /// Table expected later in the chain
    pub referenced: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
