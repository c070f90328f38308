//! td CLI - foreign-key dependency chains of a schema

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{paths, referrers, refers_to};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Paths(args) => paths::execute(args, &cli.global),
        cli::Commands::Referrers(args) => referrers::execute(args, &cli.global),
        cli::Commands::RefersTo(args) => refers_to::execute(args, &cli.global),
    }
}
