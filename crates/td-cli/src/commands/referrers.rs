//! Referrers command implementation

use anyhow::{Context, Result};
use td_core::{DependencyManager, DependencyPathSource};

use crate::cli::{GlobalArgs, OutputFormat, ReferrersArgs};
use crate::commands::common::{build_manager, load_graph};

/// Execute the referrers command
pub(crate) fn execute(args: &ReferrersArgs, global: &GlobalArgs) -> Result<()> {
    let graph = load_graph(global)?;
    let manager = build_manager(&args.table, &graph, global)?;

    print!("{}", render(&manager, args.distinct, args.output)?);
    Ok(())
}

/// Render the referring tables, one per chain unless `distinct`
fn render<S: DependencyPathSource + ?Sized>(
    manager: &DependencyManager<'_, S>,
    distinct: bool,
    output: OutputFormat,
) -> Result<String> {
    let tables = if distinct {
        manager.distinct_referencing_tables()
    } else {
        manager.all_referencing_tables()
    };

    match output {
        OutputFormat::Text => Ok(tables.iter().map(|t| format!("{}\n", t)).collect()),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&tables).context("Failed to serialize to JSON")?;
            Ok(format!("{}\n", json))
        }
    }
}

#[cfg(test)]
#[path = "referrers_test.rs"]
mod tests;
