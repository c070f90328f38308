//! Paths command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use td_core::{DependencyManager, DependencyPathSource, TableName};

use crate::cli::{GlobalArgs, OutputFormat, PathsArgs};
use crate::commands::common::{build_manager, load_graph};

/// Execute the paths command
pub(crate) fn execute(args: &PathsArgs, global: &GlobalArgs) -> Result<()> {
    let graph = load_graph(global)?;
    let manager = build_manager(&args.table, &graph, global)?;

    print!("{}", render(&manager, args.output)?);
    Ok(())
}

/// One dependency chain for display
#[derive(Debug, Serialize)]
struct PathInfo<'a> {
    source_table: &'a TableName,
    level: usize,
    path: &'a [TableName],
}

/// Render the chains of `manager` in the requested format
fn render<S: DependencyPathSource + ?Sized>(
    manager: &DependencyManager<'_, S>,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(render_text(manager)),
        OutputFormat::Json => {
            let infos: Vec<PathInfo<'_>> = manager
                .iter()
                .map(|d| PathInfo {
                    source_table: d.source_table(),
                    level: d.level(),
                    path: d.path().elements(),
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&infos).context("Failed to serialize to JSON")?;
            Ok(format!("{}\n", json))
        }
    }
}

fn render_text<S: DependencyPathSource + ?Sized>(manager: &DependencyManager<'_, S>) -> String {
    if manager.table_dependency_count() == 0 {
        return format!("No tables refer to {}\n", manager.target_table());
    }

    let mut out = String::new();
    for dependency in manager {
        out.push_str(&dependency.path().to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} dependency paths refer to {}\n",
        manager.table_dependency_count(),
        manager.target_table()
    ));
    out
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
