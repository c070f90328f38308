//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use td_core::{DependencyManager, KeyColumnUsageGraph, SchemaFile};

use crate::cli::GlobalArgs;

/// Load the schema file named by the global args and build its foreign-key graph
pub(crate) fn load_graph(global: &GlobalArgs) -> Result<KeyColumnUsageGraph> {
    let schema = SchemaFile::load(&global.schema)
        .with_context(|| format!("Failed to load schema file {}", global.schema.display()))?;

    if global.verbose {
        eprintln!(
            "[verbose] Loaded {} foreign key columns from {}",
            schema.foreign_key_count(),
            global.schema.display()
        );
    }

    Ok(schema.to_graph())
}

/// Collect every chain ending at `table`
pub(crate) fn build_manager<'a>(
    table: &str,
    graph: &'a KeyColumnUsageGraph,
    global: &GlobalArgs,
) -> Result<DependencyManager<'a, KeyColumnUsageGraph>> {
    if global.verbose && !graph.contains(table) {
        eprintln!("[verbose] Table '{}' does not appear in any key", table);
    }

    DependencyManager::new(table, graph)
        .with_context(|| format!("Failed to collect dependency paths for '{}'", table))
}
