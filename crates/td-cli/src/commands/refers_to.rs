//! Refers-to command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, RefersToArgs};
use crate::commands::common::{build_manager, load_graph};

/// Execute the refers-to command
pub(crate) fn execute(args: &RefersToArgs, global: &GlobalArgs) -> Result<()> {
    let graph = load_graph(global)?;
    let manager = build_manager(&args.table, &graph, global)?;

    let refers = manager.refers_to(&args.referrer, &args.referenced);
    if global.verbose {
        eprintln!(
            "[verbose] Searched {} dependency paths ending at '{}'",
            manager.table_dependency_count(),
            manager.target_table()
        );
    }
    println!("{}", refers);
    Ok(())
}
