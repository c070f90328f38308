//! Foreign-key graph built from `KEY_COLUMN_USAGE` rows
//!
//! This is an in-memory [`DependencyPathSource`]: it holds the schema's
//! foreign keys as a directed graph (referring table -> referenced table) and
//! enumerates every simple chain ending at a requested table.

use crate::error::CoreResult;
use crate::source::DependencyPathSource;
use crate::table_name::TableName;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One row of the information schema's `KEY_COLUMN_USAGE` view.
///
/// Rows of primary and unique keys have no referenced table and carry no
/// dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyColumnUsage {
    /// Name of the key constraint
    #[serde(default)]
    pub constraint_name: Option<String>,

    /// Table holding the key column
    pub table_name: TableName,

    /// The key column
    #[serde(default)]
    pub column_name: Option<String>,

    /// Table the foreign key points at
    #[serde(default)]
    pub referenced_table_name: Option<TableName>,

    /// Column the foreign key points at
    #[serde(default)]
    pub referenced_column_name: Option<String>,
}

impl KeyColumnUsage {
    /// A bare foreign key from `table` to `referenced_table`
    pub fn foreign_key(table: impl Into<TableName>, referenced_table: impl Into<TableName>) -> Self {
        Self {
            constraint_name: None,
            table_name: table.into(),
            column_name: None,
            referenced_table_name: Some(referenced_table.into()),
            referenced_column_name: None,
        }
    }

    /// True if this row belongs to a foreign key
    pub fn is_foreign_key(&self) -> bool {
        self.referenced_table_name.is_some()
    }
}

/// Directed graph of foreign keys between tables
#[derive(Debug, Default)]
pub struct KeyColumnUsageGraph {
    /// Edges go from the referring table to the referenced table
    graph: DiGraph<TableName, ()>,

    /// Map from table name to node index
    node_map: HashMap<TableName, NodeIndex>,
}

impl KeyColumnUsageGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from key column usage rows.
    ///
    /// Every table mentioned becomes a node; every foreign-key row adds an
    /// edge. Multi-column keys and repeated constraints between the same two
    /// tables collapse into one edge.
    pub fn from_key_column_usage(rows: &[KeyColumnUsage]) -> Self {
        let mut graph = Self::new();
        for row in rows {
            match &row.referenced_table_name {
                Some(referenced) => graph.add_reference(&row.table_name, referenced),
                None => {
                    graph.add_table(&row.table_name);
                }
            }
        }

        log::debug!(
            "Built key column usage graph: {} tables, {} references",
            graph.graph.node_count(),
            graph.graph.edge_count()
        );

        graph
    }

    /// Add a table to the graph
    pub fn add_table(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            idx
        } else {
            let table = TableName::new(name);
            let idx = self.graph.add_node(table.clone());
            self.node_map.insert(table, idx);
            idx
        }
    }

    /// Record that `table` refers to `referenced` through a foreign key
    pub fn add_reference(&mut self, table: &str, referenced: &str) {
        let from_idx = self.add_table(table);
        let to_idx = self.add_table(referenced);
        self.graph.update_edge(from_idx, to_idx, ());
    }

    /// All tables, in the order they were first seen
    pub fn tables(&self) -> Vec<&TableName> {
        self.graph
            .node_indices()
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Check if a table exists in the graph
    pub fn contains(&self, table: &str) -> bool {
        self.node_map.contains_key(table)
    }

    /// Tables with a foreign key directly to `table`
    pub fn direct_referrers(&self, table: &str) -> Vec<&TableName> {
        let Some(&idx) = self.node_map.get(table) else {
            return Vec::new();
        };
        self.sorted_referrers(idx)
            .into_iter()
            .map(|r| &self.graph[r])
            .collect()
    }

    /// Incoming neighbours in insertion order, without duplicates
    fn sorted_referrers(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut referrers: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect();
        referrers.sort();
        referrers.dedup();
        referrers
    }

    /// Walk referrers backwards from the end of `trail`, recording the chain
    /// each new table opens. Tables already on the trail are not revisited.
    fn collect_chains_dfs(
        &self,
        current: NodeIndex,
        trail: &mut Vec<NodeIndex>,
        on_trail: &mut HashSet<NodeIndex>,
        chains: &mut Vec<Vec<TableName>>,
    ) {
        for referrer in self.sorted_referrers(current) {
            if !on_trail.insert(referrer) {
                continue;
            }
            trail.push(referrer);
            chains.push(trail.iter().rev().map(|&i| self.graph[i].clone()).collect());

            self.collect_chains_dfs(referrer, trail, on_trail, chains);

            trail.pop();
            on_trail.remove(&referrer);
        }
    }
}

impl DependencyPathSource for KeyColumnUsageGraph {
    fn collect_all_dependency_paths(&self, target: &str) -> CoreResult<Vec<Vec<TableName>>> {
        let Some(&target_idx) = self.node_map.get(target) else {
            log::debug!("Table '{}' is not part of any foreign key", target);
            return Ok(Vec::new());
        };

        let mut chains = Vec::new();
        let mut trail = vec![target_idx];
        let mut on_trail = HashSet::from([target_idx]);
        self.collect_chains_dfs(target_idx, &mut trail, &mut on_trail, &mut chains);

        log::debug!(
            "Enumerated {} dependency paths ending at '{}'",
            chains.len(),
            target
        );
        Ok(chains)
    }
}

#[cfg(test)]
#[path = "key_column_usage_test.rs"]
mod tests;
