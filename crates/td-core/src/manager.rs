//! All dependency chains referring to one target table

use crate::dependency::TableDependency;
use crate::error::{CoreError, CoreResult};
use crate::source::DependencyPathSource;
use crate::table_name::TableName;
use std::collections::HashSet;
use std::fmt;

/// Holds every dependency chain of the schema that ends at one target table.
///
/// The chains are collected once, at construction, from a
/// [`DependencyPathSource`] and kept in the order the source produced them.
/// The manager is read-only afterwards; build a new one to pick up schema
/// changes.
pub struct DependencyManager<'a, S: DependencyPathSource + ?Sized> {
    target_table: TableName,
    entries: Vec<TableDependency>,
    source: &'a S,
}

impl<'a, S: DependencyPathSource + ?Sized> DependencyManager<'a, S> {
    /// Collect every chain ending at `target_table` from `source`.
    ///
    /// Fails if the source fails or if any chain is malformed; there is no
    /// partial result.
    pub fn new(target_table: &str, source: &'a S) -> CoreResult<Self> {
        let chains = source.collect_all_dependency_paths(target_table)?;
        let entries = chains
            .into_iter()
            .map(|chain| build_entry(target_table, chain))
            .collect::<CoreResult<Vec<_>>>()?;

        log::debug!(
            "Collected {} dependency paths referring to '{}'",
            entries.len(),
            target_table
        );

        Ok(Self {
            target_table: TableName::new(target_table),
            entries,
            source,
        })
    }

    /// Like [`new`](Self::new), but malformed chains are skipped instead of
    /// failing the whole manager.
    ///
    /// Returns the manager built from the valid chains (in source order)
    /// together with the error for each skipped chain. A failing source is
    /// still an error.
    pub fn new_lenient(target_table: &str, source: &'a S) -> CoreResult<(Self, Vec<CoreError>)> {
        let chains = source.collect_all_dependency_paths(target_table)?;
        let mut entries = Vec::with_capacity(chains.len());
        let mut skipped = Vec::new();

        for chain in chains {
            match build_entry(target_table, chain) {
                Ok(dependency) => entries.push(dependency),
                Err(e) => {
                    log::warn!(
                        "Skipping dependency path referring to '{}': {}",
                        target_table,
                        e
                    );
                    skipped.push(e);
                }
            }
        }

        log::debug!(
            "Collected {} dependency paths referring to '{}' ({} skipped)",
            entries.len(),
            target_table,
            skipped.len()
        );

        let manager = Self {
            target_table: TableName::new(target_table),
            entries,
            source,
        };
        Ok((manager, skipped))
    }

    /// The table every managed chain ends at
    pub fn target_table(&self) -> &TableName {
        &self.target_table
    }

    /// The source the chains were collected from
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Number of managed dependencies
    pub fn table_dependency_count(&self) -> usize {
        self.entries.len()
    }

    /// The dependency at `index`, in source order
    pub fn table_dependency(&self, index: usize) -> CoreResult<&TableDependency> {
        self.entries.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            count: self.entries.len(),
        })
    }

    /// All managed dependencies, in source order
    pub fn dependencies(&self) -> &[TableDependency] {
        &self.entries
    }

    /// Iterate over the managed dependencies
    pub fn iter(&self) -> std::slice::Iter<'_, TableDependency> {
        self.entries.iter()
    }

    /// The source table of every dependency, in order.
    ///
    /// A table with several chains to the target shows up once per chain.
    pub fn all_referencing_tables(&self) -> Vec<&TableName> {
        self.entries.iter().map(|d| d.source_table()).collect()
    }

    /// The source tables without repeats, in order of first appearance
    pub fn distinct_referencing_tables(&self) -> Vec<&TableName> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|d| d.source_table())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Dependencies whose chain starts at `referring` and ends at `target`
    pub fn dependencies_between(&self, referring: &str, target: &str) -> Vec<&TableDependency> {
        self.entries
            .iter()
            .filter(|d| d.path().has_path_for(referring, target))
            .collect()
    }

    /// Length of the longest managed chain, 0 when there are none
    pub fn max_level(&self) -> usize {
        self.entries.iter().map(|d| d.level()).max().unwrap_or(0)
    }

    /// True if `referrer` comes before `referenced` in a chain.
    ///
    /// The first chain (in source order) containing both tables decides:
    /// the first occurrence of each is compared and later chains are not
    /// consulted. `false` when no chain contains both.
    pub fn refers_to(&self, referrer: &str, referenced: &str) -> bool {
        self.entries
            .iter()
            .find_map(|d| {
                let path = d.path();
                match (path.position(referrer), path.position(referenced)) {
                    (Some(r), Some(t)) => Some(r < t),
                    _ => None,
                }
            })
            .unwrap_or(false)
    }
}

impl<'m, 'a, S: DependencyPathSource + ?Sized> IntoIterator for &'m DependencyManager<'a, S> {
    type Item = &'m TableDependency;
    type IntoIter = std::slice::Iter<'m, TableDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: DependencyPathSource + ?Sized> fmt::Debug for DependencyManager<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyManager")
            .field("target_table", &self.target_table)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// Wrap one collected chain, checking it ends at the target
fn build_entry(target_table: &str, chain: Vec<TableName>) -> CoreResult<TableDependency> {
    let head = chain.first().map(|t| t.to_string()).unwrap_or_default();
    let dependency = TableDependency::new(&head, chain)?;
    if dependency.referred_table() != target_table {
        return Err(CoreError::TargetMismatch {
            target: target_table.to_string(),
            path: dependency.path().to_string(),
        });
    }
    Ok(dependency)
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
