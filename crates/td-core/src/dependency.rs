//! A table's dependency on the target table through one chain

use crate::error::{describe_elements, CoreError, CoreResult};
use crate::path::DependencyPath;
use crate::table_name::TableName;
use serde::Serialize;

/// The dependency of one source table on a target table, through one chain.
///
/// The source table is always the first table of the owned path. It is read
/// from the path rather than stored next to it, so growing the path with
/// [`append_to_path`](Self::append_to_path) can never make the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDependency {
    path: DependencyPath,
}

impl TableDependency {
    /// Build a dependency of `source_table` along `elements`.
    ///
    /// `elements` must hold at least two tables and start with `source_table`.
    pub fn new<I, T>(source_table: &str, elements: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TableName>,
    {
        let elements: Vec<TableName> = elements.into_iter().map(Into::into).collect();
        if elements.len() < 2 {
            return Err(CoreError::InvalidDependency {
                elements: describe_elements(&elements),
            });
        }
        if elements[0] != source_table {
            return Err(CoreError::SourceMismatch {
                source_table: source_table.to_string(),
                first: elements[0].to_string(),
            });
        }

        Ok(Self {
            path: DependencyPath::new(elements)?,
        })
    }

    /// Wrap an already valid path
    pub fn from_path(path: DependencyPath) -> Self {
        Self { path }
    }

    /// The managed path
    pub fn path(&self) -> &DependencyPath {
        &self.path
    }

    /// The table the dependency starts from
    pub fn source_table(&self) -> &TableName {
        self.path.referring_table()
    }

    /// The table referred to (last table of the path)
    pub fn referred_table(&self) -> &TableName {
        self.path.target_table()
    }

    /// The referring table (first table of the path)
    pub fn referring_table(&self) -> &TableName {
        self.path.referring_table()
    }

    /// Add a new target table to the end of the path
    pub fn append_to_path(&mut self, table: impl Into<TableName>) {
        self.path.append_to_path(table);
    }

    /// True if `elements` is exactly this dependency's chain
    pub fn equals<S: AsRef<str>>(&self, elements: &[S]) -> bool {
        self.path.equals(elements)
    }

    /// Length of the path
    pub fn level(&self) -> usize {
        self.path.level()
    }
}

#[cfg(test)]
#[path = "dependency_test.rs"]
mod tests;
