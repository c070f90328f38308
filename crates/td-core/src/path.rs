//! A single multi-hop foreign-key dependency chain

use crate::error::{describe_elements, CoreError, CoreResult};
use crate::table_name::TableName;
use serde::Serialize;
use std::fmt;

/// Separator used when rendering a chain as text
pub const PATH_SEPARATOR: &str = " -> ";

/// An ordered chain of tables from a referring table to a target table.
///
/// The first element is the table the dependency starts from, the last one is
/// the table it refers to. Any number of intermediate tables may sit in
/// between. A path always holds at least two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyPath {
    elements: Vec<TableName>,
}

impl DependencyPath {
    /// Build a path from its tables, source first.
    pub fn new<I, T>(elements: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TableName>,
    {
        let elements: Vec<TableName> = elements.into_iter().map(Into::into).collect();
        if elements.len() < 2 {
            return Err(CoreError::InvalidPath {
                elements: describe_elements(&elements),
            });
        }
        Ok(Self { elements })
    }

    /// The tables of this path, source first
    pub fn elements(&self) -> &[TableName] {
        &self.elements
    }

    /// The table this path refers to (last element)
    pub fn target_table(&self) -> &TableName {
        &self.elements[self.elements.len() - 1]
    }

    /// The table this path starts from (first element)
    pub fn referring_table(&self) -> &TableName {
        &self.elements[0]
    }

    /// True if the path starts at `referring` and ends at `target`
    pub fn has_path_for(&self, referring: &str, target: &str) -> bool {
        self.referring_table() == referring && self.target_table() == target
    }

    /// True if `other` is exactly this chain: same length, same tables in the
    /// same order.
    pub fn equals<S: AsRef<str>>(&self, other: &[S]) -> bool {
        self.elements.len() == other.len()
            && self
                .elements
                .iter()
                .zip(other)
                .all(|(mine, theirs)| mine.as_str() == theirs.as_ref())
    }

    /// [`equals`](Self::equals) against another path
    pub fn equals_path(&self, other: &DependencyPath) -> bool {
        self.equals(other.elements())
    }

    /// Index of the first occurrence of `table` in the chain
    pub fn position(&self, table: &str) -> Option<usize> {
        self.elements.iter().position(|t| t == table)
    }

    /// True if `table` appears anywhere in the chain
    pub fn contains(&self, table: &str) -> bool {
        self.position(table).is_some()
    }

    /// Number of tables in the chain
    pub fn level(&self) -> usize {
        self.elements.len()
    }

    /// Extend the target end of the chain by one table
    pub fn append_to_path(&mut self, table: impl Into<TableName>) {
        self.elements.push(table.into());
    }
}

impl fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, table) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(PATH_SEPARATOR)?;
            }
            f.write_str(table)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
