//! Schema files: the key column usage of one database schema, as YAML

use crate::error::{CoreError, CoreResult};
use crate::key_column_usage::{KeyColumnUsage, KeyColumnUsageGraph};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default schema file name looked up in the working directory
pub const DEFAULT_SCHEMA_FILE: &str = "schema.yml";

/// A schema file
///
/// ```yaml
/// schema: shop
/// key_column_usage:
///   - constraint_name: fk_orders_customer
///     table_name: orders
///     column_name: customer_id
///     referenced_table_name: customers
///     referenced_column_name: id
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Name of the database schema
    #[serde(default)]
    pub schema: Option<String>,

    /// Key column usage rows
    #[serde(default)]
    pub key_column_usage: Vec<KeyColumnUsage>,
}

impl SchemaFile {
    /// Load a schema file from a path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::SchemaNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse a schema file from YAML text
    pub fn parse(content: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the foreign-key graph of this schema
    pub fn to_graph(&self) -> KeyColumnUsageGraph {
        KeyColumnUsageGraph::from_key_column_usage(&self.key_column_usage)
    }

    /// Number of rows describing foreign keys
    pub fn foreign_key_count(&self) -> usize {
        self.key_column_usage
            .iter()
            .filter(|row| row.is_foreign_key())
            .count()
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
