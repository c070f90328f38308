//! The traversal seam: whatever enumerates the chains ending at a table

use crate::error::CoreResult;
use crate::table_name::TableName;

/// Enumerates every foreign-key chain ending at a table.
///
/// Implementations walk the schema's foreign-key graph. Each returned chain
/// starts at a referring table and should end at `target`. Avoiding cycles and
/// completeness of the walk are the implementation's responsibility.
pub trait DependencyPathSource {
    /// Collect all chains ending at `target`, referring table first
    fn collect_all_dependency_paths(&self, target: &str) -> CoreResult<Vec<Vec<TableName>>>;
}

/// A fixed list of chains, handed out unchanged regardless of the target.
///
/// Useful when the chains were enumerated elsewhere (another process, a
/// cached run) and only the queries are needed.
#[derive(Debug, Clone, Default)]
pub struct StaticPaths {
    paths: Vec<Vec<TableName>>,
}

impl StaticPaths {
    /// Wrap pre-enumerated chains
    pub fn new<P, C, T>(paths: P) -> Self
    where
        P: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
        T: Into<TableName>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(|chain| chain.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl DependencyPathSource for StaticPaths {
    fn collect_all_dependency_paths(&self, _target: &str) -> CoreResult<Vec<Vec<TableName>>> {
        Ok(self.paths.clone())
    }
}
