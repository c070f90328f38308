//! Error types for td-core

use thiserror::Error;

/// Core error type for table dependency chains
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Dependency path with fewer than two tables
    #[error("[E001] Invalid dependency path [{elements}]: a path needs at least two tables")]
    InvalidPath { elements: String },

    /// E002: Table dependency built from a chain with fewer than two tables
    #[error("[E002] Invalid table dependency [{elements}]: the path is too short")]
    InvalidDependency { elements: String },

    /// E003: Source table does not start the chain
    #[error("[E003] Table dependency source '{source_table}' does not match the first table of its path '{first}'")]
    SourceMismatch { source_table: String, first: String },

    /// E004: Indexed access past the end of the managed dependencies
    #[error("[E004] Table dependency index {index} out of range (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// E005: Chain does not end at the manager's target table
    #[error("[E005] Dependency path '{path}' does not end at target table '{target}'")]
    TargetMismatch { target: String, path: String },

    /// E006: The traversal collaborator failed to enumerate chains
    #[error("[E006] Failed to collect dependency paths: {message}")]
    Traversal { message: String },

    /// E007: Schema file not found
    #[error("[E007] Schema file not found: {path}")]
    SchemaNotFound { path: String },

    /// E008: IO error with file path context
    #[error("[E008] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E009: Schema/YAML parse error
    #[error("[E009] Schema parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Render a chain of names for error messages (`a, b, c`).
pub(crate) fn describe_elements<S: AsRef<str>>(elements: &[S]) -> String {
    elements
        .iter()
        .map(|e| e.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
