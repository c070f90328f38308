//! td-core - Core library for table dependency chains
//!
//! This crate models chains of foreign-key dependencies ending at one target
//! table: the single chain ([`DependencyPath`]), a source table's dependency
//! through it ([`TableDependency`]) and the set of all chains referring to a
//! target ([`DependencyManager`]). Chains are enumerated by a
//! [`DependencyPathSource`], such as the in-memory [`KeyColumnUsageGraph`].

pub mod dependency;
pub mod error;
pub mod key_column_usage;
pub mod manager;
pub mod path;
pub mod schema;
pub mod source;
pub mod table_name;

pub use dependency::TableDependency;
pub use error::{CoreError, CoreResult};
pub use key_column_usage::{KeyColumnUsage, KeyColumnUsageGraph};
pub use manager::DependencyManager;
pub use path::DependencyPath;
pub use schema::SchemaFile;
pub use source::{DependencyPathSource, StaticPaths};
pub use table_name::TableName;
