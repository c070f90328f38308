//! CLI command implementations

pub(crate) mod common;
pub(crate) mod paths;
pub(crate) mod referrers;
pub(crate) mod refers_to;
