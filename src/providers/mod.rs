//! Provider implementations.

pub mod databricks;
