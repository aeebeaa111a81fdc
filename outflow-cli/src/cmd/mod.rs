//! CLI command implementations.

pub mod datasources;
pub mod render;
pub mod schema;
