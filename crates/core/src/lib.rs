//! Shared types, errors and configuration for the costar workspace.
//!
//! Everything here is plain data: the relation table handed from ingest to
//! the graph builder, the error taxonomy, and the TOML-backed configuration.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod relation;

pub use config::{BuildOptions, BuildStrategy, CostarConfig, DataPaths, DEFAULT_CENTER};
pub use error::{CostarError, CostarResult};
pub use relation::{LabelSet, RelationTable};
