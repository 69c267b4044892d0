//! Error taxonomy for costar.
//!
//! Query-level "not found" outcomes (unreachable actors, empty ranges) are
//! plain data and never surface here. These variants cover precondition
//! violations and the fallible edges of the system: file and config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the workspace.
pub type CostarResult<T> = Result<T, CostarError>;

/// Errors raised by the graph engine, ingest and configuration layers.
#[derive(Debug, Error)]
pub enum CostarError {
    /// A query or traversal referenced a vertex that is not in the graph.
    #[error("vertex not found: {vertex}")]
    VertexNotFound {
        /// The missing vertex identity.
        vertex: String,
    },

    /// An edge was inserted before both of its endpoints.
    #[error("cannot insert edge {src} -> {dst}: endpoint missing")]
    MissingEndpoint {
        /// Source vertex of the rejected edge.
        src: String,
        /// Target vertex of the rejected edge.
        dst: String,
    },

    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The record reader failed below the record level.
    #[error("malformed input in {}: {source}", path.display())]
    Csv {
        /// File being read.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Human readable reason.
        reason: String,
    },

    /// Caller supplied an argument outside the accepted domain.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human readable reason.
        reason: String,
    },
}

impl CostarError {
    /// Build a [`CostarError::VertexNotFound`].
    pub fn vertex_not_found(vertex: impl Into<String>) -> Self {
        CostarError::VertexNotFound {
            vertex: vertex.into(),
        }
    }

    /// Build a [`CostarError::Config`].
    pub fn config(reason: impl Into<String>) -> Self {
        CostarError::Config {
            reason: reason.into(),
        }
    }

    /// Build a [`CostarError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CostarError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for the "vertex not in graph" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CostarError::VertexNotFound { .. })
    }
}
