//! Error types for dagcheck operations.

use crate::domain::NodeId;
use std::io;
use thiserror::Error;

/// The error type for dagcheck operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The submitted graph exceeds a configured size guard.
    #[error("Graph too large: {count} {kind} exceeds the limit of {limit}")]
    GraphTooLarge {
        /// Which part of the graph overflowed ("nodes" or "edges").
        kind: &'static str,
        /// Number of elements submitted.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A node id was declared more than once while duplicates are rejected.
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(NodeId),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a well-formed pipeline document.
    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dagcheck operations.
pub type Result<T> = std::result::Result<T, Error>;
