//! Error types for the dagcheck HTTP server.

use crate::models::ErrorResponse;
use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::{self, Reply, Response};

/// Errors that can occur in the dagcheck server.
#[derive(Debug, Error)]
pub enum Error {
    /// The pipeline was malformed or the analyzer rejected it.
    #[error(transparent)]
    Analysis(#[from] dagcheck::Error),

    /// Invalid server configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP server failed to start.
    #[error("HTTP server error: {0}")]
    Http(#[from] warp::Error),

    /// An analysis task on the blocking pool panicked or was cancelled.
    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Analysis(dagcheck::Error::DuplicateNodeId(_) | dagcheck::Error::Json(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Analysis(dagcheck::Error::GraphTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Analysis(dagcheck::Error::Config(_) | dagcheck::Error::Io(_))
            | Self::Config(_)
            | Self::Io(_)
            | Self::Http(_)
            | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Analysis(dagcheck::Error::Json(_)) => "malformed_input",
            Self::Analysis(dagcheck::Error::DuplicateNodeId(_)) => "duplicate_node_id",
            Self::Analysis(dagcheck::Error::GraphTooLarge { .. }) => "graph_too_large",
            Self::Analysis(dagcheck::Error::Config(_) | dagcheck::Error::Io(_))
            | Self::Config(_)
            | Self::Io(_)
            | Self::Http(_)
            | Self::Task(_) => "internal_error",
        }
    }
}

impl Reply for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.code(), self.to_string());
        reply::with_status(reply::json(&body), self.status()).into_response()
    }
}

/// Result type for dagcheck server operations.
pub type Result<T> = std::result::Result<T, Error>;
