//! HTTP response models.
//!
//! Request and success payloads are the `dagcheck` domain types
//! ([`dagcheck::Pipeline`] and [`dagcheck::AnalysisResult`]); this module
//! holds the shapes that only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Body of the liveness route: `{"Ping": "Pong"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    /// Always `"Pong"`.
    #[serde(rename = "Ping")]
    pub ping: String,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self {
            ping: "Pong".to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `malformed_input`.
    pub code: String,

    /// Human-readable description.
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}
