//! HTTP service for dagcheck pipeline analysis.
//!
//! This crate exposes [`dagcheck::GraphAnalyzer`] over HTTP using `warp`.
//! It owns everything around the analysis: payload validation, error
//! responses, CORS policy and process configuration.
//!
//! # Routes
//!
//! - `GET /` - Liveness check, answers `{"Ping": "Pong"}`
//! - `POST /pipelines/parse` - Analyze a `{"nodes": [...], "edges": [...]}`
//!   document and answer `{"num_nodes", "num_edges", "is_dag"}`

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::DagcheckServer;
