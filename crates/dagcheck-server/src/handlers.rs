//! Request handlers.
//!
//! Handlers take already-extracted request parts and return plain values or
//! [`Error`]s. Wiring them into routes and converting results into HTTP
//! responses happens in [`crate::server`].

use crate::error::Result;
use crate::models::PingResponse;
use dagcheck::{AnalysisResult, GraphAnalyzer, Pipeline};
use std::sync::Arc;
use warp::hyper::body::Bytes;

#[cfg(doc)]
use crate::error::Error;

/// Bodies up to this size are analyzed on the async worker thread.
///
/// Larger bodies move to tokio's blocking pool so a graph near the configured
/// limits cannot stall other requests sharing the worker.
pub const INLINE_BODY_LIMIT: usize = 64 * 1024;

/// Liveness check.
pub fn ping() -> PingResponse {
    PingResponse::default()
}

/// Validate a raw request body and analyze the pipeline it describes.
///
/// # Errors
///
/// - [`Error::Analysis`] wrapping [`dagcheck::Error::Json`] if the body is not
///   a pipeline document
/// - [`Error::Analysis`] if the analyzer rejects the graph
pub fn parse_pipeline(body: &[u8], analyzer: &GraphAnalyzer) -> Result<AnalysisResult> {
    let pipeline = Pipeline::from_json(body)?;
    let result = analyzer.analyze_pipeline(&pipeline)?;

    tracing::info!(
        num_nodes = result.num_nodes,
        num_edges = result.num_edges,
        is_dag = result.is_dag,
        "Parsed pipeline"
    );

    Ok(result)
}

/// Run [`parse_pipeline`], offloading bodies above [`INLINE_BODY_LIMIT`].
///
/// # Errors
///
/// Same as [`parse_pipeline`], plus [`Error::Task`] if the blocking task panics
/// or is cancelled.
pub async fn parse_pipeline_offloaded(
    body: Bytes,
    analyzer: Arc<GraphAnalyzer>,
) -> Result<AnalysisResult> {
    if body.len() <= INLINE_BODY_LIMIT {
        return parse_pipeline(&body, &analyzer);
    }

    tracing::debug!(bytes = body.len(), "Analyzing on blocking pool");
    tokio::task::spawn_blocking(move || parse_pipeline(&body, &analyzer)).await?
}
