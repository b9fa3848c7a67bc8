//! HTTP server implementation.
//!
//! This module builds the `warp` filter tree and runs it. Route failures are
//! turned into JSON error bodies by [`handle_rejection`] before the CORS
//! wrapper, so browsers can read error responses as well.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::handlers;
use crate::models::ErrorResponse;
use dagcheck::GraphAnalyzer;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{self, Reply, Response};
use warp::{Filter, Rejection};

/// The dagcheck HTTP server.
#[derive(Debug, Clone)]
pub struct DagcheckServer {
    config: ServerConfig,
}

impl DagcheckServer {
    /// Create a server from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this server runs with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    ///
    /// Returns the bound address and the server future.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::Error::Http) if the address cannot be bound.
    pub fn bind_with_shutdown(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(SocketAddr, impl Future<Output = ()>)> {
        let bind = self.config.bind;
        let (addr, server) =
            warp::serve(routes(self.config)).try_bind_with_graceful_shutdown(bind, shutdown)?;
        Ok((addr, server))
    }

    /// Run the server until Ctrl-C is received.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::Error::Http) if the address cannot be bound.
    pub async fn run(self) -> Result<()> {
        let origins = self.config.allowed_origins.clone();
        let (addr, server) = self.bind_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            }
            tracing::info!("Shutting down");
        })?;

        tracing::info!(%addr, ?origins, "Listening");
        server.await;
        Ok(())
    }
}

/// Build the complete filter tree: routes, error recovery, CORS and tracing.
///
/// # Panics
///
/// Panics if `config` holds an origin or header name that
/// [`ServerConfig::validate`] would reject.
pub fn routes(
    config: ServerConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let analyzer = Arc::new(GraphAnalyzer::new(config.analyzer.clone()));

    let ping = warp::path::end()
        .and(warp::get())
        .map(|| reply::json(&handlers::ping()));

    let parse = warp::path!("pipelines" / "parse")
        .and(warp::post())
        .and(warp::body::content_length_limit(config.max_body_bytes))
        .and(warp::body::bytes())
        .and_then(move |body: Bytes| {
            let analyzer = Arc::clone(&analyzer);
            async move {
                Ok::<_, Rejection>(respond(
                    handlers::parse_pipeline_offloaded(body, analyzer).await,
                ))
            }
        });

    ping.or(parse)
        .recover(handle_rejection)
        .with(cors(&config))
        .with(warp::trace::request())
}

fn cors(config: &ServerConfig) -> warp::cors::Builder {
    let builder = warp::cors()
        .allow_credentials(true)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(config.allowed_headers.iter().map(String::as_str));

    if config.allows_any_origin() {
        builder.allow_any_origin()
    } else {
        builder.allow_origins(config.allowed_origins.iter().map(String::as_str))
    }
}

fn respond<T: serde::Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(value) => reply::json(&value).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "Request failed");
            e.into_response()
        }
    }
}

/// Convert route rejections into JSON error responses.
async fn handle_rejection(err: Rejection) -> std::result::Result<Response, Infallible> {
    let (status, code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not_found", "Not found".to_string())
    } else if let Some(e) = err.find::<warp::reject::PayloadTooLarge>() {
        (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", e.to_string())
    } else if let Some(e) = err.find::<warp::reject::LengthRequired>() {
        (StatusCode::LENGTH_REQUIRED, "length_required", e.to_string())
    } else if let Some(e) = err.find::<warp::reject::MethodNotAllowed>() {
        (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", e.to_string())
    } else {
        tracing::error!(rejection = ?err, "Unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Internal server error".to_string(),
        )
    };

    let body = ErrorResponse::new(code, message);
    Ok(reply::with_status(reply::json(&body), status).into_response())
}
