//! Server configuration.
//!
//! Settings come from an optional YAML file and are then overridden by
//! command-line flags or `DAGCHECK_*` environment variables:
//!
//! ```yaml
//! bind: 0.0.0.0:8000
//! allowed-origins:
//!   - http://localhost:3000
//! max-body-bytes: 16777216
//! analyzer:
//!   max-nodes: 100000
//!   duplicates: merge
//! ```

use crate::error::{Error, Result};
use dagcheck::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;
use warp::http::{HeaderName, HeaderValue, Uri};

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Origin of the pipeline editor front end during development
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default request body limit (16 MiB)
pub const DEFAULT_MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// Request headers accepted in CORS requests unless configured otherwise.
///
/// `warp::cors` has no header wildcard, so common browser and tracing
/// headers are listed explicitly.
pub const DEFAULT_ALLOWED_HEADERS: &[&str] = &[
    "accept",
    "accept-language",
    "authorization",
    "content-language",
    "content-type",
    "origin",
    "x-request-id",
    "x-requested-with",
];

/// Wildcard entry allowing any origin
pub const ANY_ORIGIN: &str = "*";

/// Configuration for [`DagcheckServer`](crate::DagcheckServer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,

    /// Origins allowed to call the API from a browser (`*` for any)
    pub allowed_origins: Vec<String>,

    /// Request headers allowed in CORS requests
    pub allowed_headers: Vec<String>,

    /// Largest accepted request body
    pub max_body_bytes: u64,

    /// Limits applied to each analysis
    pub analyzer: AnalyzerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            allowed_headers: DEFAULT_ALLOWED_HEADERS.iter().map(ToString::to_string).collect(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Whether every origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }

    /// Check values that would otherwise fail when the routes are built.
    pub fn validate(&self) -> Result<()> {
        self.analyzer.validate()?;

        if self.max_body_bytes == 0 {
            return Err(Error::Config("max-body-bytes must be at least 1".to_string()));
        }

        for origin in &self.allowed_origins {
            if origin != ANY_ORIGIN && !is_valid_origin(origin) {
                return Err(Error::Config(format!(
                    "Invalid allowed origin '{origin}'. Expected scheme://host[:port]"
                )));
            }
        }

        for header in &self.allowed_headers {
            if HeaderName::from_bytes(header.as_bytes()).is_err() {
                return Err(Error::Config(format!("Invalid allowed header '{header}'")));
            }
        }

        Ok(())
    }
}

/// An origin is a header-safe `scheme://authority` URI whose path is at most `/`.
///
/// Mirrors the parse `warp::cors` applies when the allowed origins are
/// installed, which panics on anything it cannot read.
fn is_valid_origin(origin: &str) -> bool {
    if HeaderValue::from_str(origin).is_err() {
        return false;
    }
    let Ok(uri) = origin.parse::<Uri>() else {
        return false;
    };

    uri.scheme().is_some()
        && uri.authority().is_some()
        && matches!(uri.path_and_query().map(|p| p.as_str()), None | Some("/"))
}
