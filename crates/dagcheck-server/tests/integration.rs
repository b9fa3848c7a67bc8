//! Integration tests for the dagcheck HTTP server.
//!
//! Most tests drive the filter tree in-process with `warp::test`; one test
//! binds a real socket to cover startup and graceful shutdown.

use dagcheck::{AnalyzerConfig, DuplicatePolicy};
use dagcheck_server::models::ErrorResponse;
use dagcheck_server::server::routes;
use dagcheck_server::{DagcheckServer, ServerConfig};
use rstest::rstest;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::hyper::body::Bytes;

mod helpers {
    use super::*;
    use warp::http::Response;

    pub fn config() -> ServerConfig {
        ServerConfig::default()
    }

    pub async fn post_json(config: ServerConfig, body: &Value) -> Response<Bytes> {
        warp::test::request()
            .method("POST")
            .path("/pipelines/parse")
            .json(body)
            .reply(&routes(config))
            .await
    }

    pub fn body_json(response: &Response<Bytes>) -> Value {
        serde_json::from_slice(response.body()).expect("response body should be JSON")
    }

    pub fn error_body(response: &Response<Bytes>) -> ErrorResponse {
        serde_json::from_slice(response.body()).expect("error body should match ErrorResponse")
    }

    pub fn pipeline(ids: &[&str], edges: &[(&str, &str)]) -> Value {
        json!({
            "nodes": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
            "edges": edges
                .iter()
                .map(|(s, t)| json!({"source": s, "target": t}))
                .collect::<Vec<_>>(),
        })
    }
}

use helpers::*;

// =========================================================================
// Routes
// =========================================================================

#[tokio::test]
async fn test_ping() {
    let response = warp::test::request()
        .method("GET")
        .path("/")
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(&response), json!({"Ping": "Pong"}));
}

#[rstest]
#[case::chain(&["A", "B", "C"], &[("A", "B"), ("B", "C")], 3, 2, true)]
#[case::cycle(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")], 3, 3, false)]
#[case::self_loop(&["A"], &[("A", "A")], 1, 1, false)]
#[case::empty(&[], &[], 0, 0, true)]
#[case::undeclared_target(&["A", "B"], &[("A", "X")], 2, 1, true)]
#[tokio::test]
async fn test_parse_pipeline(
    #[case] ids: &[&str],
    #[case] edges: &[(&str, &str)],
    #[case] num_nodes: usize,
    #[case] num_edges: usize,
    #[case] is_dag: bool,
) {
    let response = post_json(config(), &pipeline(ids, edges)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(&response),
        json!({"num_nodes": num_nodes, "num_edges": num_edges, "is_dag": is_dag})
    );
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let body = json!({
        "nodes": [
            {"id": "customInput-1", "type": "customInput", "position": {"x": 0, "y": 0}},
            {"id": "llm-1", "type": "llm", "data": {"id": "llm-1"}}
        ],
        "edges": [
            {"id": "reactflow__edge-1", "source": "customInput-1", "target": "llm-1",
             "sourceHandle": "customInput-1-value", "animated": true}
        ]
    });

    let response = post_json(config(), &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(&response)["is_dag"], json!(true));
}

// =========================================================================
// Error responses
// =========================================================================

#[rstest]
#[case::node_without_id(json!({"nodes": [{"name": "A"}], "edges": []}))]
#[case::missing_edges(json!({"nodes": []}))]
#[case::wrong_id_type(json!({"nodes": [{"id": 1}], "edges": []}))]
#[case::not_an_object(json!([1, 2, 3]))]
#[tokio::test]
async fn test_malformed_input(#[case] body: Value) {
    let response = post_json(config(), &body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_body(&response).code, "malformed_input");
}

#[tokio::test]
async fn test_non_json_body() {
    let response = warp::test::request()
        .method("POST")
        .path("/pipelines/parse")
        .body("nodes=A")
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_duplicate_ids_rejected_when_configured() {
    let mut config = config();
    config.analyzer.duplicates = DuplicatePolicy::Reject;

    let response = post_json(config, &pipeline(&["A", "A"], &[])).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = error_body(&response);
    assert_eq!(error.code, "duplicate_node_id");
    assert!(error.error.contains('A'));
}

#[tokio::test]
async fn test_duplicate_ids_merged_by_default() {
    let response = post_json(config(), &pipeline(&["A", "A"], &[("A", "A")])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(&response),
        json!({"num_nodes": 2, "num_edges": 1, "is_dag": false})
    );
}

#[tokio::test]
async fn test_graph_too_large() {
    let mut config = config();
    config.analyzer = AnalyzerConfig {
        max_nodes: Some(2),
        ..AnalyzerConfig::default()
    };

    let response = post_json(config, &pipeline(&["A", "B", "C"], &[])).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error_body(&response).code, "graph_too_large");
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = config();
    config.max_body_bytes = 16;

    let response = post_json(config, &pipeline(&["A", "B", "C"], &[])).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error_body(&response).code, "payload_too_large");
}

#[rstest]
#[case::unknown_path("GET", "/pipelines", StatusCode::NOT_FOUND)]
#[case::get_parse("GET", "/pipelines/parse", StatusCode::METHOD_NOT_ALLOWED)]
#[case::post_root("POST", "/", StatusCode::METHOD_NOT_ALLOWED)]
#[tokio::test]
async fn test_routing_errors(
    #[case] method: &str,
    #[case] path: &str,
    #[case] status: StatusCode,
) {
    let response = warp::test::request()
        .method(method)
        .path(path)
        .header("content-length", "0")
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), status);
}

// =========================================================================
// CORS
// =========================================================================

#[tokio::test]
async fn test_cors_allowed_origin() {
    let response = warp::test::request()
        .method("POST")
        .path("/pipelines/parse")
        .header("origin", "http://localhost:3000")
        .json(&pipeline(&["A"], &[]))
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_cors_headers_on_error_responses() {
    let response = warp::test::request()
        .method("POST")
        .path("/pipelines/parse")
        .header("origin", "http://localhost:3000")
        .json(&json!({"nodes": []}))
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = warp::test::request()
        .method("OPTIONS")
        .path("/pipelines/parse")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_uppercase();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_cors_preflight_with_tracing_header() {
    let response = warp::test::request()
        .method("OPTIONS")
        .path("/pipelines/parse")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-request-id")
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[case::trailing_slash("http://example.com/")]
#[case::ipv6_with_port("https://[::1]:8443")]
#[case::custom_scheme("app://editor.local")]
#[tokio::test]
async fn test_validated_origins_build_routes(#[case] origin: &str) {
    let config = ServerConfig::from_yaml_str(&format!("allowed-origins: ['{origin}']\n")).unwrap();

    let response = warp::test::request()
        .method("GET")
        .path("/")
        .reply(&routes(config))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_forbidden_origin() {
    let response = warp::test::request()
        .method("OPTIONS")
        .path("/pipelines/parse")
        .header("origin", "http://evil.example")
        .header("access-control-request-method", "POST")
        .reply(&routes(config()))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cors_any_origin() {
    let mut config = config();
    config.allowed_origins = vec!["*".to_string()];

    let response = warp::test::request()
        .method("GET")
        .path("/")
        .header("origin", "http://anything.example")
        .reply(&routes(config))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

// =========================================================================
// Server lifecycle
// =========================================================================

#[rstest]
#[case::no_scheme("not an origin")]
#[case::non_ascii_host("http://exämple.com")]
#[case::with_path("http://example.com/app")]
fn test_invalid_origin_rejected_before_routes(#[case] origin: &str) {
    let mut config = config();
    config.allowed_origins = vec![origin.to_string()];

    assert!(matches!(
        DagcheckServer::new(config),
        Err(dagcheck_server::Error::Config(_))
    ));
}

#[tokio::test]
async fn test_serves_over_tcp_and_shuts_down() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut config = config();
    config.bind = "127.0.0.1:0".parse().unwrap();

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = DagcheckServer::new(config).unwrap();
    let (addr, serving) = server
        .bind_with_shutdown(async {
            let _ = stop_rx.await;
        })
        .unwrap();
    let handle = tokio::spawn(serving);

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"));
    assert!(raw.contains(r#"{"Ping":"Pong"}"#));

    stop_tx.send(()).unwrap();
    handle.await.unwrap();
}
