use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request as HttpRequest};
use axum::routing::any;
use tower::ServiceExt;

use super::*;
use crate::config::Config;

// =============================================================================
// Header filtering
// =============================================================================

#[test]
fn end_to_end_drops_hop_by_hop_and_host() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("forgeline.test"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = end_to_end(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn end_to_end_drops_headers_named_by_connection() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("close, X-Debug-Trace"));
    headers.insert("x-debug-trace", HeaderValue::from_static("1"));
    headers.insert("x-request-id", HeaderValue::from_static("r-7"));

    let out = end_to_end(&headers);
    assert!(out.get("x-debug-trace").is_none());
    assert_eq!(out.get("x-request-id").unwrap(), "r-7");
}

#[test]
fn end_to_end_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    assert_eq!(end_to_end(&headers).get_all(header::SET_COOKIE).iter().count(), 2);
}

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://api:8080", "/api/products?category=rails&search=gate"),
        "http://api:8080/api/products?category=rails&search=gate"
    );
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::BodyTooLarge { limit: 1 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// Round trips against a local backend
// =============================================================================

/// Backend that echoes what it received as JSON.
async fn spawn_echo_backend() -> String {
    async fn echo(req: Request) -> axum::Json<serde_json::Value> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
        axum::Json(serde_json::json!({
            "method": parts.method.as_str(),
            "uri": parts.uri.to_string(),
            "authorization": parts.headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            "body": String::from_utf8_lossy(&bytes),
        }))
    }
    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "late"
    }
    async fn missing() -> (StatusCode, &'static str) {
        (StatusCode::NOT_FOUND, "{\"message\":\"no such product\"}")
    }

    let app = Router::new()
        .route("/api/slow", any(slow))
        .route("/api/missing", any(missing))
        .route("/{*rest}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn proxy_router(backend_url: String, timeout: Duration, max_body_bytes: usize) -> Router {
    let config = Config { port: 0, backend_url, max_body_bytes, proxy_timeout: timeout };
    let state = AppState::new(config).unwrap();
    Router::new().route("/api/{*path}", any(forward)).with_state(state)
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn forwards_method_query_body_and_bearer() {
    let backend = spawn_echo_backend().await;
    let app = proxy_router(backend, Duration::from_secs(5), 1024);

    let req = HttpRequest::builder()
        .method(Method::POST)
        .uri("/api/orders?dry_run=1")
        .header(header::AUTHORIZATION, "Bearer tok-123")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"client_ref\":\"r1\"}"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed = json_body(resp).await;
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["uri"], "/api/orders?dry_run=1");
    assert_eq!(echoed["authorization"], "Bearer tok-123");
    assert_eq!(echoed["body"], "{\"client_ref\":\"r1\"}");
}

#[tokio::test]
async fn backend_error_status_passes_through() {
    let backend = spawn_echo_backend().await;
    let app = proxy_router(backend, Duration::from_secs(5), 1024);

    let req = HttpRequest::builder().uri("/api/missing").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversize_body_is_rejected_before_forwarding() {
    let backend = spawn_echo_backend().await;
    let app = proxy_router(backend, Duration::from_secs(5), 8);

    let req = HttpRequest::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .body(Body::from("this body is longer than eight bytes"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn slow_backend_maps_to_gateway_timeout() {
    let backend = spawn_echo_backend().await;
    let app = proxy_router(backend, Duration::from_millis(200), 1024);

    let req = HttpRequest::builder().uri("/api/slow").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    // Bind then drop to get a port nobody is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = proxy_router(format!("http://{addr}"), Duration::from_secs(5), 1024);

    let req = HttpRequest::builder().uri("/api/services").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}
