use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::Config;

fn test_state() -> AppState {
    let config = Config {
        port: 0,
        backend_url: "http://127.0.0.1:9".into(),
        max_body_bytes: 1024,
        proxy_timeout: Duration::from_secs(1),
    };
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = with_layers(api_routes(test_state()));
    let resp = app.oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_non_api_path_is_not_proxied() {
    let app = api_routes(test_state());
    let resp = app.oneshot(Request::builder().uri("/shop").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let app = with_layers(api_routes(test_state()));
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/products")
        .header("origin", "http://localhost:3001")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
