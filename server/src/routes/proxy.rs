//! Same-origin relay to the REST backend.
//!
//! The browser only ever talks to this server, so the bearer token never
//! crosses origins and CORS on the backend stays closed. Method, path,
//! query, body and end-to-end headers pass through unchanged; hop-by-hop
//! headers are dropped in both directions.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    #[error("backend timed out")]
    Timeout,
    #[error("backend unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ProxyError::Timeout } else { ProxyError::Upstream(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Upstream URL for an incoming path + query.
#[must_use]
pub fn upstream_url(backend: &str, path_and_query: &str) -> String {
    format!("{backend}{path_and_query}")
}

/// Copy `headers` minus hop-by-hop ones, `Host`, `Content-Length`, and any
/// header the `Connection` header names.
#[must_use]
pub fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let named: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_dropped(name, &named) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn is_dropped(name: &HeaderName, named: &[String]) -> bool {
    let name = name.as_str();
    HOP_BY_HOP.contains(&name)
        || name == header::HOST.as_str()
        || name == header::CONTENT_LENGTH.as_str()
        || named.iter().any(|n| n == name)
}

/// Relay one request to the backend and return its answer.
///
/// # Errors
///
/// [`ProxyError`] for oversize bodies (413), timeouts (504) and transport
/// failures (502). Backend error statuses are passed through untouched.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&state.config.backend_url, path_and_query);
    let limit = state.config.max_body_bytes;
    let body = to_bytes(body, limit).await.map_err(|_| ProxyError::BodyTooLarge { limit })?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(end_to_end(&parts.headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(method = %parts.method, %url, error = %e, "proxy request failed"))?;

    let status = upstream.status();
    let headers = end_to_end(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .inspect_err(|e| tracing::warn!(%url, error = %e, "proxy response body failed"))?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
