//! REST client wrapper shared by every endpoint call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning `ApiError::Unavailable`,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response status funnels through `ApiError::from_status`. A 401 is
//! also intercepted here: the stored bearer token is dropped and the browser
//! is sent to `/login?next=<current path>`, so pages never handle expiry
//! themselves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::storage;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "forgeline_token";

/// Failure of a backend call, already classified for the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success HTTP status (and optional `{ "message" }` body) to an error.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            400 | 409 | 422 => ApiError::Validation(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("request rejected: {status}")),
            ),
            _ => ApiError::Server(status),
        }
    }

    /// i18n key for a toast describing this error. Validation errors carry
    /// backend text instead, see `toast_text`.
    #[must_use]
    pub fn toast_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) | ApiError::Unavailable => "error.network",
            ApiError::Unauthorized => "error.unauthorized",
            ApiError::Forbidden => "error.forbidden",
            ApiError::NotFound => "error.not_found",
            ApiError::Validation(_) => "error.validation",
            ApiError::Server(_) | ApiError::Decode(_) => "error.server",
        }
    }

    /// Backend-supplied message worth showing verbatim, if any.
    #[must_use]
    pub fn toast_text(&self) -> Option<&str> {
        match self {
            ApiError::Validation(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// Which bearer token a request carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// The stored session token. A 401 ends the session and redirects to login.
    Session,
    /// A token captured before the local session was dropped. A 401 is
    /// returned to the caller without touching the current session.
    Captured(String),
}

impl Credentials {
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self {
            Self::Session => stored_token(),
            Self::Captured(token) => Some(token.clone()),
        }
    }

    #[must_use]
    pub fn intercepts_unauthorized(&self) -> bool {
        matches!(self, Self::Session)
    }
}

/// `Authorization` header value for a stored token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Login route that returns to `current_path` after sign-in.
#[must_use]
pub fn login_redirect_path(current_path: &str) -> String {
    if current_path.is_empty() || current_path == "/" || current_path.starts_with("/login") {
        "/login".to_owned()
    } else {
        format!("/login?next={current_path}")
    }
}

/// Parse a success body; empty bodies (204) decode as JSON `null`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Currently stored bearer token, if any.
pub fn stored_token() -> Option<String> {
    storage::get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    storage::set(TOKEN_KEY, token);
}

pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}

/// 401 interceptor: drop the token and bounce to the login page.
#[cfg(feature = "hydrate")]
pub(crate) fn on_unauthorized() {
    clear_token();
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        if !path.starts_with("/login") {
            log::info!("session rejected; redirecting to login");
            let _ = location.set_href(&login_redirect_path(&path));
        }
    }
}

/// Send a JSON request and decode a JSON response.
///
/// # Errors
///
/// Returns `ApiError` for transport failures, non-success statuses, or
/// undecodable bodies. Always `Unavailable` outside the browser.
pub async fn request<B, T>(
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<&B>,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    request_with(Credentials::Session, method, path, query, body).await
}

/// [`request`] with explicit credentials.
///
/// # Errors
///
/// See [`request`].
pub async fn request_with<B, T>(
    credentials: Credentials,
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<&B>,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(path),
            Method::Post => Request::post(path),
            Method::Put => Request::put(path),
            Method::Patch => Request::patch(path),
            Method::Delete => Request::delete(path),
        };
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        builder = builder.header("Accept", "application/json");
        if let Some(token) = credentials.token() {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if status == 401 {
            if credentials.intercepts_unauthorized() {
                on_unauthorized();
            }
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let message = resp.json::<ErrorBody>().await.ok().and_then(ErrorBody::into_message);
            log::warn!("{} {path} failed: {status}", method.as_str());
            return Err(ApiError::from_status(status, message));
        }
        let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, method, path, query, body);
        Err(ApiError::Unavailable)
    }
}

/// `GET` without a body.
///
/// # Errors
///
/// See [`request`].
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<(), T>(Method::Get, path, &[], None).await
}

/// `GET` with query parameters.
///
/// # Errors
///
/// See [`request`].
pub async fn get_with_query<T: DeserializeOwned>(path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
    request::<(), T>(Method::Get, path, query, None).await
}

/// Send a JSON body with the given verb.
///
/// # Errors
///
/// See [`request`].
pub async fn send_json<B, T>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    request(method, path, &[], Some(body)).await
}

/// `DELETE` expecting an empty response.
///
/// # Errors
///
/// See [`request`].
pub async fn delete(path: &str) -> Result<(), ApiError> {
    request::<(), ()>(Method::Delete, path, &[], None).await
}
