//! Session endpoints: login, registration, current user, logout.

use super::api::{self, ApiError, Credentials, Method};
use super::endpoints;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};

/// `POST /api/auth/login`.
///
/// # Errors
///
/// `Validation` for bad credentials, otherwise see [`api::request`].
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    api::send_json(Method::Post, endpoints::LOGIN, &body).await
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// `Validation` when the email is taken, otherwise see [`api::request`].
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api::send_json(Method::Post, endpoints::REGISTER, request).await
}

/// `GET /api/auth/me` for the stored token.
///
/// # Errors
///
/// `Unauthorized` when the token is stale.
pub async fn fetch_me() -> Result<User, ApiError> {
    api::get(endpoints::ME).await
}

/// Best-effort `POST /api/auth/logout` for a token captured before the
/// local session was dropped. Nothing is sent without a token, and a
/// rejection never redirects.
pub async fn logout(token: Option<String>) {
    let Some(token) = token else {
        return;
    };
    let body = serde_json::json!({});
    let sent = api::request_with::<_, ()>(Credentials::Captured(token), Method::Post, endpoints::LOGOUT, &[], Some(&body));
    if let Err(e) = sent.await {
        #[cfg(feature = "hydrate")]
        log::debug!("logout call failed: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
}
