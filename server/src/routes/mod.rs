//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the `/api` and `/uploads` relay to
//! the REST backend, the Leptos SSR pages, and the compiled WASM/CSS bundle
//! under `/pkg`. Every route shares the CORS, gzip and tracing layers.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Health check plus the backend relay. Kept separate from the Leptos
/// routes so it can be exercised without a Leptos configuration.
pub fn api_routes(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/{*path}", any(proxy::forward))
        .route("/uploads/{*path}", any(proxy::forward))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Full application: relay, SSR pages and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(forgeline_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || forgeline_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(forgeline_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(with_layers(
        api_routes(state)
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
            .merge(leptos_router),
    ))
}

/// Shared middleware: CORS, gzip and request tracing.
pub fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    router.layer(cors).layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
