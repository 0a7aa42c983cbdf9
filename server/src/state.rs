//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no domain data of its own: it renders pages and relays
//! `/api` and `/uploads` traffic to the REST backend, so the state is just
//! the outbound HTTP client and the parsed config.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the shared client with the configured upstream timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot initialize.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
