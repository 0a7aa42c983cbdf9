//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so local development can keep
//! these in a file. Leptos' own settings (`LEPTOS_SITE_ADDR`, output names)
//! are read separately by `leptos::get_configuration`.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
/// Quotation attachments allow five 10 MiB files plus form overhead.
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// REST backend origin without a trailing slash, e.g. `http://api:8080`.
    pub backend_url: String,
    pub max_body_bytes: usize,
    pub proxy_timeout: Duration,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `BACKEND_URL`: `http://` or `https://` origin of the REST API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MAX_BODY_BYTES`: default 25 MiB
    /// - `PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `BACKEND_URL` is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var: "BACKEND_URL" })?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", value: backend_url });
        }
        let backend_url = backend_url.trim_end_matches('/').to_owned();

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            backend_url,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            proxy_timeout: Duration::from_secs(parse_or(&lookup, "PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
