//! Host configuration parsed from environment variables.
//!
//! All keys are optional:
//! - `PORT`: listen port, default 3000
//! - `K2M_API_BASE_URL`: analytics backend, default `http://127.0.0.1:8000`
//! - `K2M_PROXY_TIMEOUT_SECS`: per-request backend timeout, default 60
//! - `K2M_PROXY_MAX_BODY_BYTES`: largest forwarded request body, default 50 MiB
//!
//! A value that is present but malformed is an error rather than a silent
//! fallback, so a typo in deployment config fails start-up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("K2M_API_BASE_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    pub proxy_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_PROXY_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let api_base_url = parse_base_url(lookup("K2M_API_BASE_URL"))?;
        let timeout_secs = parse_number(&lookup, "K2M_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Zero { var: "K2M_PROXY_TIMEOUT_SECS" });
        }
        let max_body_bytes = parse_number(&lookup, "K2M_PROXY_MAX_BODY_BYTES", DEFAULT_PROXY_MAX_BODY_BYTES)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::Zero { var: "K2M_PROXY_MAX_BODY_BYTES" });
        }
        Ok(Self { port, api_base_url, proxy_timeout: Duration::from_secs(timeout_secs), max_body_bytes })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn parse_base_url(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let url = raw.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw))
    }
}
