//! Client configuration.
//!
//! # Design
//! `ClientConfig` is built once at process start and is immutable
//! afterwards; the transport and client borrow from it but never mutate it.
//! The `content-type: application/json` header is always present and always
//! first — merged per-call headers can add to it but never replace it
//! (see [`crate::transport::merge_headers`]).

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable naming the remote service's base URL. Required.
pub const ENV_API_URL: &str = "PLANTCTL_API_URL";
/// Environment variable holding the authorization header value. Optional.
pub const ENV_API_KEY: &str = "PLANTCTL_API_KEY";
/// Environment variable overriding the request timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "PLANTCTL_TIMEOUT_MS";

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Immutable connection profile for the remote device-control service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Create a config for `base_url` with the default 10 s timeout.
    ///
    /// Fails with [`ConfigError::MissingBaseUrl`] if the URL is empty; a
    /// trailing slash is trimmed so path joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Append a configured header. Configured headers are sent on every
    /// request and take precedence over per-call headers of the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the config from process environment variables.
    ///
    /// `PLANTCTL_API_URL` is required; `PLANTCTL_API_KEY` becomes the
    /// `authorization` header; `PLANTCTL_TIMEOUT_MS` must be a positive
    /// integer when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Env loading over an injectable lookup, so tests need not mutate
    /// process-global state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(ENV_API_URL).unwrap_or_default();
        let mut config = Self::new(url)?;
        if let Some(key) = lookup(ENV_API_KEY) {
            config = config.with_header("authorization", key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis: u64 = raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            if millis == 0 {
                return Err(ConfigError::InvalidTimeout(raw));
            }
            config = config.with_timeout(Duration::from_millis(millis));
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
