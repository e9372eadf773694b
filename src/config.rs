//! Adapter configuration with sensible defaults.
//!
//! [`AdapterConfig`] controls where the backend lives, the per-request
//! timeout, and the ordered list of candidate routes to probe. The defaults
//! match a typical local chat backend.

use crate::error::AdapterError;
use url::Url;

/// Environment variable overriding the default base URL.
pub const ENV_BASE_URL: &str = "CHAT_RELAY_BASE_URL";

/// Environment variable overriding the default request timeout (milliseconds).
pub const ENV_TIMEOUT_MS: &str = "CHAT_RELAY_TIMEOUT_MS";

/// Configuration for a [`crate::ChatAdapter`].
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Base URL of the chat backend.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Ordered candidate routes probed per message until one answers.
    /// Tried strictly in order; the first 2xx body wins.
    pub routes: Vec<String>,
    /// Route probed by the health check.
    pub health_route: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 30_000,
            routes: vec![
                "/chat".to_string(),
                "/api/chat".to_string(),
                "/message".to_string(),
                "/ask".to_string(),
            ],
            health_route: "/health".to_string(),
        }
    }
}

impl AdapterConfig {
    /// Defaults with base URL and timeout overridden from the environment.
    ///
    /// Reads [`ENV_BASE_URL`] and [`ENV_TIMEOUT_MS`]; absent, empty, or
    /// unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_MS) {
            if let Ok(timeout_ms) = timeout.parse() {
                config.timeout_ms = timeout_ms;
            }
        }
        config
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute URL
    /// - `timeout_ms` must be greater than 0
    /// - `routes` must not be empty
    /// - every route, including the health route, must start with `/`
    pub fn validate(&self) -> Result<(), AdapterError> {
        if Url::parse(&self.base_url).is_err() {
            return Err(AdapterError::Config(format!(
                "base_url is not a valid URL: {}",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(AdapterError::Config(
                "timeout_ms must be greater than 0".into(),
            ));
        }
        if self.routes.is_empty() {
            return Err(AdapterError::Config(
                "at least one candidate route is required".into(),
            ));
        }
        for route in self.routes.iter().chain([&self.health_route]) {
            if !route.starts_with('/') {
                return Err(AdapterError::Config(format!(
                    "route must start with '/': {route}"
                )));
            }
        }
        Ok(())
    }
}
