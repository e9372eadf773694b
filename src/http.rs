//! reqwest-backed [`Transport`] implementation.
//!
//! Provides a configured [`reqwest::Client`] with the per-request timeout
//! from config, plus [`HttpTransport`] which joins candidate routes onto
//! the configured base URL.

use crate::config::AdapterConfig;
use crate::error::{AdapterError, TransportError};
use crate::transport::Transport;
use crate::types::OutgoingMessage;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Build a [`reqwest::Client`] configured for backend requests.
///
/// The client has the timeout from config and a bounded redirect policy.
///
/// # Errors
///
/// Returns [`AdapterError::Http`] if the client cannot be constructed.
pub fn build_client(config: &AdapterConfig) -> Result<reqwest::Client, AdapterError> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| AdapterError::Http(format!("failed to build HTTP client: {e}")))
}

/// Production transport speaking HTTP to the configured base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Build a transport for `config`, constructing the underlying client.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] if the base URL does not parse, or
    /// [`AdapterError::Http`] if the client cannot be constructed.
    pub fn new(config: &AdapterConfig) -> Result<Self, AdapterError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| AdapterError::Config(format!("base_url is not a valid URL: {e}")))?;
        Ok(Self {
            client: build_client(config)?,
            base,
        })
    }

    fn join(&self, route: &str) -> Result<Url, TransportError> {
        self.base
            .join(route)
            .map_err(|e| TransportError::Other(format!("cannot join route {route}: {e}")))
    }
}

/// Map a reqwest failure onto the transport taxonomy.
fn classify_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::TimedOut(err.to_string())
    } else if err.is_connect() {
        TransportError::ConnectionRefused(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

impl Transport for HttpTransport {
    async fn post_chat(
        &self,
        route: &str,
        message: &OutgoingMessage,
    ) -> Result<Value, TransportError> {
        let url = self.join(route)?;
        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(classify_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response.text().await.map_err(classify_reqwest)?;
        tracing::trace!(route, bytes = text.len(), "backend response received");

        // Plain-text backends are fine: surface the body as a JSON string.
        match serde_json::from_str(&text) {
            Ok(body) => Ok(body),
            Err(_) => Ok(Value::String(text)),
        }
    }

    async fn check_health(&self, route: &str) -> Result<(), TransportError> {
        let url = self.join(route)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_reqwest)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Status(status.as_u16()))
        }
    }
}
