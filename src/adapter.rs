//! The backend adapter: candidate-route fan-out with graceful degradation.
//!
//! [`ChatAdapter`] owns the transport and the last-outcome health flag.
//! Each send probes the configured candidate routes strictly in order and
//! always produces a displayable reply; transport failures select apology
//! copy instead of propagating.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::AdapterConfig;
use crate::error::{AdapterError, FailureKind, TransportError};
use crate::extract::extract_display_text;
use crate::fallback::{self, apology};
use crate::http::HttpTransport;
use crate::transport::Transport;
use crate::types::{BackendReply, BackendStatus, OutgoingMessage};

/// Adapter between a chat UI and an unknown chat backend.
///
/// Explicitly constructed: configuration in, adapter out. The transport is
/// a type parameter so tests can script it; production code uses
/// [`HttpTransport`] via [`ChatAdapter::new`] or [`ChatAdapter::connect`].
pub struct ChatAdapter<T: Transport> {
    config: AdapterConfig,
    transport: T,
    /// Most recent network outcome. Diagnostics only, never gates sending.
    last_healthy: AtomicBool,
}

impl ChatAdapter<HttpTransport> {
    /// Build an adapter over HTTP. Validates `config` and constructs the
    /// client; performs no network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] for invalid configuration or
    /// [`AdapterError::Http`] if the HTTP client cannot be built.
    pub fn new(config: AdapterConfig) -> Result<Self, AdapterError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// [`ChatAdapter::new`] plus one opportunistic startup health probe.
    ///
    /// The probe result lands in [`ChatAdapter::status`]; a failed probe
    /// does not prevent construction or sending.
    ///
    /// # Errors
    ///
    /// Same as [`ChatAdapter::new`].
    pub async fn connect(config: AdapterConfig) -> Result<Self, AdapterError> {
        let adapter = Self::new(config)?;
        adapter.probe_health().await;
        Ok(adapter)
    }
}

impl<T: Transport> ChatAdapter<T> {
    /// Build an adapter over an arbitrary transport.
    ///
    /// The adapter starts out marked unhealthy until a probe or a send says
    /// otherwise.
    pub fn with_transport(config: AdapterConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            last_healthy: AtomicBool::new(false),
        }
    }

    /// Send one user message and return a reply, whatever happens.
    ///
    /// Probes the configured candidate routes strictly in order; the first
    /// 2xx body short-circuits the loop. A total failure is classified into
    /// apology copy selected by the most recent error. This method never
    /// returns an error.
    ///
    /// Whitespace-only input returns a fixed nudge reply without touching
    /// the network.
    pub async fn send_message(&self, text: &str) -> BackendReply {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return BackendReply::now(fallback::EMPTY_INPUT);
        }

        let outgoing = OutgoingMessage::new(trimmed);
        tracing::trace!(chars = outgoing.message.len(), "sending chat message");

        let mut last_error: Option<TransportError> = None;
        for route in &self.config.routes {
            tracing::debug!(%route, "trying candidate route");
            match self.transport.post_chat(route, &outgoing).await {
                Ok(body) => {
                    tracing::debug!(%route, "candidate route answered");
                    self.last_healthy.store(true, Ordering::Relaxed);
                    let text = extract_display_text(&body);
                    if text.is_empty() {
                        return BackendReply::now(fallback::EMPTY_REPLY);
                    }
                    return BackendReply::now(text);
                }
                Err(err) => {
                    tracing::warn!(%route, error = %err, "candidate route failed");
                    last_error = Some(err);
                }
            }
        }

        self.last_healthy.store(false, Ordering::Relaxed);
        let kind = FailureKind::classify(last_error.as_ref());
        tracing::warn!(?kind, "all candidate routes failed");
        BackendReply::now(apology(kind))
    }

    /// Probe the backend health route, record the outcome, and return it.
    ///
    /// Any 2xx marks the backend healthy; anything else marks it unhealthy.
    /// The result is diagnostic only and never gates sending.
    pub async fn probe_health(&self) -> bool {
        let route = self.config.health_route.as_str();
        let healthy = match self.transport.check_health(route).await {
            Ok(()) => {
                tracing::debug!(route, "backend healthy");
                true
            }
            Err(err) => {
                tracing::debug!(route, error = %err, "health probe failed");
                false
            }
        };
        self.last_healthy.store(healthy, Ordering::Relaxed);
        healthy
    }

    /// Current backend status snapshot for diagnostics.
    pub fn status(&self) -> BackendStatus {
        BackendStatus {
            url: self.config.base_url.clone(),
            healthy: self.last_healthy.load(Ordering::Relaxed),
        }
    }

    /// The configuration this adapter was built with.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}
