//! Trait definition for the pluggable backend transport.
//!
//! The adapter talks to the network exclusively through [`Transport`], so
//! tests can script a backend and assert on the exact sequence of candidate
//! routes attempted.

use crate::error::TransportError;
use crate::types::OutgoingMessage;
use serde_json::Value;

/// A pluggable chat backend transport.
///
/// Implementors own URL joining, request encoding, and status handling for
/// one backend base URL. Both operations take routes relative to that base.
///
/// All implementations must be `Send + Sync` so overlapping sends can share
/// one adapter.
pub trait Transport: Send + Sync {
    /// POST `message` as JSON to `route`, returning the parsed body.
    ///
    /// A 2xx body that is not valid JSON is returned as a JSON string
    /// value, so plain-text backends still produce a usable reply.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on connection failure, timeout, or any
    /// non-2xx status.
    fn post_chat(
        &self,
        route: &str,
        message: &OutgoingMessage,
    ) -> impl std::future::Future<Output = Result<Value, TransportError>> + Send;

    /// GET `route`, succeeding on any 2xx status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on connection failure, timeout, or any
    /// non-2xx status.
    fn check_health(
        &self,
        route: &str,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
}
