//! # chat-relay
//!
//! Best-effort backend adapter for chat front ends.
//!
//! The chat backend this crate talks to has no stable contract: the route
//! it answers on and the field its reply text lives in both vary. The
//! adapter copes by probing an ordered list of candidate routes per
//! message, sniffing the reply shape through an ordered rule list, and
//! converting every failure into user-facing apology copy. The caller
//! always gets a displayable reply; nothing the network does can surface
//! as an error.
//!
//! ## Design
//!
//! - Candidate routes are an explicit, ordered, injectable list in
//!   [`AdapterConfig`], not hard-coded probing
//! - One adapter instance per backend, explicitly constructed; no global
//!   singleton
//! - The network seam is the [`Transport`] trait, so tests script the
//!   backend without sockets
//! - A startup health probe feeds a diagnostics-only status flag; it never
//!   gates sending
//!
//! ## Security
//!
//! - No credentials and no persistence; a message exists only for the
//!   lifetime of its request
//! - Message content is never logged. Attempt logging records routes and
//!   failure classes only

pub mod adapter;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod http;
pub mod transport;
pub mod types;

pub use adapter::ChatAdapter;
pub use config::AdapterConfig;
pub use error::{AdapterError, FailureKind, Result, TransportError};
pub use http::HttpTransport;
pub use transport::Transport;
pub use types::{BackendReply, BackendStatus, OutgoingMessage};

/// Send a single message with a freshly built adapter.
///
/// Convenience for one-shot callers; long-lived callers should construct a
/// [`ChatAdapter`] once and reuse it so the health flag stays meaningful.
///
/// # Errors
///
/// Returns [`AdapterError`] only if the adapter cannot be constructed from
/// `config`; the send itself never fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> chat_relay::Result<()> {
/// let config = chat_relay::AdapterConfig::default();
/// let reply = chat_relay::send_once("hello", &config).await?;
/// println!("{}", reply.display_text);
/// # Ok(())
/// # }
/// ```
pub async fn send_once(text: &str, config: &AdapterConfig) -> Result<BackendReply> {
    let adapter = ChatAdapter::new(config.clone())?;
    Ok(adapter.send_message(text).await)
}
