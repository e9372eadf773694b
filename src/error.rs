//! Error types for the chat-relay crate.
//!
//! Transport failures never escape the adapter; they are absorbed into
//! apology replies. The only errors a caller ever sees come from
//! constructing an adapter with bad configuration.

/// Errors surfaced while constructing or configuring an adapter.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Invalid adapter configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Convenience type alias for chat-relay results.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// A single candidate request failure, tracked per route while probing.
///
/// Never propagates out of a send; the last one seen selects the apology
/// copy via [`FailureKind::classify`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The backend refused the connection or is not listening.
    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    TimedOut(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Anything else the transport could not classify.
    #[error("transport error: {0}")]
    Other(String),
}

/// Classification of a total send failure.
///
/// Selects which apology string the user sees and nothing else; behaviour
/// is identical across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused or timed out. The backend looks down.
    Unreachable,
    /// Every candidate route answered 404.
    NotFound,
    /// The backend raised an internal error (5xx).
    ServerError,
    /// Unclassified failure.
    Unknown,
}

impl FailureKind {
    /// Classify the most recent candidate failure.
    pub fn classify(last: Option<&TransportError>) -> Self {
        match last {
            Some(TransportError::ConnectionRefused(_) | TransportError::TimedOut(_)) => {
                Self::Unreachable
            }
            Some(TransportError::Status(404)) => Self::NotFound,
            Some(TransportError::Status(status)) if (500..600).contains(status) => {
                Self::ServerError
            }
            _ => Self::Unknown,
        }
    }
}
