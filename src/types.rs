//! Wire and result types for the backend adapter.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single user message as posted to the backend.
///
/// Built fresh per send attempt and discarded once the request resolves.
/// Serializes to the JSON object the backend contract (such as it is)
/// expects: `{"message": ..., "timestamp": ..., "userId": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Trimmed, non-empty message text.
    pub message: String,
    /// Client-side ISO-8601 timestamp of the send attempt.
    pub timestamp: String,
    /// Ephemeral client id, generated per send. Uniqueness across sessions
    /// is not required.
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl OutgoingMessage {
    /// Build a message for `text`, stamping the current time and a fresh
    /// millis-based client id.
    pub fn new(text: &str) -> Self {
        let now = Utc::now();
        Self {
            message: text.trim().to_string(),
            timestamp: now.to_rfc3339(),
            user_id: format!("user-{}", now.timestamp_millis()),
        }
    }
}

/// The normalized reply handed back to the caller.
///
/// Always produced regardless of what the network did; on failure
/// `display_text` carries apology copy instead of a backend reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendReply {
    /// Text to show the user. Never empty.
    pub display_text: String,
    /// ISO-8601 timestamp stamped when the reply was constructed.
    pub timestamp: String,
}

impl BackendReply {
    /// Build a reply around `display_text` with a fresh timestamp.
    pub fn now(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Snapshot of the adapter's view of the backend, for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendStatus {
    /// Configured base URL.
    pub url: String,
    /// Outcome of the most recent network interaction.
    pub healthy: bool,
}
