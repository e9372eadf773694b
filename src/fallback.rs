//! User-facing fallback copy.
//!
//! The adapter never surfaces an error; when the backend cannot be talked
//! to, the user sees one of these fixed messages instead. The copy varies
//! by failure class but nothing else does.

use crate::error::FailureKind;

/// Reply for whitespace-only input. No request is made.
pub const EMPTY_INPUT: &str = "Type a message first, there's nothing to send yet.";

/// Reply when the backend answered but nothing usable could be extracted.
pub const EMPTY_REPLY: &str =
    "I received your message but I'm not sure how to respond right now.";

/// Apology copy for a total send failure of the given kind.
pub fn apology(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Unreachable => {
            "I can't reach the chat backend right now. It looks like the server \
             isn't running. Start it up and try again."
        }
        FailureKind::NotFound => {
            "I couldn't find a chat route on the backend. It may be listening on \
             a different API path; check that it exposes a /chat endpoint."
        }
        FailureKind::ServerError => {
            "The chat backend hit an internal error while handling your message. \
             Check the backend logs for details."
        }
        FailureKind::Unknown => {
            "I'm having some technical difficulties reaching the chat backend. \
             Please try again in a moment."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [FailureKind; 4] = [
        FailureKind::Unreachable,
        FailureKind::NotFound,
        FailureKind::ServerError,
        FailureKind::Unknown,
    ];

    #[test]
    fn every_kind_has_non_empty_copy() {
        for kind in KINDS {
            assert!(!apology(kind).is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn copy_is_distinct_per_kind() {
        for a in KINDS {
            for b in KINDS {
                if a != b {
                    assert_ne!(apology(a), apology(b), "{a:?} vs {b:?}");
                }
            }
        }
    }

    #[test]
    fn copy_mentions_the_failure() {
        assert!(apology(FailureKind::Unreachable).contains("isn't running"));
        assert!(apology(FailureKind::NotFound).contains("route"));
        assert!(apology(FailureKind::ServerError).contains("internal error"));
        assert!(apology(FailureKind::Unknown).contains("try again"));
    }

    #[test]
    fn fixed_copy_non_empty() {
        assert!(!EMPTY_INPUT.is_empty());
        assert!(!EMPTY_REPLY.is_empty());
    }
}
