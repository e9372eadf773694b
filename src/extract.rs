//! Reply-shape extraction: pulling display text out of arbitrary bodies.
//!
//! The backend contract is unknown, so extraction is an ordered list of
//! rules rather than a schema: known reply fields first, then a bare string
//! body, then serializing whatever came back so the user always sees
//! something.

use serde_json::Value;

/// Reply fields accepted from the backend, checked in priority order.
pub const REPLY_FIELDS: &[&str] = &["response", "message", "content", "reply", "text"];

type ExtractRule = fn(&Value) -> Option<String>;

/// Ordered extraction rules; the first to yield text wins. New backend
/// shapes get a new rule here, not new control flow.
const RULES: &[ExtractRule] = &[known_field, bare_string];

/// Rule 1: first entry of [`REPLY_FIELDS`] holding a non-empty string.
/// Empty or non-string values fall through to the next field.
fn known_field(body: &Value) -> Option<String> {
    let map = body.as_object()?;
    REPLY_FIELDS.iter().find_map(|field| {
        map.get(*field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Rule 2: a bare string body is used directly.
fn bare_string(body: &Value) -> Option<String> {
    body.as_str().map(str::to_string)
}

/// Extract display text from a backend response body.
///
/// Applies [`RULES`] in order; when none match, the whole body is
/// serialized compactly as the last resort. The result is empty only for a
/// bare empty-string body; the caller substitutes fallback copy then.
pub fn extract_display_text(body: &Value) -> String {
    for rule in RULES {
        if let Some(text) = rule(body) {
            return text;
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn each_known_field_extracts() {
        for field in REPLY_FIELDS {
            let body = json!({ (*field): "hello" });
            assert_eq!(extract_display_text(&body), "hello", "field {field}");
        }
    }

    #[test]
    fn field_priority_order() {
        let body = json!({"text": "last", "response": "first"});
        assert_eq!(extract_display_text(&body), "first");

        let body = json!({"reply": "fourth", "content": "third"});
        assert_eq!(extract_display_text(&body), "third");
    }

    #[test]
    fn empty_field_falls_through_to_next() {
        let body = json!({"response": "", "message": "fallback"});
        assert_eq!(extract_display_text(&body), "fallback");
    }

    #[test]
    fn non_string_field_falls_through() {
        let body = json!({"response": 42, "message": "real"});
        assert_eq!(extract_display_text(&body), "real");
    }

    #[test]
    fn bare_string_used_directly() {
        let body = json!("just some text");
        assert_eq!(extract_display_text(&body), "just some text");
    }

    #[test]
    fn bare_empty_string_yields_empty() {
        let body = json!("");
        assert_eq!(extract_display_text(&body), "");
    }

    #[test]
    fn unknown_object_serialized() {
        let body = json!({"foo": "bar"});
        assert_eq!(extract_display_text(&body), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn object_with_only_empty_fields_serialized() {
        let body = json!({"message": ""});
        assert_eq!(extract_display_text(&body), r#"{"message":""}"#);
    }

    #[test]
    fn array_serialized() {
        let body = json!(["a", "b"]);
        assert_eq!(extract_display_text(&body), r#"["a","b"]"#);
    }

    #[test]
    fn null_serialized() {
        assert_eq!(extract_display_text(&Value::Null), "null");
    }

    #[test]
    fn nested_reply_field_not_searched() {
        // Only top-level fields are sniffed.
        let body = json!({"data": {"response": "nested"}});
        assert_eq!(
            extract_display_text(&body),
            r#"{"data":{"response":"nested"}}"#
        );
    }
}
