//! Interpretation of failed-upload response bodies.
//!
//! The server answers a failed upload with either a JSON object carrying
//! an `error` field, or a plain-text body (proxies and framework error
//! pages). The banner shows whichever message can be recovered, falling
//! back to a fixed string.

use serde_json::Value;

/// Shown when no message can be recovered from the response.
pub const FALLBACK_MESSAGE: &str = "An error occurred during upload";

/// Extract the user-facing message from a failed upload's body.
///
/// A plain string body is shown as-is. A JSON object contributes its
/// `error` field when that field is a string. Anything else (empty body,
/// JSON without an `error` string, arrays, numbers) yields
/// [`FALLBACK_MESSAGE`].
#[must_use]
pub fn message_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(message)) => message,
        Ok(Value::Object(fields)) => fields
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| FALLBACK_MESSAGE.to_owned(), str::to_owned),
        Ok(_) => FALLBACK_MESSAGE.to_owned(),
        // Not JSON at all: treat a non-empty body as plain text.
        Err(_) => {
            if body.trim().is_empty() {
                FALLBACK_MESSAGE.to_owned()
            } else {
                body.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_field_wins() {
        assert_eq!(message_from_body(r#"{"error":"disk full"}"#), "disk full");
    }

    #[test]
    fn plain_text_body_is_shown_as_is() {
        assert_eq!(message_from_body("bad request"), "bad request");
    }

    #[test]
    fn json_string_body_is_unwrapped() {
        assert_eq!(message_from_body(r#""bad request""#), "bad request");
    }

    #[test]
    fn object_without_error_string_falls_back() {
        assert_eq!(
            message_from_body(r#"{"message":"nope"}"#),
            FALLBACK_MESSAGE
        );
        // An `error` field that is not a string does not count.
        assert_eq!(message_from_body(r#"{"error":42}"#), FALLBACK_MESSAGE);
    }

    #[test]
    fn empty_or_blank_body_falls_back() {
        assert_eq!(message_from_body(""), FALLBACK_MESSAGE);
        assert_eq!(message_from_body("  \n"), FALLBACK_MESSAGE);
    }

    #[test]
    fn non_object_json_falls_back() {
        assert_eq!(message_from_body("[1,2,3]"), FALLBACK_MESSAGE);
        assert_eq!(message_from_body("500"), FALLBACK_MESSAGE);
    }

    #[test]
    fn full_server_error_shape() {
        // The separation server reports subprocess failures with
        // success/message/error fields; only `error` reaches the banner.
        let body = r#"{"success":false,"message":"Error processing file","error":"demucs: out of memory"}"#;
        assert_eq!(message_from_body(body), "demucs: out of memory");
    }
}
