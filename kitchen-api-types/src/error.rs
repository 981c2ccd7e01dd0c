/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error body returned by a rejected `POST /api/register-tenant/`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure payload of the registration endpoint.
///
/// ```json
/// { "errors": { "subdomain": ["already taken"], "admin_email": "invalid" } }
/// { "detail": "Registration is closed" }
/// ```
///
/// Every field is optional and loosely typed; the backend is not consistent
/// about strings versus lists, so values are kept as raw JSON.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RegistrationErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl RegistrationErrorBody {
    /// Parse a response body, treating anything that is not a JSON object
    /// as an empty body.
    pub fn from_bytes(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// One line per field, `field: first, second`, in server order. `None`
    /// when there is no non-empty `errors` object.
    pub fn field_errors(&self) -> Option<String> {
        let errors = self.errors.as_ref()?.as_object()?;
        if errors.is_empty() {
            return None;
        }
        let lines: Vec<String> = errors
            .iter()
            .map(|(field, messages)| format!("{field}: {}", join_messages(messages)))
            .collect();
        Some(lines.join("\n"))
    }

    /// The message shown to the user for a failed request with `status`.
    pub fn display_message(&self, status: u16) -> String {
        self.field_errors()
            .or_else(|| non_empty_text(self.detail.as_ref()))
            .or_else(|| non_empty_text(self.message.as_ref()))
            .unwrap_or_else(|| format!("Request failed with status {status}"))
    }
}

fn join_messages(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(", "),
        other => text_of(other),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(text_of(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(body: &str, status: u16) -> String {
        RegistrationErrorBody::from_bytes(body.as_bytes()).display_message(status)
    }

    #[test]
    fn field_list_is_joined() {
        let text = message(r#"{"errors": {"subdomain": ["already taken"]}}"#, 400);
        assert!(text.contains("subdomain: already taken"));
    }

    #[test]
    fn one_line_per_field_in_server_order() {
        let text = message(
            r#"{"errors": {"subdomain": ["already taken", "reserved"], "admin_email": "invalid"}}"#,
            400,
        );
        assert_eq!(text, "subdomain: already taken, reserved\nadmin_email: invalid");
    }

    #[test]
    fn detail_then_message_then_status() {
        assert_eq!(message(r#"{"detail": "closed", "message": "m"}"#, 403), "closed");
        assert_eq!(message(r#"{"message": "try later"}"#, 503), "try later");
        assert_eq!(message(r#"{}"#, 500), "Request failed with status 500");
    }

    #[test]
    fn empty_errors_object_falls_through() {
        assert_eq!(message(r#"{"errors": {}, "detail": "bad"}"#, 400), "bad");
        assert_eq!(message(r#"{"errors": "oops"}"#, 422), "Request failed with status 422");
    }

    #[test]
    fn non_json_body_uses_status() {
        assert_eq!(
            message("<html>Bad Gateway</html>", 502),
            "Request failed with status 502"
        );
    }
}
