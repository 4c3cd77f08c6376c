//! Known shapes of upstream error payloads.
//!
//! The API reports failures in one of a few shapes. They are decoded into a
//! closed set of variants, checked in a fixed priority order:
//!
//! 1. `errors`: field-level messages, flattened in iteration order;
//! 2. `message`: a top-level message string;
//! 3. `title`: a problem-details title;
//!
//! and anything else is [`UpstreamErrorBody::Unrecognized`].

use serde_json::Value;

/// Messages reported for one upstream field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessages {
    pub field: String,
    pub messages: Vec<String>,
}

/// Decoded upstream error payload.
///
/// # Examples
/// ```
/// use tripfront::domain::UpstreamErrorBody;
///
/// let body = UpstreamErrorBody::decode(
///     br#"{"errors":{"email":["invalid"],"password":["too short"]},"message":"ignored"}"#,
/// );
/// assert_eq!(body.message_or("fallback"), "invalid, too short");
///
/// let body = UpstreamErrorBody::decode(b"<html>bad gateway</html>");
/// assert_eq!(body.message_or("fallback"), "fallback");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamErrorBody {
    FieldErrors(Vec<FieldMessages>),
    Message(String),
    Title(String),
    Unrecognized,
}

impl UpstreamErrorBody {
    /// Decode a raw response body; non-JSON bodies are unrecognised.
    pub fn decode(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or(Self::Unrecognized)
    }

    /// Classify an already parsed JSON payload.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::Unrecognized;
        };
        if let Some(fields) = map.get("errors").and_then(field_errors) {
            return Self::FieldErrors(fields);
        }
        if let Some(message) = map.get("message").and_then(non_empty_str) {
            return Self::Message(message.to_owned());
        }
        if let Some(title) = map.get("title").and_then(non_empty_str) {
            return Self::Title(title.to_owned());
        }
        Self::Unrecognized
    }

    /// User-facing text for this payload, if it carries any.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::FieldErrors(fields) => Some(
                fields
                    .iter()
                    .flat_map(|field| field.messages.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Message(message) | Self::Title(message) => Some(message.clone()),
            Self::Unrecognized => None,
        }
    }

    /// User-facing text, or `fallback` when the payload has none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.user_message().unwrap_or_else(|| fallback.to_owned())
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}

fn field_errors(value: &Value) -> Option<Vec<FieldMessages>> {
    let fields: Vec<FieldMessages> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(field, messages)| FieldMessages {
                field: field.clone(),
                messages: flatten_messages(messages),
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, messages)| FieldMessages {
                field: index.to_string(),
                messages: flatten_messages(messages),
            })
            .collect(),
        _ => return None,
    };
    fields
        .iter()
        .any(|field| !field.messages.is_empty())
        .then_some(fields)
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(message_text).collect(),
        other => message_text(other).into_iter().collect(),
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn joins_field_errors_in_payload_order() {
        let body = UpstreamErrorBody::from_value(&json!({
            "errors": { "password": ["too short"], "email": ["invalid", "taken"] }
        }));
        assert_eq!(
            body.user_message().as_deref(),
            Some("too short, invalid, taken")
        );
    }

    #[rstest]
    fn scalar_field_errors_are_kept() {
        let body = UpstreamErrorBody::from_value(&json!({ "errors": { "email": "invalid" } }));
        assert_eq!(body.message_or("fallback"), "invalid");
    }

    #[rstest]
    #[case(json!({ "message": "not found", "title": "Not Found" }), "not found")]
    #[case(json!({ "title": "One or more validation errors occurred." }), "One or more validation errors occurred.")]
    #[case(json!({ "errors": {}, "message": "boom" }), "boom")]
    #[case(json!({ "message": "", "title": "Bad Request" }), "Bad Request")]
    #[case(json!({ "status": 500 }), "fallback")]
    #[case(json!(["unexpected"]), "fallback")]
    fn follows_priority_order(#[case] payload: Value, #[case] expected: &str) {
        assert_eq!(
            UpstreamErrorBody::from_value(&payload).message_or("fallback"),
            expected
        );
    }

    #[rstest]
    fn empty_body_is_unrecognised() {
        assert_eq!(UpstreamErrorBody::decode(b""), UpstreamErrorBody::Unrecognized);
    }
}
