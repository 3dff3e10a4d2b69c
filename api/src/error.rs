//! Failure taxonomy for backend calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-level validation messages, keyed by field name.
///
/// The backend reports rejected form input as a JSON object whose values
/// are arrays of messages, e.g.
/// `{"username": ["A user with that username already exists."]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one field.
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All messages joined into one line, for single-block display.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        for messages in self.0.values() {
            for message in messages {
                parts.push(message.as_str());
            }
        }
        parts.join(" ")
    }
}

/// Error type surfaced by every backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// No response within the client timeout.
    #[error("request timed out")]
    Timeout,
    /// Authentication rejected or expired. Handled globally: the session is
    /// cleared and the user is sent back to the login page.
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    /// Rejected form input, either checked locally or by the backend.
    #[error("{}", .0.summary())]
    Validation(FieldErrors),
    /// Any other backend failure, with its message when one was sent.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A 2xx response whose body did not match the expected shape, or a
    /// payload that could not be encoded.
    #[error("error decoding response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => match parse_error_body(body) {
                Some(ErrorBody::Fields(errors)) => ApiError::Validation(errors),
                Some(ErrorBody::Message(message)) => ApiError::Server { status, message },
                None => ApiError::Server {
                    status,
                    message: format!("request failed with status {status}"),
                },
            },
        }
    }

    /// Single validation message under one field, for client-side checks.
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        ApiError::Validation(FieldErrors(errors))
    }

    /// Field messages when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

enum ErrorBody {
    Message(String),
    Fields(FieldErrors),
}

fn parse_error_body(body: &str) -> Option<ErrorBody> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    // `{"error": "..."}` and `{"detail": "..."}` carry a single message.
    for key in ["error", "detail", "message"] {
        if let Some(message) = object.get(key).and_then(|v| v.as_str()) {
            return Some(ErrorBody::Message(message.to_string()));
        }
    }

    // A map of field -> [messages] is a validation failure.
    let mut fields = BTreeMap::new();
    for (field, messages) in object {
        let list = messages.as_array()?;
        let mut collected = Vec::new();
        for message in list {
            collected.push(message.as_str()?.to_string());
        }
        fields.insert(field.clone(), collected);
    }
    if fields.is_empty() {
        return None;
    }
    Some(ErrorBody::Fields(FieldErrors(fields)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_and_not_found_by_status() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_response(404, r#"{"error": "Book not found"}"#),
            ApiError::NotFound
        );
    }

    #[test]
    fn field_map_classifies_as_validation() {
        let err = ApiError::from_response(
            400,
            r#"{"username": ["This field is required."], "password": ["Too short.", "Too common."]}"#,
        );
        let fields = err.field_errors().expect("validation failure");
        assert_eq!(fields.field("username"), ["This field is required."]);
        assert_eq!(fields.field("password").len(), 2);
        assert!(fields.field("email").is_empty());
        // Fields are reported in key order.
        assert_eq!(
            err.to_string(),
            "Too short. Too common. This field is required."
        );
    }

    #[test]
    fn error_and_detail_messages_pass_through() {
        assert_eq!(
            ApiError::from_response(500, r#"{"error": "boom"}"#),
            ApiError::Server {
                status: 500,
                message: "boom".into()
            }
        );
        assert_eq!(
            ApiError::from_response(403, r#"{"detail": "You do not have permission."}"#)
                .to_string(),
            "You do not have permission."
        );
    }

    #[test]
    fn unparseable_body_gets_a_generic_message() {
        assert_eq!(
            ApiError::from_response(502, "<html>Bad Gateway</html>"),
            ApiError::Server {
                status: 502,
                message: "request failed with status 502".into()
            }
        );
        assert_eq!(
            ApiError::from_response(400, r#"{"count": 3}"#),
            ApiError::Server {
                status: 400,
                message: "request failed with status 400".into()
            }
        );
    }

    #[test]
    fn local_validation_helper_carries_its_field() {
        let err = ApiError::validation("rating", "rating must be between 1 and 10");
        assert_eq!(
            err.field_errors().unwrap().field("rating"),
            ["rating must be between 1 and 10"]
        );
    }
}
