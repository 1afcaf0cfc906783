//! Request failures and defensive parsing of backend failure bodies.
//!
//! ERROR HANDLING
//! ==============
//! The failure-body schema is inferred, not documented, so `FailureBody`
//! accepts whatever JSON it is given and keeps only what matches the
//! configured keys. Anything unrecognised degrades to a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde_json::Value;

/// Errors surfaced by a [`TransporterApi`](super::api::TransporterApi) call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, failure: FailureBody },
    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// A 2xx body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Parsed failure body, when the server sent one.
    pub fn failure(&self) -> Option<&FailureBody> {
        match self {
            Self::Status { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

/// The useful parts of an error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureBody {
    /// Server-provided human-readable message.
    pub message: Option<String>,
    /// Field name → message. `None` when absent, malformed, or empty.
    pub field_errors: Option<BTreeMap<String, String>>,
}

impl FailureBody {
    /// Extract message and field errors from an arbitrary JSON body.
    ///
    /// Field-error values may be a string or an array of strings; the first
    /// non-empty string is kept. Entries of any other shape are dropped.
    pub fn from_value(body: &Value, errors_key: &str, message_key: &str) -> Self {
        let Value::Object(map) = body else {
            return Self::default();
        };

        let message = map
            .get(message_key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned);

        let field_errors = map
            .get(errors_key)
            .and_then(Value::as_object)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|(field, value)| first_message(value).map(|msg| (field.clone(), msg)))
                    .collect::<BTreeMap<_, _>>()
            })
            .filter(|errors| !errors.is_empty());

        Self { message, field_errors }
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}
