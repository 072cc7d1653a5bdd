//! Client error types.
//!
//! Every failure of a request surfaces as a single [`CsError`]. Callers that
//! care about a rejected call match on [`CsError::Api`] and inspect the
//! [`ApiError`] fields rather than the message text.

use std::fmt;

use rustacs_core::ConfigError;

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while constructing a client or performing a request.
#[derive(Debug, thiserror::Error)]
pub enum CsError {
    /// The client configuration is missing a required field.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with a non-200 status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body is not UTF-8 JSON.
    #[error("invalid response body (status {status}): {reason}")]
    ResponseFormat {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, lossily decoded.
        body: String,
        /// What made the body unreadable.
        reason: String,
    },

    /// A typed request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP request could not be built, e.g. an invalid header value.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl CsError {
    /// Return the [`ApiError`] if this is a service-side rejection.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Convenience result type for client operations.
pub type CsResult<T> = Result<T, CsError>;

/// Failures raised by a [`crate::Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// The connection could not be established (DNS, TCP, TLS).
    #[error("connection failed: {0}")]
    Connect(#[source] BoxError),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(#[source] BoxError),
}

/// A non-200 response from the service.
///
/// `info` is `"ACS: "` followed by the `Code` field of the response body.
/// When the body has no `Code`, `info` is `"ACS: undefined"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code.
    pub code: u16,
    /// ACS error summary, e.g. `ACS: InvalidAccessKeyId.NotFound`.
    pub info: String,
    /// Parsed response body.
    pub raw: serde_json::Value,
}

impl ApiError {
    /// Build an error from a status code and the parsed response body.
    #[must_use]
    pub fn new(code: u16, raw: serde_json::Value) -> Self {
        let acs_code = raw.get("Code").map_or_else(|| "undefined".to_owned(), js_string);
        Self {
            code,
            info: format!("ACS: {acs_code}"),
            raw,
        }
    }

    /// The `Code` field of the response body, when it is a string.
    #[must_use]
    pub fn acs_code(&self) -> Option<&str> {
        self.raw.get("Code").and_then(serde_json::Value::as_str)
    }

    /// The `Message` field of the response body, when it is a string.
    #[must_use]
    pub fn acs_message(&self) -> Option<&str> {
        self.raw.get("Message").and_then(serde_json::Value::as_str)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = serde_json::json!({
            "code": self.code,
            "message": self.raw,
        });
        write!(f, "{payload}")
    }
}

impl std::error::Error for ApiError {}

/// String conversion of a JSON value the way the service's error summaries
/// render it (strings unquoted, arrays comma-joined).
fn js_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_owned(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => js_number(n),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_null() {
                    String::new()
                } else {
                    js_string(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// Whole-valued floats print without a fractional part (`1.0` as `1`).
fn js_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_owned()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
