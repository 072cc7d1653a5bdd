//! Response parsing and classification.

use bytes::Bytes;
use serde_json::Value;

use crate::error::{ApiError, CsError, CsResult};

/// A successful (HTTP 200) response.
#[derive(Debug, Clone)]
pub struct CsResponse {
    /// HTTP status code, always 200.
    pub code: u16,
    /// Response headers.
    pub headers: http::HeaderMap,
    /// Parsed JSON body; `{}` when the body is empty or JSON-falsy.
    pub body: Value,
}

/// Parse a response body as JSON.
///
/// An empty body, or a body that parses to a falsy value (`null`, `false`,
/// `0`, `""`), yields an empty object.
///
/// # Errors
///
/// Returns [`CsError::ResponseFormat`] when the body is not UTF-8 or not
/// valid JSON.
pub fn parse_body(status: u16, body: &[u8]) -> CsResult<Value> {
    let text = std::str::from_utf8(body).map_err(|e| CsError::ResponseFormat {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
        reason: e.to_string(),
    })?;

    if text.trim().is_empty() {
        return Ok(empty_object());
    }

    let value: Value = serde_json::from_str(text).map_err(|e| CsError::ResponseFormat {
        status,
        body: text.to_owned(),
        reason: e.to_string(),
    })?;

    Ok(if is_falsy(&value) {
        empty_object()
    } else {
        value
    })
}

/// Classify a transport response: 200 is success, anything else is an
/// [`ApiError`].
pub fn classify(response: http::Response<Bytes>) -> CsResult<CsResponse> {
    let (parts, body) = response.into_parts();
    let code = parts.status.as_u16();
    let body = parse_body(code, &body)?;

    if code != 200 {
        let err = ApiError::new(code, body);
        tracing::debug!(code, info = %err.info, "ACS request rejected");
        return Err(err.into());
    }

    Ok(CsResponse {
        code,
        headers: parts.headers,
        body,
    })
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
