//! The exam API answers HTTP 200 for both accepted and rejected requests and
//! carries the verdict in a numeric `code` field of the body. This module
//! decodes that convention once so callers match on `ApiOutcome` variants.

use crate::app_lib::AppError;
use serde_json::Value;

/// Body `code` for an accepted request.
pub const CODE_SUCCESS: i64 = 200;
/// Body `code` for a request rejected by server-side validation.
pub const CODE_REJECTED: i64 = 400;

/// Application-level verdict extracted from a 2xx body.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Rejected { message: Option<String> },
    /// Any other (or missing) code. Views leave their state untouched.
    Unrecognized { code: Option<i64> },
}

impl<T> ApiOutcome<T> {
    /// Decodes `body`, running `payload` only for `code == 200`.
    pub fn decode(
        body: &Value,
        payload: impl FnOnce(&Value) -> Result<T, AppError>,
    ) -> Result<Self, AppError> {
        match response_code(body) {
            Some(CODE_SUCCESS) => payload(body).map(ApiOutcome::Success),
            Some(CODE_REJECTED) => Ok(ApiOutcome::Rejected {
                message: message_of(body),
            }),
            code => Ok(ApiOutcome::Unrecognized { code }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }
}

/// `{code, message}` bodies returned by the password endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBody {
    pub message: Option<String>,
}

impl MessageBody {
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        Ok(Self {
            message: message_of(body),
        })
    }
}

/// Reads `code` as a number, also accepting whole floats (`200.0`) and
/// numeric strings such as `"200"`.
pub fn response_code(body: &Value) -> Option<i64> {
    match body.get("code")? {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0 && value.abs() <= i64::MAX as f64)
                .map(|value| value as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Reads `message` when it is a string; other shapes are rendered as JSON text.
pub fn message_of(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
