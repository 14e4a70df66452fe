//! Request and response types for the account endpoints. Requests carry
//! passwords and the session token, so their `Debug` output is redacted and
//! they must never be logged.

use crate::features::api_types::message_of;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const REDACTED: &str = "<redacted>";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Sent as-is; `confirm_password` is not compared with `new_password` here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    /// Serialized as `null` when no token is stored.
    pub token: Option<String>,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChangePasswordRequest")
            .field("old_password", &REDACTED)
            .field("new_password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .field("token", &self.token.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgetPasswordRequest {
    pub email: String,
}

/// What a successful login body grants: a token (when the API includes one)
/// and an optional message.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct LoginGrant {
    pub token: Option<String>,
    pub message: Option<String>,
}

impl fmt::Debug for LoginGrant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginGrant")
            .field("token", &self.token.as_ref().map(|_| REDACTED))
            .field("message", &self.message)
            .finish()
    }
}

impl LoginGrant {
    /// Looks for `token` at the top level, then under `result` and `data`.
    pub fn from_body(body: &Value) -> Self {
        let token = [Some(body), body.get("result"), body.get("data")]
            .into_iter()
            .flatten()
            .find_map(|scope| scope.get("token").and_then(Value::as_str))
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Self {
            token,
            message: message_of(body),
        }
    }
}
