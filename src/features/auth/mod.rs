//! Account feature: login, password change and password reset against the
//! exam API, plus the token guard for protected routes. Payloads carry
//! passwords and the session token and must never be logged.
//!
//! Flow Overview: a page fills its form model, `submit` yields a request only
//! when every required field is set, the service POSTs it, and `apply` turns
//! the body `code` (200 or 400) into the message the page shows.

pub(crate) mod forms;
mod guards;
pub(crate) mod service;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireToken;
pub(crate) use guards::{GuardDecision, can_activate};
