//! Shared frontend utilities for API access, configuration, errors, logging
//! and build metadata.
//!
//! ## Request Flow
//!
//! 1. **Form:** A page validates its form model locally; nothing is sent while a
//!    required field is empty.
//! 2. **Service:** The feature service encodes the payload and POSTs it through a
//!    [`Transport`] to `api_base_url + path`.
//! 3. **Outcome:** The JSON body is decoded into an `ApiOutcome` (`code` 200 or 400)
//!    and the page updates its message or payload.
//!
//! Transport failures propagate as [`AppError`] and are logged, never rendered.
//! Request bodies carry passwords and the session token, so callers must not log them.

pub(crate) mod api;
pub(crate) mod build_info;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
#[cfg(test)]
pub(crate) mod mock;

pub(crate) use api::{HttpResponse, Transport, encode_body};
#[cfg(target_arch = "wasm32")]
pub(crate) use api::BrowserTransport;
pub(crate) use errors::AppError;
