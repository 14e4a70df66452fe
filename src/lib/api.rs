//! HTTP plumbing for the exam API. Every service call is a single JSON POST
//! against the configured base URL, so the seam is one `Transport` trait with a
//! browser implementation on top of `gloo-net`. The helpers never log request
//! bodies: they carry passwords and session tokens.

use super::errors::AppError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// A decoded 2xx response: status line, headers and JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl HttpResponse {
    /// Returns the first header value matching `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Single-shot JSON POST. Non-2xx statuses and network failures come back as
/// `AppError`; nothing is retried.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, AppError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, AppError> {
        (**self).post_json(path, body).await
    }
}

/// Encodes a request payload into the JSON value handed to a transport.
pub fn encode_body<B: Serialize>(body: &B) -> Result<Value, AppError> {
    serde_json::to_value(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Parses a response body, treating an empty body as JSON `null`.
pub fn parse_body(text: &str) -> Result<Value, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(trimmed)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{HttpResponse, Transport, build_url_with_base, parse_body, sanitize_body};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use async_trait::async_trait;
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use serde_json::Value;
    use tracing::{debug, warn};
    use web_sys::{AbortController, AbortSignal};

    /// `fetch`-backed transport bound to the configured API base URL.
    #[derive(Clone, Debug)]
    pub struct BrowserTransport {
        base_url: String,
        timeout_ms: Option<u32>,
    }

    impl BrowserTransport {
        pub fn from_config(config: &AppConfig) -> Self {
            Self {
                base_url: config.api_base_url.clone(),
                timeout_ms: config.request_timeout_ms,
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for BrowserTransport {
        async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, AppError> {
            let url = build_url_with_base(&self.base_url, path);
            let payload = serde_json::to_string(body).map_err(|err| {
                AppError::Serialization(format!("Failed to encode request: {err}"))
            })?;
            debug!(path, "POST");

            let response = send(self.timeout_ms, move |signal| {
                Request::post(&url)
                    .header("Content-Type", "application/json")
                    .abort_signal(signal)
                    .body(payload)
                    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
            })
            .await
            .inspect_err(|err| warn!(path, %err, "request failed"))?;

            into_http_response(response).await
        }
    }

    /// Sends a request, arming an abort timer only when a timeout is configured.
    async fn send(
        timeout_ms: Option<u32>,
        build_request: impl FnOnce(Option<&AbortSignal>) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let Some(millis) = timeout_ms else {
            return build_request(None)?.send().await.map_err(map_request_error);
        };

        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(millis, move || timeout_controller.abort());

        build_request(Some(&signal))?
            .send()
            .await
            .map_err(map_request_error)
    }

    /// Maps network errors into `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    async fn into_http_response(response: Response) -> Result<HttpResponse, AppError> {
        let status = response.status();
        let headers = response.headers().entries().collect::<Vec<_>>();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            warn!(status, "non-success HTTP status");
            return Err(AppError::Http {
                status,
                message: sanitize_body(&text),
            });
        }

        Ok(HttpResponse {
            status,
            headers,
            body: parse_body(&text)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpResponse, build_url_with_base, encode_body, parse_body, sanitize_body};
    use crate::app_lib::AppError;
    use serde::Serialize;
    use serde_json::{Value, json};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://exam.example.org/", "/api/exam/view_exam"),
            "https://exam.example.org/api/exam/view_exam"
        );
        assert_eq!(
            build_url_with_base("https://exam.example.org", "users/changepassword"),
            "https://exam.example.org/users/changepassword"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_relative_path() {
        assert_eq!(
            build_url_with_base("  ", "/api/users/forgetpass"),
            "/api/users/forgetpass"
        );
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body("  oops \n"), "oops");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(&long).len(), 200);
    }

    #[test]
    fn parse_body_accepts_empty_and_rejects_garbage() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body(r#"{"code":200}"#).unwrap(), json!({"code": 200}));
        assert!(matches!(parse_body("<html>"), Err(AppError::Parse(_))));
    }

    #[test]
    fn encode_body_serializes_structs() {
        #[derive(Serialize)]
        struct Probe {
            email: String,
        }

        let value = encode_body(&Probe {
            email: "a@b.c".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({"email": "a@b.c"}));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Value::Null,
        };
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}
