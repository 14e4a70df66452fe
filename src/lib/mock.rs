//! Recording transport for unit tests.
//!
//! Queue canned replies with the builder methods, run the code under test,
//! then assert on the captured requests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::api::{HttpResponse, Transport};
use super::errors::AppError;

/// A POST captured by [`RecordingTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedRequest {
    pub path: String,
    pub body: Value,
}

#[derive(Default)]
pub struct RecordingTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, AppError>>>,
    requests: RefCell<Vec<CapturedRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a 200 reply with the given JSON body.
    pub fn with_json(self, body: Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }));
        self
    }

    /// Queues a transport failure.
    pub fn with_error(self, error: AppError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, AppError> {
        self.requests.borrow_mut().push(CapturedRequest {
            path: path.to_string(),
            body: body.clone(),
        });
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(AppError::Network(format!(
                "no reply queued for POST {path}"
            )))
        })
    }
}
