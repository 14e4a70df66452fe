use crate::{
    app_lib::{AppError, Transport, encode_body},
    features::{
        api_types::ApiOutcome,
        result::types::{ExamDetailsRequest, ExamResult},
    },
};
use tracing::debug;

pub const VIEW_EXAM_PATH: &str = "/api/exam/view_exam";

pub struct ResultService<T> {
    transport: T,
}

impl<T: Transport> ResultService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches the exam details for `token`. A missing token is still sent
    /// (as `null`) and the server decides.
    pub async fn get_exam_details(
        &self,
        token: Option<String>,
    ) -> Result<ApiOutcome<ExamResult>, AppError> {
        let body = encode_body(&ExamDetailsRequest { token })?;
        let response = self.transport.post_json(VIEW_EXAM_PATH, &body).await?;
        let outcome = ApiOutcome::decode(&response.body, |body| Ok(ExamResult::from_body(body)))?;
        debug!(path = VIEW_EXAM_PATH, success = outcome.is_success(), "exam details answered");
        Ok(outcome)
    }
}

#[cfg(target_arch = "wasm32")]
impl ResultService<crate::app_lib::BrowserTransport> {
    pub fn browser() -> Self {
        let config = crate::app_lib::config::AppConfig::load();
        Self::new(crate::app_lib::BrowserTransport::from_config(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::mock::RecordingTransport;
    use serde_json::json;

    #[tokio::test]
    async fn posts_token_and_extracts_result() {
        let transport = RecordingTransport::new().with_json(json!({
            "code": 200,
            "result": {"grade": "B", "maths": {"marks": 41}}
        }));
        let service = ResultService::new(&transport);

        let outcome = service.get_exam_details(Some("tok-9".to_string())).await.unwrap();

        assert_eq!(
            outcome,
            ApiOutcome::Success(ExamResult(json!({"grade": "B", "maths": {"marks": 41}})))
        );
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, VIEW_EXAM_PATH);
        assert_eq!(requests[0].body, json!({"token": "tok-9"}));
    }

    #[tokio::test]
    async fn missing_token_is_sent_as_null() {
        let transport = RecordingTransport::new().with_json(json!({"code": 400, "message": "Unauthorized"}));
        let service = ResultService::new(&transport);

        let outcome = service.get_exam_details(None).await.unwrap();

        assert_eq!(
            outcome,
            ApiOutcome::Rejected {
                message: Some("Unauthorized".to_string())
            }
        );
        assert_eq!(transport.requests()[0].body, json!({"token": null}));
    }

    #[tokio::test]
    async fn network_failure_is_returned() {
        let transport =
            RecordingTransport::new().with_error(AppError::Network("offline".to_string()));
        let service = ResultService::new(&transport);

        assert_eq!(
            service.get_exam_details(None).await,
            Err(AppError::Network("offline".to_string()))
        );
    }
}
