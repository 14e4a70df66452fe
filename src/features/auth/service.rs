//! Account endpoints of the exam API. Each operation is one POST; transport
//! errors are returned to the caller unchanged and nothing is retried.

use crate::{
    app_lib::{AppError, HttpResponse, Transport, encode_body},
    features::{
        api_types::{ApiOutcome, MessageBody},
        auth::types::{ChangePasswordRequest, ForgetPasswordRequest, LoginCredentials, LoginGrant},
    },
};
use tracing::debug;

pub const LOGIN_PATH: &str = "/api/users/frountuserlogin";
pub const CHANGE_PASSWORD_PATH: &str = "/users/changepassword";
pub const FORGET_PASSWORD_PATH: &str = "/api/users/forgetpass";

pub struct AuthService<T> {
    transport: T,
}

impl<T: Transport> AuthService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the full response (status, headers, body), not just the body.
    pub async fn validate_login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<HttpResponse, AppError> {
        let body = encode_body(credentials)?;
        self.transport.post_json(LOGIN_PATH, &body).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiOutcome<MessageBody>, AppError> {
        let body = encode_body(request)?;
        let response = self.transport.post_json(CHANGE_PASSWORD_PATH, &body).await?;
        decode_message(CHANGE_PASSWORD_PATH, &response)
    }

    pub async fn forget_password(
        &self,
        request: &ForgetPasswordRequest,
    ) -> Result<ApiOutcome<MessageBody>, AppError> {
        let body = encode_body(request)?;
        let response = self.transport.post_json(FORGET_PASSWORD_PATH, &body).await?;
        decode_message(FORGET_PASSWORD_PATH, &response)
    }
}

#[cfg(target_arch = "wasm32")]
impl AuthService<crate::app_lib::BrowserTransport> {
    pub fn browser() -> Self {
        let config = crate::app_lib::config::AppConfig::load();
        Self::new(crate::app_lib::BrowserTransport::from_config(&config))
    }
}

/// Interprets the body of a login response.
pub fn login_outcome(response: &HttpResponse) -> Result<ApiOutcome<LoginGrant>, AppError> {
    let outcome = ApiOutcome::decode(&response.body, |body| Ok(LoginGrant::from_body(body)))?;
    debug!(path = LOGIN_PATH, success = outcome.is_success(), "login answered");
    Ok(outcome)
}

fn decode_message(
    path: &str,
    response: &HttpResponse,
) -> Result<ApiOutcome<MessageBody>, AppError> {
    let outcome = ApiOutcome::decode(&response.body, MessageBody::from_body)?;
    debug!(path, success = outcome.is_success(), "request answered");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::mock::RecordingTransport;
    use serde_json::json;

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "student@example.org".to_string(),
            password: "pa55".to_string(),
        }
    }

    #[tokio::test]
    async fn validate_login_posts_credentials_and_returns_envelope() {
        let transport =
            RecordingTransport::new().with_json(json!({"code": 200, "token": "tok-1"}));
        let service = AuthService::new(&transport);

        let response = service.validate_login(&credentials()).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.body["token"], "tok-1");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, LOGIN_PATH);
        assert_eq!(
            requests[0].body,
            json!({"email": "student@example.org", "password": "pa55"})
        );
    }

    #[tokio::test]
    async fn change_password_decodes_message_outcomes() {
        let transport = RecordingTransport::new()
            .with_json(json!({"code": 200, "message": "Password updated"}))
            .with_json(json!({"code": 400, "message": "Old password mismatch"}));
        let service = AuthService::new(&transport);
        let request = ChangePasswordRequest {
            old_password: "a".to_string(),
            new_password: "b".to_string(),
            confirm_password: "b".to_string(),
            token: Some("tok".to_string()),
        };

        let first = service.change_password(&request).await.unwrap();
        let second = service.change_password(&request).await.unwrap();

        assert_eq!(
            first,
            ApiOutcome::Success(MessageBody {
                message: Some("Password updated".to_string())
            })
        );
        assert_eq!(
            second,
            ApiOutcome::Rejected {
                message: Some("Old password mismatch".to_string())
            }
        );
        assert!(
            transport
                .requests()
                .iter()
                .all(|request| request.path == CHANGE_PASSWORD_PATH)
        );
        assert_eq!(transport.requests()[0].body["token"], "tok");
    }

    #[tokio::test]
    async fn forget_password_posts_email() {
        let transport = RecordingTransport::new().with_json(json!({"code": 200}));
        let service = AuthService::new(&transport);

        let outcome = service
            .forget_password(&ForgetPasswordRequest {
                email: "student@example.org".to_string(),
            })
            .await
            .unwrap();

        assert!(outcome.is_success());
        assert_eq!(transport.requests()[0].path, FORGET_PASSWORD_PATH);
        assert_eq!(
            transport.requests()[0].body,
            json!({"email": "student@example.org"})
        );
    }

    #[tokio::test]
    async fn transport_errors_pass_through_unchanged() {
        let error = AppError::Http {
            status: 503,
            message: "maintenance".to_string(),
        };
        let transport = RecordingTransport::new().with_error(error.clone());
        let service = AuthService::new(&transport);

        let result = service
            .forget_password(&ForgetPasswordRequest {
                email: "x@y.z".to_string(),
            })
            .await;

        assert_eq!(result, Err(error));
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn login_outcome_reads_body_code() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: json!({"code": 400, "message": "Invalid credentials"}),
        };
        assert_eq!(
            login_outcome(&response).unwrap(),
            ApiOutcome::Rejected {
                message: Some("Invalid credentials".to_string())
            }
        );
    }
}
