//! Page models for the login, change-password and forget-password forms.
//!
//! Each submit is split around the network call: `submit` marks the form
//! submitted and yields a request only when every required field is filled,
//! and `apply` folds the decoded outcome into the message the page displays.

use crate::features::{
    api_types::{ApiOutcome, MessageBody},
    auth::types::{ChangePasswordRequest, ForgetPasswordRequest, LoginCredentials, LoginGrant},
    forms::{FieldRule, FieldSpec, FormModel},
};

/// Message shown after a password reset was accepted, whatever the body said.
pub const RESET_MAIL_SENT: &str = "Please Check Mail";

const LOGIN_FIELDS: [FieldSpec; 2] = [FieldSpec::required("email"), FieldSpec::required("password")];

const CHANGE_PASSWORD_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("old_password"),
    FieldSpec::required("new_password"),
    FieldSpec::required("confirm_password"),
];

const FORGET_PASSWORD_FIELDS: [FieldSpec; 1] = [FieldSpec::required("email")];

fn field(form: &FormModel, name: &str) -> String {
    form.value(name).unwrap_or_default().to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub form: FormModel,
    pub message: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(&LOGIN_FIELDS),
            message: None,
        }
    }

    pub fn has_error(&self, name: &str, rule: FieldRule) -> bool {
        self.form.has_error(name, rule)
    }

    pub fn submit(&mut self) -> Option<LoginCredentials> {
        self.form.begin_submit().then(|| LoginCredentials {
            email: field(&self.form, "email"),
            password: field(&self.form, "password"),
        })
    }

    /// Returns the token to persist when the login was accepted and carried one.
    pub fn apply(&mut self, outcome: ApiOutcome<LoginGrant>) -> Option<String> {
        match outcome {
            ApiOutcome::Success(grant) => {
                self.message = grant.message;
                grant.token
            }
            ApiOutcome::Rejected { message } => {
                self.message = message;
                None
            }
            ApiOutcome::Unrecognized { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub form: FormModel,
    /// Token captured when the page was opened; sent with every submit.
    pub token: Option<String>,
    pub message: Option<String>,
}

impl ChangePasswordForm {
    pub fn new(token: Option<String>) -> Self {
        Self {
            form: FormModel::new(&CHANGE_PASSWORD_FIELDS),
            token,
            message: None,
        }
    }

    pub fn has_error(&self, name: &str, rule: FieldRule) -> bool {
        self.form.has_error(name, rule)
    }

    pub fn submit(&mut self) -> Option<ChangePasswordRequest> {
        self.form.begin_submit().then(|| ChangePasswordRequest {
            old_password: field(&self.form, "old_password"),
            new_password: field(&self.form, "new_password"),
            confirm_password: field(&self.form, "confirm_password"),
            token: self.token.clone(),
        })
    }

    /// Accepted and rejected requests both display the server message.
    pub fn apply(&mut self, outcome: ApiOutcome<MessageBody>) {
        match outcome {
            ApiOutcome::Success(body) => self.message = body.message,
            ApiOutcome::Rejected { message } => self.message = message,
            ApiOutcome::Unrecognized { .. } => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForgetPasswordForm {
    pub form: FormModel,
    pub message: Option<String>,
}

impl Default for ForgetPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgetPasswordForm {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(&FORGET_PASSWORD_FIELDS),
            message: None,
        }
    }

    pub fn has_error(&self, name: &str, rule: FieldRule) -> bool {
        self.form.has_error(name, rule)
    }

    pub fn submit(&mut self) -> Option<ForgetPasswordRequest> {
        self.form.begin_submit().then(|| ForgetPasswordRequest {
            email: field(&self.form, "email"),
        })
    }

    /// A rejection leaves the current message as it was.
    pub fn apply(&mut self, outcome: ApiOutcome<MessageBody>) {
        if outcome.is_success() {
            self.message = Some(RESET_MAIL_SENT.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::mock::RecordingTransport;
    use crate::features::auth::service::{AuthService, LOGIN_PATH, login_outcome};
    use serde_json::json;

    #[tokio::test]
    async fn empty_login_fields_issue_no_request() {
        let transport = RecordingTransport::new();
        let service = AuthService::new(&transport);
        let mut page = LoginForm::new();
        page.form.set("email", "student@example.org");

        if let Some(credentials) = page.submit() {
            service.validate_login(&credentials).await.ok();
        }

        assert_eq!(transport.request_count(), 0);
        assert!(page.form.submitted());
        assert!(page.has_error("password", FieldRule::Required));
        assert!(!page.has_error("email", FieldRule::Required));
    }

    #[tokio::test]
    async fn valid_login_issues_exactly_one_post_with_fields() {
        let transport = RecordingTransport::new().with_json(json!({
            "code": 200,
            "message": "Welcome",
            "result": {"token": "tok-7"}
        }));
        let service = AuthService::new(&transport);
        let mut page = LoginForm::new();
        page.form.set("email", "student@example.org");
        page.form.set("password", "pa55");

        let credentials = page.submit().expect("form is valid");
        let response = service.validate_login(&credentials).await.unwrap();
        let token = page.apply(login_outcome(&response).unwrap());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, LOGIN_PATH);
        assert_eq!(
            requests[0].body,
            json!({"email": "student@example.org", "password": "pa55"})
        );
        assert_eq!(token.as_deref(), Some("tok-7"));
        assert_eq!(page.message.as_deref(), Some("Welcome"));
    }

    #[test]
    fn rejected_login_shows_message_and_grants_nothing() {
        let mut page = LoginForm::new();
        let token = page.apply(ApiOutcome::Rejected {
            message: Some("Invalid credentials".to_string()),
        });
        assert_eq!(token, None);
        assert_eq!(page.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn change_password_requires_all_three_fields() {
        let mut page = ChangePasswordForm::new(Some("tok".to_string()));
        page.form.set("old_password", "old");
        page.form.set("new_password", "new");

        assert_eq!(page.submit(), None);
        assert!(page.has_error("confirm_password", FieldRule::Required));
    }

    #[test]
    fn change_password_sends_mismatched_confirmation_as_is() {
        let mut page = ChangePasswordForm::new(Some("tok".to_string()));
        page.form.set("old_password", "old");
        page.form.set("new_password", "new");
        page.form.set("confirm_password", "different");

        let request = page.submit().expect("no equality rule");
        assert_eq!(request.confirm_password, "different");
        assert_eq!(request.token.as_deref(), Some("tok"));
    }

    #[test]
    fn change_password_shows_server_message_for_both_codes() {
        let mut page = ChangePasswordForm::new(None);

        page.apply(ApiOutcome::Success(MessageBody {
            message: Some("Password changed".to_string()),
        }));
        assert_eq!(page.message.as_deref(), Some("Password changed"));

        page.apply(ApiOutcome::Rejected {
            message: Some("Old password is wrong".to_string()),
        });
        assert_eq!(page.message.as_deref(), Some("Old password is wrong"));

        page.apply(ApiOutcome::Unrecognized { code: Some(500) });
        assert_eq!(page.message.as_deref(), Some("Old password is wrong"));
    }

    #[test]
    fn forget_password_success_uses_fixed_message() {
        let mut page = ForgetPasswordForm::new();
        page.apply(ApiOutcome::Success(MessageBody {
            message: Some("Reset link generated".to_string()),
        }));
        assert_eq!(page.message.as_deref(), Some(RESET_MAIL_SENT));
    }

    #[test]
    fn forget_password_rejection_keeps_previous_message() {
        let mut page = ForgetPasswordForm::new();
        page.apply(ApiOutcome::Rejected {
            message: Some("Unknown email".to_string()),
        });
        assert_eq!(page.message, None);

        page.message = Some("earlier".to_string());
        page.apply(ApiOutcome::Rejected {
            message: Some("Unknown email".to_string()),
        });
        assert_eq!(page.message.as_deref(), Some("earlier"));
    }

    #[tokio::test]
    async fn empty_reset_email_issues_no_request() {
        let transport = RecordingTransport::new();
        let service = AuthService::new(&transport);
        let mut page = ForgetPasswordForm::new();

        if let Some(request) = page.submit() {
            service.forget_password(&request).await.ok();
        }

        assert_eq!(transport.request_count(), 0);
        assert!(page.has_error("email", FieldRule::Required));
    }
}
