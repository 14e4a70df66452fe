use thiserror::Error;

/// Failures raised below the view layer. Application-level rejections
/// (`code: 400` bodies) are not errors; they travel as `ApiOutcome::Rejected`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_includes_status_and_message() {
        let err = AppError::Http {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (502): Bad gateway");
    }

    #[test]
    fn json_errors_map_to_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }

    #[test]
    fn storage_error_message() {
        let err = AppError::Storage("localStorage unavailable".to_string());
        assert!(err.to_string().contains("localStorage unavailable"));
    }
}
