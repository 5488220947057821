use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// JSON body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_internal_errors() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken"));
        assert!(matches!(err, AppError::InternalError(_)));
        assert!(err.to_string().contains("taken"));
    }

    #[test]
    fn config_errors_keep_their_message() {
        let err = AppError::from(config::ConfigError::Message("bad port".into()));
        assert!(matches!(err, AppError::ConfigError(_)));
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn error_body_is_a_single_message() {
        let body = serde_json::to_value(ErrorResponse::new("Niche is required")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Niche is required" }));
    }
}
