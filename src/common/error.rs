// Error taxonomy shared by every service and page controller.

use reqwest::StatusCode;

use super::validation::ValidationResult;

/// Errors surfaced by the service layer.
///
/// Every variant carries a human-readable message that pages can render
/// directly as a dismissible alert. Request errors are mapped from HTTP
/// status codes, preferring the server-provided message when one exists.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client-detected validation failure, raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    Server(String),

    /// Connectivity or transport failure before a status code was received.
    #[error("{0}")]
    Network(String),

    /// The server answered but the payload was not the expected envelope.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Maps an HTTP status to the taxonomy, using the server's `message`
    /// field when present and a fixed human fallback otherwise.
    pub fn from_status(status: StatusCode, server_message: Option<String>) -> Self {
        let msg = |fallback: &str| server_message.clone().unwrap_or_else(|| fallback.to_string());

        match status.as_u16() {
            400 => ApiError::BadRequest(msg("Invalid request")),
            401 => ApiError::Unauthorized(msg("Authentication required")),
            403 => ApiError::Forbidden(msg("Access denied")),
            404 => ApiError::NotFound(msg("Not found")),
            429 => ApiError::RateLimited(msg("Too many requests - please try again later")),
            500..=599 => ApiError::Server(msg("Server error - please try again later")),
            _ => ApiError::BadRequest(msg("An error occurred")),
        }
    }

    /// True for failures that invalidate the stored session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Forbidden(_))
    }

    /// True when the request never reached the server.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            ApiError::Network("Network error - Unable to connect to server".to_string())
        } else if err.is_decode() {
            ApiError::Unexpected("Invalid response format".to_string())
        } else {
            ApiError::Network(format!("Network error - {}", err))
        }
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        ApiError::Validation(result.messages().join(", "))
    }
}
