use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0} bytes, max allowed: {1} bytes")]
    FileTooLarge(usize, usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl HubError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HubError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HubError::FileTooLarge(_, _) => StatusCode::PAYLOAD_TOO_LARGE,
            HubError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            HubError::Base64(_) => StatusCode::BAD_REQUEST,
            HubError::Json(_) => StatusCode::BAD_REQUEST,
            HubError::ImageDecode(_) => StatusCode::BAD_REQUEST,
            HubError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            HubError::InvalidInput(_) => "INVALID_INPUT",
            HubError::FileTooLarge(_, _) => "FILE_TOO_LARGE",
            HubError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            HubError::Config(_) => "CONFIG_ERROR",
            HubError::Io(_) => "IO_ERROR",
            HubError::Json(_) => "JSON_ERROR",
            HubError::Base64(_) => "BASE64_DECODE_ERROR",
            HubError::ImageDecode(_) => "IMAGE_DECODE_ERROR",
            HubError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        });

        tracing::error!("Request failed: {} ({})", self, status);

        (status, axum::Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(
            HubError::InvalidInput("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HubError::FileTooLarge(100, 50).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            HubError::UnsupportedFormat("Bmp".to_string()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        assert_eq!(
            HubError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            HubError::Config("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            HubError::InvalidInput("x".to_string()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            HubError::FileTooLarge(0, 0).error_code(),
            "FILE_TOO_LARGE"
        );
        assert_eq!(
            HubError::UnsupportedFormat("text/plain".to_string()).error_code(),
            "UNSUPPORTED_FORMAT"
        );
        assert_eq!(
            HubError::Internal("x".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }
}
