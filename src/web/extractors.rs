use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// 验证的JSON提取器
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: for<'de> Deserialize<'de> + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| ValidationError::JsonParse(err.to_string()))?;

        value
            .validate()
            .map_err(|err| ValidationError::Validation(err.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

/// 验证trait
pub trait Validate {
    type Error: std::fmt::Display;

    fn validate(&self) -> Result<(), Self::Error>;
}

/// 验证错误类型
#[derive(Debug)]
pub enum ValidationError {
    JsonParse(String),
    Validation(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ValidationError::JsonParse(msg) => {
                (StatusCode::BAD_REQUEST, format!("JSON parse error: {}", msg))
            }
            ValidationError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, format!("Validation error: {}", msg))
            }
        };

        let body = serde_json::json!({
            "error": {
                "code": "VALIDATION_ERROR",
                "message": error_message
            }
        });

        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::JsonParse(msg) => write!(f, "JSON parse error: {}", msg),
            ValidationError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// 为图像分析请求实现验证
impl Validate for crate::web::handlers::ImageJsonRequest {
    type Error = String;

    fn validate(&self) -> Result<(), Self::Error> {
        // 验证image字段
        if self.image.trim().is_empty() {
            return Err("Image data cannot be empty".to_string());
        }

        Ok(())
    }
}

/// 为URL分析请求实现验证
impl Validate for crate::web::handlers::UrlAnalyzeRequest {
    type Error = String;

    fn validate(&self) -> Result<(), Self::Error> {
        let url = self.url.trim();

        // 验证url字段
        if url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if url.len() > 2048 {
            return Err("URL cannot exceed 2048 characters".to_string());
        }

        Ok(())
    }
}

/// 请求ID提取器
///
/// 优先使用客户端传入的 `X-Request-ID`，否则生成UUID。
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get("X-Request-ID")
            .and_then(|value| value.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(RequestId(request_id))
    }
}
