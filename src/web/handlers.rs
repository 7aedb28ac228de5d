use crate::analysis::types::{ImageAnalysisReport, UrlAnalysisReport};
use crate::analysis::AnalysisPipeline;
use crate::config::Config;
use crate::utils::error::HubError;
use crate::web::extractors::{RequestId, ValidatedJson};
use crate::Result;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use std::time::Instant;

/// JSON方式的图像分析请求
#[derive(Debug, Deserialize)]
pub struct ImageJsonRequest {
    /// base64编码的图像数据，支持数据URL前缀
    pub image: String,
}

/// URL分析请求
#[derive(Debug, Deserialize)]
pub struct UrlAnalyzeRequest {
    /// 待分析的新闻链接
    pub url: String,
}

/// 统一API响应包装
#[derive(Debug, serde::Serialize)]
pub struct ApiResponse<T> {
    /// 请求是否成功
    pub success: bool,

    /// 业务数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// 响应时间戳
    pub timestamp: String,

    /// 请求追踪ID
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    /// 构造成功响应
    pub fn success(data: T, request_id: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            timestamp: chrono::Utc::now().to_rfc3339(),
            request_id: request_id.into(),
        }
    }
}

/// 图像分析（JSON + base64）
pub async fn analyze_image_json(
    State(config): State<Config>,
    RequestId(request_id): RequestId,
    ValidatedJson(request): ValidatedJson<ImageJsonRequest>,
) -> Result<Json<ApiResponse<ImageAnalysisReport>>> {
    let start = Instant::now();
    tracing::info!("Processing JSON image request: request_id={}", request_id);

    if config.dev_mode {
        tracing::debug!(
            "Base64 payload length: request_id={}, chars={}",
            request_id,
            request.image.len()
        );
    }

    let report = AnalysisPipeline::analyze_image_base64(&request.image)?;

    tracing::info!(
        "JSON image analysis completed: request_id={}, verdict={}, time={:.3}s",
        request_id,
        report.verdict.label,
        start.elapsed().as_secs_f32()
    );

    Ok(Json(ApiResponse::success(report, request_id)))
}

/// 图像分析（multipart文件上传）
pub async fn analyze_image_upload(
    State(config): State<Config>,
    RequestId(request_id): RequestId,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImageAnalysisReport>>> {
    let start = Instant::now();
    tracing::info!("Processing multipart image request: request_id={}", request_id);

    let mut file_bytes: Option<Bytes> = None;

    // 遍历表单字段，只取名为file的那一个
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HubError::InvalidInput(format!("Malformed multipart request: {}", err)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                if let Some(content_type) = field.content_type() {
                    if !content_type.starts_with("image/") {
                        return Err(HubError::UnsupportedFormat(content_type.to_string()));
                    }
                }

                let data = field.bytes().await.map_err(|err| {
                    HubError::InvalidInput(format!("Failed to read uploaded file: {}", err))
                })?;

                if data.is_empty() {
                    return Err(HubError::InvalidInput("Uploaded file is empty".to_string()));
                }

                file_bytes = Some(data);
            }
            other => {
                tracing::debug!(
                    "Ignoring multipart field: request_id={}, field={}",
                    request_id,
                    other
                );
            }
        }
    }

    let data =
        file_bytes.ok_or_else(|| HubError::InvalidInput("No image file provided".to_string()))?;

    if config.dev_mode {
        tracing::debug!(
            "Uploaded file size: request_id={}, bytes={}",
            request_id,
            data.len()
        );
    }

    let report = AnalysisPipeline::analyze_image_bytes(&data)?;

    tracing::info!(
        "Upload image analysis completed: request_id={}, verdict={}, time={:.3}s",
        request_id,
        report.verdict.label,
        start.elapsed().as_secs_f32()
    );

    Ok(Json(ApiResponse::success(report, request_id)))
}

/// URL分析
pub async fn analyze_url(
    State(config): State<Config>,
    RequestId(request_id): RequestId,
    ValidatedJson(request): ValidatedJson<UrlAnalyzeRequest>,
) -> Result<Json<ApiResponse<UrlAnalysisReport>>> {
    let start = Instant::now();
    let url = request.url.trim();
    tracing::info!("Processing URL request: request_id={}, url={}", request_id, url);

    if config.dev_mode {
        tracing::debug!("URL length: request_id={}, chars={}", request_id, url.len());
    }

    let report = AnalysisPipeline::analyze_url(url)?;

    tracing::info!(
        "URL analysis completed: request_id={}, overall={}, time={:.3}s",
        request_id,
        report.overall.label,
        start.elapsed().as_secs_f32()
    );

    Ok(Json(ApiResponse::success(report, request_id)))
}
