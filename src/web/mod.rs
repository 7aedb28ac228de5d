//! Web服务模块

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod ui;

use crate::analyzers::registry::{self, AnalyzerRegistry};
use crate::config::Config;
use crate::utils::error::HubError;
use crate::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

/// 启动Web服务
pub async fn serve(config: Config) -> Result<()> {
    // 初始化分析器注册表
    AnalyzerRegistry::init(config.clone())?;

    // 解析绑定地址
    let addr: SocketAddr = config.bind_addr.parse().map_err(|err| {
        HubError::Config(format!(
            "Invalid bind address {}: {}",
            config.bind_addr, err
        ))
    })?;

    // 构建应用路由
    let app = create_app(config);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /                     - Web UI");
    tracing::info!("  POST /analyze/image        - JSON base64 upload");
    tracing::info!("  POST /analyze/image/upload - Multipart file upload");
    tracing::info!("  POST /analyze/url          - News URL analysis");
    tracing::info!("  GET  /health               - Health check");
    tracing::info!("  GET  /api/info             - Service information");

    // 启动服务器
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|err| HubError::Internal(format!("Failed to bind to address {}: {}", addr, err)))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| HubError::Internal(format!("Server failed to start: {}", err)))?;

    Ok(())
}

/// 组装路由与中间件
fn create_app(config: Config) -> Router {
    let request_timeout = config.server_config.request_timeout;
    let max_request_size = config.server_config.max_request_size;

    Router::new()
        // Web UI路由
        .route("/", get(ui::index_handler))
        // 分析API路由
        .route("/analyze/image", post(handlers::analyze_image_json))
        .route(
            "/analyze/image/upload",
            post(handlers::analyze_image_upload),
        )
        .route("/analyze/url", post(handlers::analyze_url))
        // 系统路由
        .route("/health", get(health_handler))
        .route("/api/info", get(info_handler))
        // 中间件，multipart上传与tower-http限流共用同一个上限
        .layer(DefaultBodyLimit::max(max_request_size))
        .layer(RequestBodyLimitLayer::new(max_request_size))
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout)))
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::security_headers))
        .layer(from_fn(middleware::request_logging))
        .with_state(config)
}

/// 健康检查
async fn health_handler() -> impl IntoResponse {
    let healthy = registry::health_check();
    let status = if healthy { "healthy" } else { "unhealthy" };
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(json!({
            "status": status,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// 服务信息
async fn info_handler() -> Result<Json<serde_json::Value>> {
    let stats = registry::get_analyzer_stats()?;

    Ok(Json(json!({
        "service": "Media Credibility Hub",
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "analyzers": stats,
        "features": {
            "dual_upload_modes": true,
            "url_analysis": true,
            "simulated_analysis": true,
            "persistent_storage": false,
        },
    })))
}
