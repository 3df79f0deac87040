//! 路由注册模块

use axum::{http::Uri, middleware, response::Json, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::slow::handler::{self, AppState};
use crate::core::{
    error::CoreError, middleware::request_logging_middleware, response::ApiResponse,
};

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/test4",
            get(handler::get_slow_product).post(handler::post_slow_product),
        )
        .route("/health", get(health_check))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// 健康检查处理器
async fn health_check() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "status": "healthy",
            "version": "0.1.0",
        }),
        "服务运行正常",
    ))
}

/// 未注册路径的兜底处理器
async fn not_found_handler(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路径 {} 不存在", uri.path()))
}
