//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// 请求日志中间件
///
/// 本服务的响应耗时是刻意制造的，日志里的耗时用于核对延迟是否生效。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} - {} - 耗时 {}ms",
        method,
        uri,
        response.status(),
        start.elapsed().as_millis()
    );

    response
}
