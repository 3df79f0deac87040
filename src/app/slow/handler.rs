//! 慢响应处理器

use axum::{extract::State, response::Json};
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{info, warn};

use super::model::Product;
use super::service::{ProductService, RESPONSE_DELAY};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    /// 关闭信号接收端，等待期间收到信号则提前返回
    pub shutdown: watch::Receiver<bool>,
}

/// GET /test4: 固定等待后返回硬编码产品
///
/// 等待被关闭信号中断时只记录日志，响应照常发送，不会把中断
/// 当作请求失败上报。
pub async fn get_slow_product(
    State(state): State<AppState>,
) -> Result<Json<Product>, CoreError> {
    info!("Processing slow request...");

    let mut shutdown = state.shutdown.clone();

    tokio::select! {
        _ = sleep(RESPONSE_DELAY) => {}
        _ = shutdown.changed() => {
            warn!("慢响应等待被中断，立即发送响应");
        }
    }

    let product = state.product_service.slow_product()?;
    Ok(Json(product))
}

/// POST /test4: 与 GET 完全相同的处理
pub async fn post_slow_product(
    state: State<AppState>,
) -> Result<Json<Product>, CoreError> {
    get_slow_product(state).await
}
