//! 慢响应业务服务

use std::time::Duration;

use super::model::Product;
use crate::core::error::CoreError;

/// 响应前的固定等待时长
pub const RESPONSE_DELAY: Duration = Duration::from_millis(6000);

#[derive(Clone)]
pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        Self
    }

    /// 返回硬编码的产品数据
    pub fn slow_product(&self) -> Result<Product, CoreError> {
        Ok(Product {
            id: 18,
            name: "Dog Products".to_string(),
            description: "Products for Dogs.".to_string(),
        })
    }
}
