//! 慢响应数据模型

use serde::{Deserialize, Serialize};

/// 固定返回的产品记录
///
/// 字段声明顺序即序列化顺序，调用方按字节比对响应体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
}
