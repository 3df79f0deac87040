//! # 慢响应测试服务
//!
//! 模拟一个响应缓慢的上游依赖，用于验证调用方的超时处理，包括：
//! - `/test4` 端点：固定等待 6 秒后返回硬编码的产品数据
//! - 健康检查端点
//! - 请求日志中间件和统一的错误响应

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod routes;
