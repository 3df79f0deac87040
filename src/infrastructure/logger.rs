//! 日志基础设施

use tracing::Level;

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅器
    pub fn init(level: Level) {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }
}
