//! 慢响应测试服务入口

use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, Level};

use slow_responder::app::slow::handler::AppState;
use slow_responder::app::slow::service::ProductService;
use slow_responder::infrastructure::logger::Logger;
use slow_responder::routes::create_router;

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    info!("启动慢响应测试服务器...");

    // 关闭信号通道，等待中的请求通过它感知中断
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let state = AppState {
        product_service: ProductService::new(),
        shutdown: shutdown_rx,
    };

    let app = create_router(state);

    // 绑定地址
    let listener = TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("无法绑定到端口 3000");

    info!("🚀 慢响应服务器运行在 http://127.0.0.1:3000");
    info!("📖 可用的路由:");
    info!("   GET  /test4  - 延迟 6 秒后返回硬编码产品");
    info!("   POST /test4  - 与 GET 相同的处理");
    info!("   GET  /health - 健康检查");

    // 启动服务器，收到关闭信号后优雅退出
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .expect("服务器启动失败");
}

/// 等待 Ctrl-C 或 SIGTERM，然后向等待中的请求广播中断信号
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("无法监听 Ctrl-C 信号");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("无法监听 SIGTERM 信号")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("收到关闭信号，通知等待中的请求");
    let _ = shutdown_tx.send(true);
}
