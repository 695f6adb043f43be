use admin_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载环境 (.env 可选)
    let _ = dotenv::dotenv();

    // 2. 初始化日志
    init_logger();

    tracing::info!("Restaurant admin server starting...");

    // 3. 加载配置
    let config = Config::from_env();

    // 4. 初始化服务器状态 (数据库)
    let state = ServerState::initialize(&config).await?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
