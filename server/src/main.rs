use yoyaku_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file before reading any configuration
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Yoyaku reservation server starting (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
