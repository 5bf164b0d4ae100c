use dotenvy::dotenv;
use film_api::logging::init_tracing;
use film_api::router::init_router;
use film_api::state::AppState;
use film_config::{CorsConfig, JwtConfig, LogConfig, ServerConfig, StoreConfig};
use film_db::Gateway;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LogConfig::from_env())?;

    let server_config = ServerConfig::from_env();
    let store_config = StoreConfig::from_env().map_err(anyhow::Error::msg)?;
    let gateway = Gateway::connect(&store_config).await?;

    let state = AppState {
        gateway,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.addr()).await?;
    info!(addr = %server_config.addr(), "🚀 Server running");
    info!("📖 Scalar UI available at http://localhost:{}/scalar", server_config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}
