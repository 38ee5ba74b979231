//! # Storefront service
//!
//! Loads `.env`, sets up tracing, starts the actors and serves the HTTP API until Ctrl-C.

use storefront::api;
use storefront::config::StoreConfig;
use storefront::lifecycle::{StoreSystem, setup_tracing};
use tracing::{error, info};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(?config, "Starting storefront");

    let system = StoreSystem::new(config.channel_capacity);
    let app = api::router(system.state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("storefront listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {e}");
    }
    info!("Shutdown signal received");
}
