//! Day Tracker API server

use daytrack::{router, store::TrackerStore, AppConfig, TrackerServices};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    config.validate().map_err(|e| format!("Invalid configuration: {}", e))?;

    let store = Arc::new(TrackerStore::new());
    let services = Arc::new(TrackerServices::new(store));
    let app = router(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Day Tracker API listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
