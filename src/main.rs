//! Server entrypoint: load configuration, wire the provider, serve.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use startup_panorama::adapters::ai::{GeminiConfig, GeminiProvider};
use startup_panorama::adapters::http::{build_router, AppState};
use startup_panorama::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let provider = Arc::new(GeminiProvider::new(GeminiConfig::from(&config.ai)));
    let state = AppState::new(provider);
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, model = %config.ai.model, "startup-panorama listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
