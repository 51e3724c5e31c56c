mod app_state;
mod config;
mod error;
mod routes;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_state::AppState;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored silently if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "led_bridge=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let addr: SocketAddr = config.addr().parse().context("Invalid bind address")?;
    let cors = config.cors_layer().context("Invalid CORS configuration")?;
    if config.cors_origins.is_empty() {
        tracing::warn!(
            "CORS allows any origin with credentials; \
             set LED_BRIDGE_CORS_ORIGINS to narrow it"
        );
    }

    // LED starts OFF and the counter at 0; nothing survives a restart.
    let state = Arc::new(AppState::new());
    let app = routes::router(state, cors);

    tracing::info!("led-bridge listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping");
}
