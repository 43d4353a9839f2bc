use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use car_inventory::config::environment::EnvironmentConfig;
use car_inventory::create_app;
use car_inventory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    info!("🚗 Car Inventory API ({})", config.environment);

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::from_config(config);
    {
        let inventory = state.store.read().await;
        if inventory.is_empty() {
            info!("📦 Starting with an empty inventory");
        } else {
            info!("📦 {} cars loaded", inventory.len());
        }
    }

    let app = create_app(state);

    info!("🌐 Server listening on http://{}", addr);
    info!("   GET    /api/cars      - List cars");
    info!("   GET    /api/cars/:id  - Get car");
    info!("   POST   /api/cars      - Create car");
    info!("   PATCH  /api/cars/:id  - Update car");
    info!("   DELETE /api/cars/:id  - Delete car");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            e
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 SIGTERM received, shutting down...");
        },
    }
}
