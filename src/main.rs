use std::sync::Arc;

use pulse_admin::api::{create_routes, AppState};
use pulse_admin::config::{AppConfig, DatabaseConfig};
use pulse_admin::services::{Accessors, PgBackend};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        "Starting pulse-admin gateway v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    info!("Database pool ready ({} max connections)", db_config.max_connections);

    let accessors = Accessors::new(Arc::new(PgBackend::new(pool.clone())), config.read_policy);
    info!("Read failure policy: {:?}", accessors.policy());

    let app = create_routes(AppState::new(accessors));

    let addr = config.server_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway listening on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Database pool closed, bye");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
