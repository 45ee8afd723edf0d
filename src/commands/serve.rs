//! Serve command - Starts the HTTP server.

use tokio::net::TcpListener;

use crate::api::create_router;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::MigrationManager;

/// Execute the serve command
pub async fn execute(config: &Config, auto_migrate: bool, manager: &MigrationManager) -> AppResult<()> {
    let listener = prepare(config, auto_migrate, manager).await?;
    let app = create_router();

    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Run the optional startup migration, then bind the listen socket.
///
/// A failed auto-migration never prevents the bind.
pub async fn prepare(
    config: &Config,
    auto_migrate: bool,
    manager: &MigrationManager,
) -> AppResult<TcpListener> {
    if auto_migrate {
        auto_migrate_up(manager).await;
    }

    let addr = config.server_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::bind(addr.clone(), e))
}

/// Apply pending migrations, logging instead of failing. Returns whether it worked.
pub async fn auto_migrate_up(manager: &MigrationManager) -> bool {
    tracing::info!("Running auto migrations...");
    match manager.up().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Auto migration failed: {}", e);
            false
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal, stopping server...");
}
