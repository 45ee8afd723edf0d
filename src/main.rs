//! hustle-turtle - Application entry point
//!
//! Flag-driven entry point: migration commands exit when done, otherwise
//! the HTTP server runs until interrupted.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hustle_turtle::{
    cli::{normalize_args, Action, Cli},
    commands,
    config::Config,
    infra::SeaOrmBackend,
    services::MigrationManager,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments (exits with a usage error on bad values)
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let manager = MigrationManager::new(Arc::new(SeaOrmBackend::new(&config)));

    // Execute command
    let result = match cli.action() {
        Action::ShowVersion => commands::version::execute(&manager).await,
        Action::Migrate(direction) => commands::migrate::execute(direction, &manager).await,
        Action::Serve { auto_migrate } => {
            commands::serve::execute(&config, auto_migrate, &manager).await
        }
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
