//! hustle-turtle - A health-check service with a migration CLI
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line flags and dispatch policy
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Migration value objects
//! - **services**: The migration dispatcher
//! - **infra**: Database connection and migration backend
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run
//!
//! # Start the server after applying pending migrations
//! cargo run -- -auto-migrate
//!
//! # Run migrations
//! cargo run -- -migrate up
//!
//! # Show the current schema version
//! cargo run -- -version
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{MigrationDirection, MigrationOutcome, MigrationStatus};
pub use errors::{AppError, AppResult};
pub use services::MigrationManager;
