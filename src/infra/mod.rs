//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections
//! - The migration backend and its compiled-in migrations

pub mod db;

pub use db::{Database, MigrationBackend, MigrationError, Migrator, SeaOrmBackend};

#[cfg(any(test, feature = "test-utils"))]
pub use db::MockMigrationBackend;
