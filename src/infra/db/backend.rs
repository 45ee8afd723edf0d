//! Migration backend abstraction and its SeaORM implementation.
//!
//! The dispatcher only ever talks to [`MigrationBackend`]; the SeaORM
//! backend opens one connection per call and closes it before returning.

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use super::migrations::migration_names;
use super::Database;
use crate::config::Config;
use crate::domain::{MigrationDirection, MigrationOutcome, MigrationStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Errors reported by a migration backend.
///
/// `Connect` is a setup error; every other variant is an operation error.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("migration setup failed: could not connect to database: {0}")]
    Connect(#[source] DbErr),

    #[error("could not run {direction} migrations: {source}")]
    Apply {
        direction: MigrationDirection,
        #[source]
        source: DbErr,
    },

    #[error("could not get migration version: {0}")]
    Status(#[source] DbErr),

    #[error("could not get migration version: no migration")]
    NoVersion,
}

impl MigrationError {
    /// True when the backend could not even be reached
    pub fn is_setup(&self) -> bool {
        matches!(self, MigrationError::Connect(_))
    }
}

/// Narrow interface over the migration library.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MigrationBackend: Send + Sync {
    /// Apply every pending forward migration
    async fn apply_up(&self) -> Result<MigrationOutcome, MigrationError>;

    /// Revert every applied migration
    async fn apply_down(&self) -> Result<MigrationOutcome, MigrationError>;

    /// Read the current version and dirty flag without changing anything
    async fn read_status(&self) -> Result<MigrationStatus, MigrationError>;
}

/// SeaORM-backed migration runner over the compiled-in [`super::Migrator`].
pub struct SeaOrmBackend {
    database_url: String,
}

impl SeaOrmBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            database_url: config.database_url.clone(),
        }
    }

    async fn open(&self) -> Result<Database, MigrationError> {
        tracing::debug!("Opening migration connection");
        Database::connect(&self.database_url)
            .await
            .map_err(MigrationError::Connect)
    }

    async fn release(db: Database) {
        if let Err(e) = db.close().await {
            tracing::warn!("Failed to close migration connection: {}", e);
        }
        tracing::debug!("Migration connection released");
    }
}

#[async_trait]
impl MigrationBackend for SeaOrmBackend {
    async fn apply_up(&self) -> Result<MigrationOutcome, MigrationError> {
        let db = self.open().await?;
        let result = db
            .run_migrations()
            .await
            .map(MigrationOutcome::from_count)
            .map_err(|source| MigrationError::Apply {
                direction: MigrationDirection::Up,
                source,
            });
        Self::release(db).await;
        result
    }

    async fn apply_down(&self) -> Result<MigrationOutcome, MigrationError> {
        let db = self.open().await?;
        let result = db
            .rollback_migrations()
            .await
            .map(MigrationOutcome::from_count)
            .map_err(|source| MigrationError::Apply {
                direction: MigrationDirection::Down,
                source,
            });
        Self::release(db).await;
        result
    }

    async fn read_status(&self) -> Result<MigrationStatus, MigrationError> {
        let db = self.open().await?;
        let result = db.applied_migrations().await.map_err(MigrationError::Status);
        Self::release(db).await;

        let applied = result?;
        MigrationStatus::from_history(&migration_names(), &applied).ok_or(MigrationError::NoVersion)
    }
}
