//! Database connection and migration plumbing.

use sea_orm::{
    ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use crate::config::MIGRATION_MAX_CONNECTIONS;

pub mod backend;
pub mod migrations;

pub use backend::{MigrationBackend, MigrationError, SeaOrmBackend};
pub use migrations::Migrator;

#[cfg(any(test, feature = "test-utils"))]
pub use backend::MockMigrationBackend;

/// Single-connection database handle used for migration commands.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection without running any migrations.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(database_url.to_owned());
        options
            .max_connections(MIGRATION_MAX_CONNECTIONS)
            .min_connections(0)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Close the underlying connection.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }

    /// Run pending migrations, returning how many were pending.
    pub async fn run_migrations(&self) -> Result<usize, DbErr> {
        let pending = Migrator::get_pending_migrations(&self.connection).await?.len();
        Migrator::up(&self.connection, None).await?;
        Ok(pending)
    }

    /// Roll back every applied migration, returning how many were applied.
    pub async fn rollback_migrations(&self) -> Result<usize, DbErr> {
        let applied = Migrator::get_applied_migrations(&self.connection).await?.len();
        Migrator::down(&self.connection, None).await?;
        Ok(applied)
    }

    /// Names of recorded migrations in the order they were applied.
    ///
    /// Reads the bookkeeping table directly so nothing gets installed.
    pub async fn applied_migrations(&self) -> Result<Vec<String>, DbErr> {
        let applied = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::AppliedAt)
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(applied)
    }
}
