//! Migrate command - Runs migrations in one direction, then exits.

use crate::domain::MigrationDirection;
use crate::errors::{AppError, AppResult};
use crate::services::MigrationManager;

/// Execute the migrate command
pub async fn execute(direction: MigrationDirection, manager: &MigrationManager) -> AppResult<()> {
    tracing::info!("Running {} migrations...", direction);

    manager
        .run(direction)
        .await
        .map_err(|e| AppError::migration(format!("Migration {} failed", direction), e))?;

    Ok(())
}
