//! Version command - Prints the current schema version, then exits.

use crate::domain::MigrationStatus;
use crate::errors::{AppError, AppResult};
use crate::services::MigrationManager;

/// Execute the version command
pub async fn execute(manager: &MigrationManager) -> AppResult<()> {
    tracing::debug!("Checking migration version...");

    let status = manager
        .version()
        .await
        .map_err(|e| AppError::migration("Version check failed", e))?;

    println!("{}", format_status(&status));
    Ok(())
}

/// Operator-facing status line
pub fn format_status(status: &MigrationStatus) -> String {
    format!(
        "Current migration version: {} (status: {})",
        status.version,
        status.label()
    )
}
