//! Migration service - Turns operator intent into backend calls.
//!
//! Holds no state beyond the backend handle; every call is one round
//! trip through [`MigrationBackend`].

use std::sync::Arc;

use crate::domain::{MigrationDirection, MigrationOutcome, MigrationStatus};
use crate::infra::{MigrationBackend, MigrationError};

/// Dispatches migration commands to a backend and logs their outcome.
#[derive(Clone)]
pub struct MigrationManager {
    backend: Arc<dyn MigrationBackend>,
}

impl MigrationManager {
    /// Create new manager over the given backend
    pub fn new(backend: Arc<dyn MigrationBackend>) -> Self {
        Self { backend }
    }

    /// Apply all pending migrations. Nothing pending is still a success.
    pub async fn up(&self) -> Result<MigrationOutcome, MigrationError> {
        let outcome = self.backend.apply_up().await?;
        log_outcome(MigrationDirection::Up, outcome);
        tracing::info!("Up migrations completed successfully");
        Ok(outcome)
    }

    /// Revert applied migrations. Nothing applied is still a success.
    pub async fn down(&self) -> Result<MigrationOutcome, MigrationError> {
        let outcome = self.backend.apply_down().await?;
        log_outcome(MigrationDirection::Down, outcome);
        tracing::info!("Down migrations completed successfully");
        Ok(outcome)
    }

    /// Run migrations in the given direction
    pub async fn run(&self, direction: MigrationDirection) -> Result<MigrationOutcome, MigrationError> {
        match direction {
            MigrationDirection::Up => self.up().await,
            MigrationDirection::Down => self.down().await,
        }
    }

    /// Current schema version and dirty flag
    pub async fn version(&self) -> Result<MigrationStatus, MigrationError> {
        let status = self.backend.read_status().await?;
        if status.dirty {
            tracing::warn!(version = status.version, "Schema history is dirty");
        }
        Ok(status)
    }
}

fn log_outcome(direction: MigrationDirection, outcome: MigrationOutcome) {
    match outcome {
        MigrationOutcome::Applied(count) => {
            tracing::info!(%direction, count, "Applied migrations");
        }
        MigrationOutcome::NoChange => {
            tracing::info!(%direction, "No change");
        }
    }
}
