//! Centralized error handling.
//!
//! Provides the command-level error type. Anything that reaches `main`
//! as an [`AppError`] is fatal to the process.

use thiserror::Error;

use crate::infra::MigrationError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{context}: {source}")]
    Migration {
        context: String,
        #[source]
        source: MigrationError,
    },

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn migration(context: impl Into<String>, source: MigrationError) -> Self {
        AppError::Migration {
            context: context.into(),
            source,
        }
    }

    pub fn bind(addr: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Bind {
            addr: addr.into(),
            source,
        }
    }
}
