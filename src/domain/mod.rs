//! Domain layer - Core value objects
//!
//! Types describing migration state, independent of the database library
//! that records it.

pub mod migration;

pub use migration::{migration_version, MigrationDirection, MigrationOutcome, MigrationStatus};
