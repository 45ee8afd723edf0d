//! Application services layer - Use cases.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! abstractions (traits) so the infrastructure can be swapped in tests.

mod migration_service;

pub use migration_service::MigrationManager;
