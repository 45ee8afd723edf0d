//! CLI module - Command-line interface for the application.
//!
//! The process does one of:
//! - print the migration version (`-version`)
//! - run migrations in one direction (`-migrate up|down`)
//! - serve HTTP, optionally migrating first (`-auto-migrate`)

pub mod args;

pub use args::{normalize_args, Action, Cli, MigrateDirection};
