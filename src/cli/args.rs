//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Flags are also
//! accepted in the single-dash long form (`-migrate up`) after
//! [`normalize_args`] has rewritten them.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};

use crate::domain::MigrationDirection;

/// Long flag names that may be spelled with a single dash
const LONG_FLAGS: &[&str] = &["migrate", "version", "auto-migrate", "verbose", "help"];

/// hustle-turtle - health service with database migration commands
#[derive(Parser, Debug)]
#[command(name = "hustle-turtle")]
#[command(long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Run database migrations then exit
    #[arg(long, value_enum, value_name = "DIRECTION")]
    pub migrate: Option<MigrateDirection>,

    /// Show current migration version then exit
    #[arg(long)]
    pub version: bool,

    /// Run up migrations on startup
    #[arg(long)]
    pub auto_migrate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Accepted values for `-migrate`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MigrateDirection {
    /// Apply all pending migrations
    Up,
    /// Revert applied migrations
    Down,
}

impl From<MigrateDirection> for MigrationDirection {
    fn from(direction: MigrateDirection) -> Self {
        match direction {
            MigrateDirection::Up => MigrationDirection::Up,
            MigrateDirection::Down => MigrationDirection::Down,
        }
    }
}

/// What a single process invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the migration version and exit
    ShowVersion,
    /// Run migrations in one direction and exit
    Migrate(MigrationDirection),
    /// Serve HTTP, optionally migrating up first
    Serve { auto_migrate: bool },
}

impl Cli {
    /// Resolve the flags into one action.
    ///
    /// `-version` wins over `-migrate`, which wins over `-auto-migrate`.
    pub fn action(&self) -> Action {
        if self.version {
            Action::ShowVersion
        } else if let Some(direction) = self.migrate {
            Action::Migrate(direction.into())
        } else {
            Action::Serve {
                auto_migrate: self.auto_migrate,
            }
        }
    }
}

/// Rewrite `-migrate`, `-version`, ... into their `--` form.
///
/// Short flags, values and everything after a `--` terminator are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || terminated {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    terminated = true;
                    None
                }
                Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{}", s))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}
