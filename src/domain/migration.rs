//! Migration value objects shared by the CLI, the dispatcher and the backends.

use crate::config::{DIRECTION_DOWN, DIRECTION_UP, STATUS_CLEAN, STATUS_DIRTY};

/// Direction of a migration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationDirection {
    Up,
    Down,
}

impl std::fmt::Display for MigrationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MigrationDirection::Up => write!(f, "{}", DIRECTION_UP),
            MigrationDirection::Down => write!(f, "{}", DIRECTION_DOWN),
        }
    }
}

/// Result of a directional migration run.
///
/// `NoChange` means there was nothing to do. It is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    Applied(usize),
    NoChange,
}

impl MigrationOutcome {
    /// Outcome for a run that touched `count` migrations
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            MigrationOutcome::NoChange
        } else {
            MigrationOutcome::Applied(count)
        }
    }
}

/// Current schema version as recorded by the migration library.
///
/// `dirty` is only ever reported, never cleared, by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: u64,
    pub dirty: bool,
}

impl MigrationStatus {
    pub fn new(version: u64, dirty: bool) -> Self {
        Self { version, dirty }
    }

    /// Human readable state: `clean` or `dirty`
    pub fn label(&self) -> &'static str {
        if self.dirty {
            STATUS_DIRTY
        } else {
            STATUS_CLEAN
        }
    }

    /// Derive the status from the compiled migration list and the recorded history.
    ///
    /// Returns `None` when nothing has been applied yet. The history is dirty
    /// unless it is exactly a prefix of `defined`, in order.
    pub fn from_history<D, A>(defined: &[D], applied: &[A]) -> Option<Self>
    where
        D: AsRef<str>,
        A: AsRef<str>,
    {
        if applied.is_empty() {
            return None;
        }

        let version = applied
            .iter()
            .filter_map(|name| migration_version(name.as_ref()))
            .max()
            .unwrap_or(0);

        let consistent = applied.len() <= defined.len()
            && applied
                .iter()
                .zip(defined)
                .all(|(a, d)| a.as_ref() == d.as_ref());

        Some(Self::new(version, !consistent))
    }
}

/// Numeric version of a migration named `mYYYYMMDD_HHMMSS_description`.
///
/// `m20240101_000001_create_app_settings` has version `20240101000001`.
pub fn migration_version(name: &str) -> Option<u64> {
    let mut parts = name.strip_prefix('m')?.splitn(3, '_');
    let date = parts.next()?;
    let seq = parts.next()?;

    if date.len() != 8 || seq.len() != 6 {
        return None;
    }
    if !date.chars().chain(seq.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    format!("{}{}", date, seq).parse().ok()
}
