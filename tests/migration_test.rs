//! Migration dispatcher tests against stand-in backends.
//!
//! These tests use stub backends so no database is needed, except the
//! ignored round trip at the bottom.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DbErr;

use hustle_turtle::commands;
use hustle_turtle::config::Config;
use hustle_turtle::domain::{MigrationDirection, MigrationOutcome, MigrationStatus};
use hustle_turtle::errors::AppError;
use hustle_turtle::infra::{MigrationBackend, MigrationError};
use hustle_turtle::services::MigrationManager;

// =============================================================================
// Stub Backends
// =============================================================================

/// Backend that always succeeds and counts calls
#[derive(Default)]
struct CountingBackend {
    ups: AtomicUsize,
    downs: AtomicUsize,
    reads: AtomicUsize,
    status: Option<MigrationStatus>,
}

impl CountingBackend {
    fn with_status(status: MigrationStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    fn calls(&self) -> (usize, usize, usize) {
        (
            self.ups.load(Ordering::SeqCst),
            self.downs.load(Ordering::SeqCst),
            self.reads.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl MigrationBackend for CountingBackend {
    async fn apply_up(&self) -> Result<MigrationOutcome, MigrationError> {
        self.ups.fetch_add(1, Ordering::SeqCst);
        Ok(MigrationOutcome::NoChange)
    }

    async fn apply_down(&self) -> Result<MigrationOutcome, MigrationError> {
        self.downs.fetch_add(1, Ordering::SeqCst);
        Ok(MigrationOutcome::Applied(1))
    }

    async fn read_status(&self) -> Result<MigrationStatus, MigrationError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.status.ok_or(MigrationError::NoVersion)
    }
}

/// Backend whose database can never be reached
struct UnreachableBackend;

#[async_trait]
impl MigrationBackend for UnreachableBackend {
    async fn apply_up(&self) -> Result<MigrationOutcome, MigrationError> {
        Err(MigrationError::Connect(DbErr::Custom("connection refused".into())))
    }

    async fn apply_down(&self) -> Result<MigrationOutcome, MigrationError> {
        Err(MigrationError::Connect(DbErr::Custom("connection refused".into())))
    }

    async fn read_status(&self) -> Result<MigrationStatus, MigrationError> {
        Err(MigrationError::Connect(DbErr::Custom("connection refused".into())))
    }
}

fn config_on_ephemeral_port() -> Config {
    Config::from_lookup(|key| (key == "PORT").then(|| "0".to_string()))
}

// =============================================================================
// Migrate Command
// =============================================================================

#[tokio::test]
async fn test_migrate_up_calls_backend_once() {
    let backend = Arc::new(CountingBackend::default());
    let manager = MigrationManager::new(backend.clone());

    commands::migrate::execute(MigrationDirection::Up, &manager)
        .await
        .unwrap();

    assert_eq!(backend.calls(), (1, 0, 0));
}

#[tokio::test]
async fn test_migrate_down_calls_backend_once() {
    let backend = Arc::new(CountingBackend::default());
    let manager = MigrationManager::new(backend.clone());

    commands::migrate::execute(MigrationDirection::Down, &manager)
        .await
        .unwrap();

    assert_eq!(backend.calls(), (0, 1, 0));
}

#[tokio::test]
async fn test_migrate_failure_is_fatal() {
    let manager = MigrationManager::new(Arc::new(UnreachableBackend));

    let err = commands::migrate::execute(MigrationDirection::Up, &manager)
        .await
        .unwrap_err();

    match err {
        AppError::Migration { context, source } => {
            assert_eq!(context, "Migration up failed");
            assert!(source.is_setup());
        }
        other => panic!("unexpected error: {}", other),
    }
}

// =============================================================================
// Version Command
// =============================================================================

#[tokio::test]
async fn test_version_reads_without_mutating() {
    let backend = Arc::new(CountingBackend::with_status(MigrationStatus::new(3, false)));
    let manager = MigrationManager::new(backend.clone());

    commands::version::execute(&manager).await.unwrap();

    assert_eq!(backend.calls(), (0, 0, 1));
}

#[tokio::test]
async fn test_version_without_history_fails() {
    let manager = MigrationManager::new(Arc::new(CountingBackend::default()));

    let err = commands::version::execute(&manager).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Migration {
            source: MigrationError::NoVersion,
            ..
        }
    ));
}

#[test]
fn test_version_output_for_any_status() {
    for version in [0, 1, 20240101000001, u64::MAX] {
        let clean = commands::version::format_status(&MigrationStatus::new(version, false));
        let dirty = commands::version::format_status(&MigrationStatus::new(version, true));

        assert!(clean.ends_with("(status: clean)"));
        assert!(dirty.ends_with("(status: dirty)"));
        assert!(clean.contains(&version.to_string()));
    }
}

// =============================================================================
// Serve Startup
// =============================================================================

#[tokio::test]
async fn test_auto_migrate_failure_still_binds() {
    let manager = MigrationManager::new(Arc::new(UnreachableBackend));

    let listener = commands::serve::prepare(&config_on_ephemeral_port(), true, &manager)
        .await
        .unwrap();

    assert_ne!(listener.local_addr().unwrap().port(), 0);
}

#[tokio::test]
async fn test_auto_migrate_reports_failure() {
    let manager = MigrationManager::new(Arc::new(UnreachableBackend));
    assert!(!commands::serve::auto_migrate_up(&manager).await);
}

#[tokio::test]
async fn test_serve_without_auto_migrate_skips_backend() {
    let backend = Arc::new(CountingBackend::default());
    let manager = MigrationManager::new(backend.clone());

    commands::serve::prepare(&config_on_ephemeral_port(), false, &manager)
        .await
        .unwrap();

    assert_eq!(backend.calls(), (0, 0, 0));
}

#[tokio::test]
async fn test_serve_with_auto_migrate_runs_up_once() {
    let backend = Arc::new(CountingBackend::default());
    let manager = MigrationManager::new(backend.clone());

    commands::serve::prepare(&config_on_ephemeral_port(), true, &manager)
        .await
        .unwrap();

    assert_eq!(backend.calls(), (1, 0, 0));
}

#[tokio::test]
async fn test_bind_failure_is_fatal() {
    let manager = MigrationManager::new(Arc::new(CountingBackend::default()));
    let config = Config::from_lookup(|key| (key == "PORT").then(|| "not-a-port".to_string()));

    let err = commands::serve::prepare(&config, false, &manager)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Bind { .. }));
}

// =============================================================================
// Integration Tests (Require Infrastructure)
// =============================================================================
//
// Run against a scratch database:
//   DATABASE_URL=postgres://localhost/hustle_turtle_test cargo test -- --ignored

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_sea_orm_round_trip() {
    use hustle_turtle::infra::SeaOrmBackend;

    let config = Config::from_env();
    let manager = MigrationManager::new(Arc::new(SeaOrmBackend::new(&config)));

    manager.down().await.unwrap();
    assert!(matches!(
        manager.version().await.unwrap_err(),
        MigrationError::NoVersion
    ));

    assert!(matches!(
        manager.up().await.unwrap(),
        MigrationOutcome::Applied(_)
    ));
    assert_eq!(manager.up().await.unwrap(), MigrationOutcome::NoChange);

    let status = manager.version().await.unwrap();
    assert!(!status.dirty);
    assert!(status.version > 0);

    manager.down().await.unwrap();
}
