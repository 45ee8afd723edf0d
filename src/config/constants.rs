//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Service
// =============================================================================

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "hustle-turtle";

/// Status reported by the health endpoint while the process is up
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the database connection URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable holding the HTTP listen port
pub const ENV_PORT: &str = "PORT";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: &str = "8080";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/hustle_turtle?sslmode=disable";

/// Connections a migration command may hold at once
pub const MIGRATION_MAX_CONNECTIONS: u32 = 1;

// =============================================================================
// Migrations
// =============================================================================

/// Direction name for forward migrations
pub const DIRECTION_UP: &str = "up";

/// Direction name for reverting migrations
pub const DIRECTION_DOWN: &str = "down";

/// Status label for a consistent schema history
pub const STATUS_CLEAN: &str = "clean";

/// Status label for an inconsistent schema history
pub const STATUS_DIRTY: &str = "dirty";
