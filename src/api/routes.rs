//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::health_check;

/// Create the application router with all routes configured
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}
