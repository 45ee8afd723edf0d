//! Health check handler.

use axum::{http::StatusCode, response::Json};
use serde::Serialize;

use crate::config::{HEALTH_STATUS_HEALTHY, SERVICE_NAME};

/// Health check response.
///
/// Field order is the serialized order.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Liveness endpoint. Does no dependent work, so it always answers 200.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: HEALTH_STATUS_HEALTHY,
            service: SERVICE_NAME,
        }),
    )
}
