//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// HTTP status of the health probe
    pub status: u16,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(
    tags("meta"),
    summary = "Health check endpoint",
    responses((status_code = StatusCode::OK, description = "Service is healthy", body = HealthResponse)),
)]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: StatusCode::OK.as_u16(),
    })
}
