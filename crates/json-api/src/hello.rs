//! Hello Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Greeting response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HelloResponse {
    /// Greeting message
    pub message: String,
}

/// Hello handler
///
/// Returns a static greeting.
#[endpoint(
    tags("meta"),
    summary = "Greeting",
    responses((status_code = StatusCode::OK, description = "Greeting", body = HelloResponse)),
)]
pub(crate) async fn handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello, world!".to_string(),
    })
}
