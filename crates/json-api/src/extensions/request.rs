//! Request helper extensions.

use salvo::prelude::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

/// Body parsing that ignores the declared content type.
pub(crate) trait RequestExt {
    /// Parse the raw body as JSON, mapping any failure to a 400.
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, ApiError>;
}

impl RequestExt for Request {
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, ApiError> {
        let payload = self.payload().await.map_err(|error| {
            debug!("failed to read request body: {error}");

            ApiError::InvalidRequest
        })?;

        serde_json::from_slice(payload).map_err(|error| {
            debug!("failed to parse request body: {error}");

            ApiError::InvalidRequest
        })
    }
}
