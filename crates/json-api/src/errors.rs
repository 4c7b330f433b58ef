//! API Errors
//!
//! Every error the API produces is rendered as a JSON [`ErrorResponse`], both
//! the ones handlers return and the ones salvo raises itself (body extraction
//! failures, unknown routes, timeouts), which reach the [`catcher`].

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human readable error message
    pub error: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Errors returned by handlers.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum ApiError {
    #[error("Invalid request")]
    InvalidRequest,

    #[error("User not found")]
    UserNotFound,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse::new(self.to_string())));
    }
}

// Error responses are declared per endpoint through `responses(...)`.
impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, _operation: &mut Operation) {}
}

/// Message used for errors salvo raises before a handler runs.
fn message_for(status: StatusCode) -> String {
    if status == StatusCode::BAD_REQUEST {
        return ApiError::InvalidRequest.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[handler]
async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);
    let unrendered = res.body.is_none() || res.body.is_error();

    if unrendered && (status.is_client_error() || status.is_server_error()) {
        res.body = ResBody::None;
        res.render(Json(ErrorResponse::new(message_for(status))));

        ctrl.skip_rest();
    }
}

/// Catcher rendering salvo's own error responses as [`ErrorResponse`] JSON.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn missing() -> Result<&'static str, ApiError> {
        Err(ApiError::UserNotFound)
    }

    #[test]
    fn bad_request_uses_invalid_request_message() {
        assert_eq!(message_for(StatusCode::BAD_REQUEST), "Invalid request");
        assert_eq!(message_for(StatusCode::NOT_FOUND), "Not Found");
    }

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(ApiError::InvalidRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_api_error_renders_json_body() -> TestResult {
        let service = Service::new(Router::with_path("missing").get(missing)).catcher(catcher());

        let mut res = TestClient::get("http://example.com/missing")
            .send(&service)
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "User not found");

        Ok(())
    }
}
