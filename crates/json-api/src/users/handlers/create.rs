//! Create User Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use roster_app::domain::users::models::NewUser;

use crate::{
    errors::{ApiError, ErrorResponse},
    extensions::*,
    state::State,
    users::errors::into_api_error,
    users::get::UserResponse,
};

/// Create User Request
///
/// Omitted fields are stored as empty strings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    /// User's name
    #[serde(default)]
    pub name: String,

    /// User's email
    #[serde(default)]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
        }
    }
}

/// Create User Handler
///
/// Create a new user with name and email. The id is assigned by the server.
#[endpoint(
    tags("users"),
    summary = "Create a new user",
    request_body = CreateUserRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Created user", body = UserResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request", body = ErrorResponse),
    ),
)]
#[tracing::instrument(
    name = "users.create",
    skip(req, depot, res),
    fields(user_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, ApiError> {
    let request: CreateUserRequest = req.json_or_400().await?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .create_user(request.into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("user_id", tracing::field::display(&user.id));

    res.add_header(LOCATION, format!("/v1/users/{}", user.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(UserResponse::with_status(user, StatusCode::CREATED)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use roster_app::domain::users::{MockUsersService, models::User};

    use crate::test_helpers::{make_user, users_service};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("v1/users").post(handler))
    }

    fn stored(new: NewUser) -> User {
        User {
            id: "u1".into(),
            name: new.name,
            email: new.email,
        }
    }

    fn ada() -> NewUser {
        NewUser {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .withf(|new| *new == ada())
            .return_once(|_| Ok(make_user("20260102150405")));

        users.expect_get_user().never();
        users.expect_list_users().never();
        users.expect_update_user().never();
        users.expect_delete_user().never();

        let mut res = TestClient::post("http://example.com/v1/users")
            .json(&json!({ "name": "Ada", "email": "ada@x.com" }))
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/v1/users/20260102150405"));
        assert_eq!(body.id, "20260102150405");
        assert_eq!(body.name, "Ada");
        assert_eq!(body.email, "ada@x.com");
        assert_eq!(body.status, Some(201));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_accepts_empty_strings() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .withf(|new| new.name.is_empty() && new.email.is_empty())
            .return_once(|new| Ok(stored(new)));

        let res = TestClient::post("http://example.com/v1/users")
            .json(&json!({ "name": "", "email": "" }))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_malformed_json_returns_400() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_create_user().never();

        let res = TestClient::post("http://example.com/v1/users")
            .raw_json(r#"{"name": "Ada", "email": "#)
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_missing_field_defaults_to_empty() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .withf(|new| new.name == "Ada" && new.email.is_empty())
            .return_once(|new| Ok(stored(new)));

        let mut res = TestClient::post("http://example.com/v1/users")
            .json(&json!({ "name": "Ada" }))
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.name, "Ada");
        assert_eq!(body.email, "");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_ignores_content_type() -> TestResult {
        for content_type in [Some("text/plain;charset=UTF-8"), None] {
            let mut users = MockUsersService::new();

            users
                .expect_create_user()
                .once()
                .withf(|new| *new == ada())
                .return_once(|new| Ok(stored(new)));

            let mut request = TestClient::post("http://example.com/v1/users")
                .body(r#"{"name":"Ada","email":"ada@x.com"}"#);

            if let Some(content_type) = content_type {
                request = request.add_header("content-type", content_type, true);
            }

            let res = request.send(&make_service(users)).await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::CREATED),
                "content type {content_type:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_empty_body_returns_400() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_create_user().never();

        let mut res = TestClient::post("http://example.com/v1/users")
            .body("")
            .send(&make_service(users))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid request");

        Ok(())
    }
}
