//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use roster_app::domain::users::models::{UserId, UserUpdate};

use crate::{
    errors::{ApiError, ErrorResponse},
    extensions::*,
    state::State,
    users::errors::into_api_error,
    users::get::UserResponse,
};

/// Update User Request
///
/// Omitted fields keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    /// User's name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// User's email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            name: request.name,
            email: request.email,
        }
    }
}

/// User Update Handler
///
/// Update a user's name and/or email by their ID.
#[endpoint(
    tags("users"),
    summary = "Update user by ID",
    request_body = UpdateUserRequest,
    responses(
        (status_code = StatusCode::OK, description = "User updated", body = UserResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request", body = ErrorResponse),
        (status_code = StatusCode::NOT_FOUND, description = "User not found", body = ErrorResponse),
    ),
)]
#[tracing::instrument(
    name = "users.update",
    skip(id, req, depot),
    fields(
        user_id = tracing::field::Empty,
        name_changed = tracing::field::Empty,
        email_changed = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, ApiError> {
    let request: UpdateUserRequest = req.json_or_400().await?;
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = UserId::from(id.into_inner());

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(&user));
    span.record("name_changed", request.name.is_some());
    span.record("email_changed", request.email.is_some());

    let updated = state
        .app
        .users
        .update_user(&user, request.into())
        .await
        .map_err(into_api_error)?;

    info!(user_id = %user, "updated user");

    Ok(Json(UserResponse::with_status(updated, StatusCode::OK)))
}
