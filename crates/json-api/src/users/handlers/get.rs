//! Get User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use roster_app::domain::users::models::{User, UserId};

use crate::{
    errors::{ApiError, ErrorResponse},
    extensions::*,
    state::State,
    users::errors::into_api_error,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// User ID
    pub id: String,

    /// User's name
    pub name: String,

    /// User's email
    pub email: String,

    /// HTTP status of the response carrying this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl UserResponse {
    pub(crate) fn with_status(user: User, status: StatusCode) -> Self {
        Self {
            status: Some(status.as_u16()),
            ..user.into()
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.into_string(),
            name: user.name,
            email: user.email,
            status: None,
        }
    }
}

/// Get User Handler
///
/// Returns a single user by id.
#[endpoint(
    tags("users"),
    summary = "Get user by ID",
    responses(
        (status_code = StatusCode::OK, description = "User found", body = UserResponse),
        (status_code = StatusCode::NOT_FOUND, description = "User not found", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .get_user(&UserId::from(id.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(UserResponse::with_status(user, StatusCode::OK)))
}
