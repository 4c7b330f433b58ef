//! User Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::ApiError, extensions::*, state::State, users::errors::into_api_error,
    users::get::UserResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersListResponse {
    /// The list of users
    pub users: Vec<UserResponse>,

    /// HTTP status of this response
    pub status: u16,
}

/// User Index Handler
///
/// Returns every stored user, ordered by id.
#[endpoint(
    tags("users"),
    summary = "List all users",
    responses(
        (status_code = StatusCode::OK, description = "A list of users", body = UsersListResponse),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UsersListResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .map_err(into_api_error)?;

    info!(count = users.len(), "listing users");

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
        status: StatusCode::OK.as_u16(),
    }))
}
