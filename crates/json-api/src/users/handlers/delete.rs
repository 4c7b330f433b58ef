//! Delete User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use roster_app::domain::users::{UsersServiceError, models::UserId};

use crate::{errors::ApiError, extensions::*, state::State};

/// Delete User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeleteUserResponse {
    /// Whether a user was removed
    pub deleted: bool,
}

/// Delete User Handler
///
/// Delete a user by their ID.
#[endpoint(
    tags("users"),
    summary = "Delete user by ID",
    responses(
        (status_code = StatusCode::OK, description = "User deleted", body = DeleteUserResponse),
        (status_code = StatusCode::NOT_FOUND, description = "User not found", body = DeleteUserResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = UserId::from(id.into_inner());

    match state.app.users.delete_user(&user).await {
        Ok(()) => Ok(Json(DeleteUserResponse { deleted: true })),
        Err(UsersServiceError::NotFound(_)) => {
            res.status_code(StatusCode::NOT_FOUND);

            Ok(Json(DeleteUserResponse { deleted: false }))
        }
    }
}
