//! User Errors

use tracing::debug;

use roster_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::NotFound(user) => {
            debug!(user_id = %user, "user not found");

            ApiError::UserNotFound
        }
    }
}
