//! Users service errors.

use thiserror::Error;

use crate::domain::users::models::UserId;

#[derive(Debug, Error, PartialEq)]
pub enum UsersServiceError {
    #[error("user not found: {0}")]
    NotFound(UserId),
}
