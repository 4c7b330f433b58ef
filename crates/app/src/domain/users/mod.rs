//! Users

pub mod errors;
pub mod ids;
pub mod models;
mod repository;
pub mod service;

pub use errors::UsersServiceError;
pub use ids::IdScheme;
pub use service::*;
