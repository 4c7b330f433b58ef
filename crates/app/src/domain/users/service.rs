//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info, warn};

use crate::domain::users::{
    errors::UsersServiceError,
    ids::IdScheme,
    models::{NewUser, User, UserId, UserUpdate},
    repository::InMemoryUsersRepository,
};

#[derive(Debug)]
pub struct InMemoryUsersService {
    ids: IdScheme,
    repository: InMemoryUsersRepository,
}

impl InMemoryUsersService {
    #[must_use]
    pub fn new(ids: IdScheme) -> Self {
        Self {
            ids,
            repository: InMemoryUsersRepository::new(),
        }
    }
}

impl Default for InMemoryUsersService {
    fn default() -> Self {
        Self::new(IdScheme::default())
    }
}

#[async_trait]
impl UsersService for InMemoryUsersService {
    async fn list_users(&self) -> Result<Vec<User>, UsersServiceError> {
        let users = self.repository.list();

        debug!(count = users.len(), "listed users");

        Ok(users)
    }

    async fn get_user(&self, user: &UserId) -> Result<User, UsersServiceError> {
        self.repository
            .get(user)
            .ok_or_else(|| UsersServiceError::NotFound(user.clone()))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        let created = user.into_user(self.ids.generate());

        if let Some(replaced) = self.repository.insert(created.clone()) {
            warn!(user_id = %replaced.id, "user id collision, previous record replaced");
        }

        info!(user_id = %created.id, size = self.repository.len(), "created user");

        Ok(created)
    }

    async fn update_user(
        &self,
        user: &UserId,
        update: UserUpdate,
    ) -> Result<User, UsersServiceError> {
        self.repository
            .update(user, update)
            .ok_or_else(|| UsersServiceError::NotFound(user.clone()))
    }

    async fn delete_user(&self, user: &UserId) -> Result<(), UsersServiceError> {
        if !self.repository.delete(user) {
            return Err(UsersServiceError::NotFound(user.clone()));
        }

        info!(user_id = %user, size = self.repository.len(), "deleted user");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users, ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: &UserId) -> Result<User, UsersServiceError>;

    /// Creates a new user under a freshly generated id.
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Applies a partial update to an existing user.
    async fn update_user(
        &self,
        user: &UserId,
        update: UserUpdate,
    ) -> Result<User, UsersServiceError>;

    /// Deletes a user.
    async fn delete_user(&self, user: &UserId) -> Result<(), UsersServiceError>;
}
