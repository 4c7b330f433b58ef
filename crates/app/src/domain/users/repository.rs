//! Users Repository
//!
//! The in-memory store behind [`InMemoryUsersService`](super::InMemoryUsersService).
//! It owns every [`User`] for the lifetime of the process; callers only ever
//! receive clones.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

use crate::domain::users::models::{User, UserId, UserUpdate};

#[derive(Debug, Default)]
pub(crate) struct InMemoryUsersRepository {
    users: RwLock<FxHashMap<UserId, User>>,
}

impl InMemoryUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // Every operation is a single map access, so a panic while the lock is
    // held cannot leave a record half-written.
    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<UserId, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<UserId, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `user` under its id, returning the record it replaced, if any.
    pub(crate) fn insert(&self, user: User) -> Option<User> {
        self.write().insert(user.id.clone(), user)
    }

    pub(crate) fn get(&self, id: &UserId) -> Option<User> {
        self.read().get(id).cloned()
    }

    /// All users, ordered by id.
    pub(crate) fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.read().values().cloned().collect();

        users.sort_by(|a, b| a.id.cmp(&b.id));

        users
    }

    pub(crate) fn update(&self, id: &UserId, update: UserUpdate) -> Option<User> {
        let mut users = self.write();
        let user = users.get_mut(id)?;

        update.apply(user);

        Some(user.clone())
    }

    /// Remove a user, reporting whether one was stored under `id`.
    pub(crate) fn delete(&self, id: &UserId) -> bool {
        self.write().remove(id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }
}
