//! App Context

use std::sync::Arc;

use crate::domain::users::{IdScheme, InMemoryUsersService, UsersService};

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    #[must_use]
    pub fn new(users: Arc<dyn UsersService>) -> Self {
        Self { users }
    }

    /// Build an application context backed by a fresh, empty in-memory store.
    #[must_use]
    pub fn in_memory(ids: IdScheme) -> Self {
        Self::new(Arc::new(InMemoryUsersService::new(ids)))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
