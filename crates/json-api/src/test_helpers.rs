//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use roster_app::{
    context::AppContext,
    domain::users::{MockUsersService, models::User},
};

use crate::{errors, state::State};

pub(crate) fn make_user(id: &str) -> User {
    User {
        id: id.into(),
        name: "Ada".to_string(),
        email: "ada@x.com".to_string(),
    }
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(users)))
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .push(route),
    )
    .catcher(errors::catcher())
}
