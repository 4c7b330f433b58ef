//! App Router

use std::{sync::Arc, time::Duration};

use salvo::{
    affix_state::inject,
    catch_panic::CatchPanic,
    cors::CorsHandler,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    timeout::Timeout,
    trailing_slash::remove_slash,
};

use crate::{errors, healthcheck, hello, observability, state::State, users};

/// Where the contract is served.
pub(crate) const OPENAPI_ROUTE: &str = "/api-doc/openapi.json";

/// Every documented endpoint, without middleware.
pub(crate) fn api_router() -> Router {
    Router::new()
        .push(Router::with_path("hello").get(hello::handler))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("v1/users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(users::get::handler)
                        .put(users::update::handler)
                        .delete(users::delete::handler),
                ),
        )
}

/// Mount the API and its documentation behind the server middleware.
pub(crate) fn service(
    api: Router,
    doc: OpenApi,
    state: Arc<State>,
    cors: CorsHandler,
    request_timeout: Duration,
) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(Timeout::new(request_timeout))
        .hoop(inject(state))
        .push(api)
        .push(doc.into_router(OPENAPI_ROUTE))
        .push(SwaggerUi::new(OPENAPI_ROUTE).into_router("docs"));

    Service::new(router)
        .hoop(cors)
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .catcher(errors::catcher())
}
