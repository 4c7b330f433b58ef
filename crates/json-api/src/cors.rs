//! CORS

use std::time::Duration;

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{
            ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, InvalidHeaderValue, LINK,
        },
    },
};

use crate::config::cors::CorsConfig;

const X_CSRF_TOKEN: HeaderName = HeaderName::from_static("x-csrf-token");

const MAX_AGE: Duration = Duration::from_secs(300);

/// Build the CORS handler for the configured origins.
///
/// # Errors
///
/// Returns an error if a configured origin is not a valid header value.
pub(crate) fn handler(config: &CorsConfig) -> Result<CorsHandler, InvalidHeaderValue> {
    let origins = config
        .allowed_origins()
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Cors::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![ACCEPT, AUTHORIZATION, CONTENT_TYPE, X_CSRF_TOKEN])
        .expose_headers(vec![LINK])
        .allow_credentials(true)
        .max_age(MAX_AGE)
        .into_handler())
}
