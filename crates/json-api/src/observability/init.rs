//! Tracing subscriber initialisation.

use tracing::debug;

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Initialize structured logging and apply request logging settings.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)?;

    debug!(
        log_format = ?config.logging.log_format,
        slow_request_threshold_ms = config.logging.slow_request_threshold_ms,
        "observability initialised"
    );

    Ok(())
}
