//! Roster JSON API Server

use std::process;

use salvo::{http::header::InvalidHeaderValue, prelude::*};
use thiserror::Error;
use tracing::{error, info};

use roster_app::context::AppContext;

use crate::{
    config::{Command, ServerConfig},
    contract::ContractError,
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod contract;
mod cors;
mod errors;
mod extensions;
mod healthcheck;
mod hello;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod users;

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to export openapi contract: {0}")]
    Contract(#[from] ContractError),

    #[error("invalid CORS origin: {0}")]
    Cors(#[from] InvalidHeaderValue),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] salvo::Error),
}

/// Roster JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing subscriber failed to initialize"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    if let Err(startup_error) = run(config).await {
        error!("startup failed: {startup_error}");

        process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let api = router::api_router();
    let doc = contract::document(&api);

    contract::export(&doc, &config.contract.openapi_path)?;

    if config.command() == Command::GenOpenapi {
        return Ok(());
    }

    let app = AppContext::in_memory(config.users.id_scheme);

    let service = router::service(
        api,
        doc,
        State::from_app_context(app),
        cors::handler(&config.cors)?,
        config.server.request_timeout(),
    );

    let addr = config.socket_addr();

    // Bind server
    let acceptor = TcpListener::new(addr.clone())
        .try_bind()
        .await
        .map_err(StartupError::Bind)?;

    info!(
        %addr,
        id_scheme = ?config.users.id_scheme,
        origins = ?config.cors.allowed_origins(),
        "listening"
    );

    let server = Server::new(acceptor);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;

    info!("server stopped");

    Ok(())
}
