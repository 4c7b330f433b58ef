//! Server configuration module

use clap::{Parser, Subcommand};

use crate::config::{
    contract::ContractConfig, cors::CorsConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig, users::UsersConfig,
};

pub(crate) mod contract;
pub(crate) mod cors;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod users;

pub(crate) use observability::LogFormat;

/// Roster JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "roster-json", about = "Roster JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// What to do after the OpenAPI contract has been written.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Cross-origin request settings.
    #[command(flatten)]
    pub cors: CorsConfig,

    /// OpenAPI contract export settings.
    #[command(flatten)]
    pub contract: ContractConfig,

    /// User store settings.
    #[command(flatten)]
    pub users: UsersConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Process invocation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write the OpenAPI contract, then serve requests (default).
    Serve,

    /// Write the OpenAPI contract and exit without binding a socket.
    #[command(name = "gen:openapi")]
    GenOpenapi,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// The selected invocation mode, defaulting to [`Command::Serve`].
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
