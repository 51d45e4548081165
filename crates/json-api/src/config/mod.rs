//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, identity::IdentityProviderConfig, providers::ProvidersConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod identity;
pub(crate) mod logging;
pub(crate) mod providers;
pub(crate) mod server;

pub(crate) use logging::{LogFormat, LoggingConfig};

/// Duomarket JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "duomarket-json", about = "Duomarket JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// External catalog provider settings.
    #[command(flatten)]
    pub providers: ProvidersConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Identity provider settings.
    #[command(flatten)]
    pub identity: IdentityProviderConfig,
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

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
