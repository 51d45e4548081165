//! Server Config

use clap::Args;

/// Network settings the server binds with.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Host address to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// The `host:port` pair to bind.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
