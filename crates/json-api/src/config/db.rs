//! Database Config

use clap::Args;

/// Application database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the orders database
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
