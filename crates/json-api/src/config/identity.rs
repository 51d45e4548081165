//! Identity Provider Config

use clap::Args;

/// Identity provider settings.
#[derive(Debug, Args)]
pub struct IdentityProviderConfig {
    /// Identity provider address
    #[arg(long, env = "IDENTITY_ADDR")]
    pub identity_addr: String,

    /// Service API key for session verification
    #[arg(long, env = "IDENTITY_API_KEY", hide_env_values = true)]
    pub identity_api_key: String,
}
