//! Provider Config

use clap::Args;

use duomarket_app::providers::DEFAULT_BASE_URL;

/// External catalog provider settings.
#[derive(Debug, Args)]
pub struct ProvidersConfig {
    /// Base URL of the external provider host
    #[arg(long, env = "PROVIDERS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub providers_base_url: String,
}
