//! Configuration model loaded from external sources.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared by every screen of the dashboard client.
pub struct ClientConfig {
    /// Root of the admin REST API, e.g. `https://api.example.com/api/v1`.
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Location of the persisted auth session.
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_items_per_page() -> usize {
    crate::DEFAULT_ITEMS_PER_PAGE
}

fn default_session_file() -> String {
    ".session.json".to_string()
}

impl ClientConfig {
    /// Loads `config/default.yaml`, an `APP_ENV`-selected override file, and
    /// `APP_`-prefixed environment variables, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv().ok(); // Load .env file

        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ClientConfig>()
    }
}
