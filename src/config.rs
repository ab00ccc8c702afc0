use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Whether to query the remote API. When false every operation is served
    /// from the bundled dataset, which loads instantly.
    #[serde(default)]
    pub use_api: bool,
    /// Base URL of the remote recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Where the favorites list is persisted
    #[serde(default = "default_favorites_path")]
    pub favorites_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_api: false,
            base_url: default_base_url(),
            timeout: default_timeout(),
            favorites_path: default_favorites_path(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("favorite_recipes.json")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_HUB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_HUB__USE_API, RECIPE_HUB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_HUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
