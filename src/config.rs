use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe API, without trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key appended to every request as `key=`
    #[serde(default)]
    pub api_key: String,
    /// Number of search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Seconds the upload form stays open after a successful upload
    #[serde(default = "default_modal_close_sec")]
    pub modal_close_sec: f64,
    /// Directory that holds the durable bookmark slot
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// URL of the SVG sprite referenced by generated markup
    #[serde(default = "default_icons_url")]
    pub icons_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            results_per_page: default_results_per_page(),
            timeout: default_timeout(),
            modal_close_sec: default_modal_close_sec(),
            storage_dir: default_storage_dir(),
            icons_url: default_icons_url(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://forkify-api.herokuapp.com/api/v2/recipes".to_string()
}

fn default_results_per_page() -> usize {
    10
}

fn default_timeout() -> u64 {
    10
}

fn default_modal_close_sec() -> f64 {
    2.5
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".recipe-desk")
}

fn default_icons_url() -> String {
    "img/icons.svg".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_DESK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_DESK__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_DESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Negative or non-finite values mean no delay.
    pub fn modal_close_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.modal_close_sec).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.results_per_page, 10);
        assert_eq!(config.timeout, 10);
        assert_eq!(config.modal_close_delay(), Duration::from_millis(2500));
        assert!(config.api_key.is_empty());
        assert!(!config.api_url.ends_with('/'));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                "api_key = \"abc\"\nresults_per_page = 5",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.results_per_page, 5);
        assert_eq!(config.timeout, 10);
        assert_eq!(config.icons_url, "img/icons.svg");
    }
}
