use serde::Deserialize;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/veracity/config.toml
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the classification API (no trailing slash needed).
    pub api_base_url: String,
    /// Network timeout for every API call (seconds).
    pub request_timeout_secs: u64,
    /// Theme name (built-in or custom).
    pub theme: String,
    /// Whether the deep-scan toggle starts enabled.
    pub deep_scan: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            theme: "default".to_string(),
            deep_scan: false,
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional — missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    theme: Option<String>,
    deep_scan: Option<bool>,
}

impl Config {
    /// Load config from ~/.config/veracity/config.toml, falling back to
    /// defaults for any missing fields. If the file doesn't exist, returns
    /// pure defaults.
    pub fn load() -> Self {
        let config_path = crate::constants::config_file_path();
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Config::default(), // No config file — use defaults
        };
        Self::from_toml_str(&content, &config_path.display().to_string())
    }

    fn from_toml_str(content: &str, origin: &str) -> Self {
        let mut config = Config::default();

        let file_config: FileConfig = match toml::from_str(content) {
            Ok(fc) => fc,
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}. Using defaults.", origin, e);
                return config;
            }
        };

        // Merge file values over defaults
        if let Some(v) = file_config.api_base_url {
            if !v.is_empty() {
                config.api_base_url = v;
            }
        }
        if let Some(v) = file_config.request_timeout_secs {
            config.request_timeout_secs = v.max(MIN_REQUEST_TIMEOUT_SECS);
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        if let Some(v) = file_config.deep_scan {
            config.deep_scan = v;
        }

        config
    }
}
