// src/config.rs - Application configuration

use serde::{Deserialize, Serialize};

use crate::api::query::DEFAULT_PAGE_SIZE;

/// Environment variable overriding the backend base URL on desktop builds.
pub const API_URL_ENV: &str = "STOREFRONT_ADMIN_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the admin REST backend. Empty means same-origin, which is
    /// what the browser build wants; the desktop build needs an absolute URL.
    pub api_base_url: String,
    /// Items per page requested for every list.
    pub page_size: u32,
    /// Default tracing filter for the desktop build.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            api_base_url: String::new(),
            #[cfg(not(target_arch = "wasm32"))]
            api_base_url: "http://localhost:5000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_filter: "info,storefront_admin=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration for the desktop build: TOML file if present,
    /// then environment overrides on top.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> crate::error::Result<Self> {
        use crate::error::Error;

        let mut config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    Error::config(format!("Cannot read config file {}: {}", path.display(), e))
                })?;
                toml::from_str(&contents)
                    .map_err(|e| Error::config(format!("Invalid config file: {}", e)))?
            }
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_base_url = url;
        }
        if config.page_size == 0 {
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.log_filter.is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("api_base_url = \"https://shop.example.com\"").unwrap();
        assert_eq!(config.api_base_url, "https://shop.example.com");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/admin.toml")));
        assert!(result.is_err());
    }
}
