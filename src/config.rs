//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CatalogError, Result};

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Service configuration parameters.
///
/// All values except the API key have sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key; there is no default
    pub api_key: Option<String>,
    /// Provider base URL
    pub base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Results requested per page
    pub page_size: u32,
    /// Quiescence window before a search fires, in milliseconds
    pub debounce_ms: u64,
    /// Freshness window for every cache, in milliseconds
    pub cache_ttl_ms: u64,
    /// Capacity of the search page cache
    pub search_cache_capacity: usize,
    /// Capacity of the detail and image caches
    pub detail_cache_capacity: usize,
    /// Per-request timeout for provider calls, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RAWG_API_KEY` - Provider API key (required to issue requests)
    /// - `RAWG_BASE_URL` - Provider base URL (default: https://api.rawg.io/api)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PAGE_SIZE` - Results per page (default: 20)
    /// - `DEBOUNCE_MS` - Search debounce window (default: 300)
    /// - `CACHE_TTL_MS` - Cache freshness window (default: 300000)
    /// - `SEARCH_CACHE_CAPACITY` - Search cache size (default: 50)
    /// - `DETAIL_CACHE_CAPACITY` - Detail/image cache size (default: 100)
    /// - `REQUEST_TIMEOUT_SECS` - Provider request timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("RAWG_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env::var("RAWG_BASE_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.base_url),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            page_size: parse_env("PAGE_SIZE").unwrap_or(defaults.page_size),
            debounce_ms: parse_env("DEBOUNCE_MS").unwrap_or(defaults.debounce_ms),
            cache_ttl_ms: parse_env("CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            search_cache_capacity: parse_env("SEARCH_CACHE_CAPACITY")
                .unwrap_or(defaults.search_cache_capacity),
            detail_cache_capacity: parse_env("DETAIL_CACHE_CAPACITY")
                .unwrap_or(defaults.detail_cache_capacity),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Returns the API key or a configuration error if it was never set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            CatalogError::Config("Missing provider API key. Set RAWG_API_KEY".to_string())
        })
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            server_port: 3000,
            page_size: 20,
            debounce_ms: 300,
            cache_ttl_ms: 300_000,
            search_cache_capacity: 50,
            detail_cache_capacity: 100,
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.search_cache_capacity, 50);
        assert_eq!(config.detail_cache_capacity, 100);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_present_api_key() {
        let config = Config {
            api_key: Some("secret".to_string()),
            ..Config::default()
        };
        assert_eq!(config.require_api_key().unwrap(), "secret");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Only touch variables no other test reads
        env::remove_var("PAGE_SIZE");
        env::remove_var("DEBOUNCE_MS");
        env::remove_var("SEARCH_CACHE_CAPACITY");

        let config = Config::from_env();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.search_cache_capacity, 50);
    }
}
