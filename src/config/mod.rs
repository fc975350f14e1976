// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;
use std::time::Duration;

use crate::llm::LlmConfig;

/// Default MediaWiki API endpoint (English Wikipedia)
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Top-level node configuration
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Port the HTTP API binds to
    pub api_port: u16,
    /// SQLite database URL for the document cache
    pub database_url: String,
    /// MediaWiki API endpoint
    pub wikipedia_api_url: String,
    /// Language-model API configuration
    pub llm: LlmConfig,
    /// Per-call HTTP timeout for MediaWiki requests, in seconds
    pub request_timeout_secs: u64,
    /// Maximum images attached to a single timeline
    pub max_images: usize,
}

impl NodeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://timelines.db?mode=rwc".to_string()),
            wikipedia_api_url: env::var("WIKIPEDIA_API_URL")
                .unwrap_or_else(|_| DEFAULT_WIKIPEDIA_API_URL.to_string()),
            llm: LlmConfig::from_env(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_images: env::var("MAX_IMAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.is_empty() {
            return Err("DATABASE_URL must not be empty".to_string());
        }
        if url::Url::parse(&self.wikipedia_api_url).is_err() {
            return Err(format!(
                "WIKIPEDIA_API_URL is not a valid URL: {}",
                self.wikipedia_api_url
            ));
        }
        if url::Url::parse(&self.llm.base_url).is_err() {
            return Err(format!(
                "LLM_API_URL is not a valid URL: {}",
                self.llm.base_url
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// HTTP timeout for MediaWiki requests
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_port: 8080,
            database_url: "sqlite://timelines.db?mode=rwc".to_string(),
            wikipedia_api_url: DEFAULT_WIKIPEDIA_API_URL.to_string(),
            llm: LlmConfig::default(),
            request_timeout_secs: 10,
            max_images: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NodeConfig::default();
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.max_images, 10);
        assert_eq!(config.wikipedia_api_url, DEFAULT_WIKIPEDIA_API_URL);
    }

    #[test]
    fn test_default_config_validates() {
        let config = NodeConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_wikipedia_url_rejected() {
        let mut config = NodeConfig::default();
        config.wikipedia_api_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let mut config = NodeConfig::default();
        config.database_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = NodeConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_duration() {
        let config = NodeConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
