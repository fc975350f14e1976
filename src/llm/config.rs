// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Language-model API configuration

use std::env;
use std::time::Duration;

/// Configuration for the hosted language-model API
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Per-request timeout; synthesis over a full article can take a while
    pub timeout: Duration,
}

impl LlmConfig {
    /// Create a new configuration
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Set a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Self {
            api_key: env::var("LLM_API_KEY").unwrap_or_default(),
            base_url: env::var("LLM_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::new("", "https://api.openai.com/v1", "gpt-4o")
    }
}
