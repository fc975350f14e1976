// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Language-model client errors

use thiserror::Error;

/// Errors that can occur during a language-model invocation
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API rejected the credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limited by the provider
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other non-success response from the provider
    #[error("LLM API error: {0}")]
    Provider(String),

    /// Response body could not be decoded
    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    /// A structured completion came back with zero tool calls. The call
    /// was mandatory, so this is a hard failure rather than "no events".
    #[error("Model produced no structured output")]
    NoStructuredOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = LlmError::Provider("OpenAI API error 500: boom".to_string());
        assert!(error.to_string().contains("500"));

        let error = LlmError::NoStructuredOutput;
        assert!(error.to_string().contains("no structured output"));
    }
}
