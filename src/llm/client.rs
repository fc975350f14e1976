// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI-compatible chat completion client
//!
//! `complete_structured` models the strict contract the synthesizer
//! relies on: request = (prompt, output schema), response = exactly one
//! schema-conforming tool call or [`LlmError::NoStructuredOutput`].
//! Multiple calls are not expected from a single-tool request; only the
//! first is used.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::error::LlmError;

/// A single tool definition offered to the model
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Function name the model must call
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON schema for the function parameters
    pub parameters: serde_json::Value,
}

/// Language-model API client
#[derive(Clone)]
pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

impl LlmClient {
    /// Create a new client with the given configuration
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Run a completion that must produce one tool call matching `tool`
    ///
    /// Returns the parsed arguments of the first tool call. A response
    /// with zero tool calls is a hard failure.
    pub async fn complete_structured(
        &self,
        prompt: &str,
        tool: &ToolSpec,
    ) -> Result<serde_json::Value, LlmError> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            tools: Some(vec![ToolDefinition {
                kind: "function".to_string(),
                function: FunctionDefinition {
                    name: tool.name.clone(),
                    description: tool.description.clone(),
                    parameters: tool.parameters.clone(),
                },
            }]),
            tool_choice: Some("required".to_string()),
        };

        let message = self.send(&body).await?;

        let call = message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(LlmError::NoStructuredOutput)?;

        serde_json::from_str(&call.function.arguments)
            .map_err(|e| LlmError::InvalidResponse(format!("tool call arguments: {}", e)))
    }

    /// Run a plain text completion
    pub async fn complete_text(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            tools: None,
            tool_choice: None,
        };

        let message = self.send(&body).await?;
        Ok(message.content.unwrap_or_default())
    }

    async fn send(&self, body: &ChatRequest) -> Result<ResponseMessage, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::Authentication(error_text),
                429 => LlmError::RateLimited(error_text),
                _ => LlmError::Provider(format!("LLM API error {}: {}", status, error_text)),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
    }
}

// OpenAI-compatible wire types
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ToolDefinition {
    #[serde(rename = "type")]
    kind: String,
    function: FunctionDefinition,
}

#[derive(Debug, Serialize)]
struct FunctionDefinition {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    /// Arguments arrive as a JSON-encoded string, not an object
    arguments: String,
}
