// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hosted language-model client
//!
//! Speaks the OpenAI-compatible `chat/completions` wire format. Two
//! operations are exposed: a structured completion that demands exactly
//! one schema-conforming tool call, and a plain text completion used for
//! event expansion.

pub mod client;
pub mod config;
pub mod error;

pub use client::{LlmClient, ToolSpec};
pub use config::LlmConfig;
pub use error::LlmError;
