// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for MediaWiki access

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Article content returned by a single-page extract query
#[derive(Debug, Clone)]
pub struct ArticleContent {
    /// Plain-text extract; `None` when the slug resolves to no content.
    /// Callers must treat this as "nothing to synthesize", not as an error.
    pub extract: Option<String>,
    /// Raw image titles attached to the page (e.g. "File:Example.jpg")
    pub image_titles: Vec<String>,
}

/// A single hit from the remote search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Article title
    pub title: String,
    /// Snippet as returned by the API, may contain HTML markup
    pub snippet: String,
    /// Numeric page id
    pub page_id: i64,
}

/// Errors that can occur talking to the MediaWiki API
#[derive(Debug, Error)]
pub enum WikiError {
    /// Non-success HTTP status from the API
    #[error("Wikipedia API responded with status {status}: {message}")]
    ApiError {
        /// HTTP status code (0 if the request never completed)
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// Request timed out
    #[error("Wikipedia API timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Response body could not be decoded
    #[error("Wikipedia API returned an invalid response: {0}")]
    InvalidResponse(String),
}
