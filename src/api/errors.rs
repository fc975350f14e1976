// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Clone)]
pub enum ApiError {
    /// A required query parameter is missing; rejected before any
    /// external call is made
    InvalidRequest(String),
    /// Upstream or internal failure, reported with a fixed user-facing
    /// message
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::InternalError(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::InternalError(msg) => msg.clone(),
        };

        ErrorResponse { error: message }
    }
}
