// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API
//!
//! JSON-in/JSON-out endpoints over the timeline pipeline and the search
//! service. Every endpoint returns either a success payload or an
//! `{error}` object; component failures are caught and logged at this
//! boundary and nothing crashes the process.

pub mod errors;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{router, start_server, AppState};
