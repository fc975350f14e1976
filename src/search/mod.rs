// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search suggestion service
//!
//! Local-cache-first search with a remote fallback and a loosened
//! local fallback when the remote endpoint is unreachable. Remote
//! results are persisted opportunistically in the background; a search
//! that finds nothing degrades to an empty suggestion list rather than
//! an error.

pub mod service;
pub mod types;

pub use service::SearchService;
pub use types::SearchError;

// The stub shape is owned by the store; re-exported here as the search
// result type.
pub use crate::store::ArticleStub;
