// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! MediaWiki API client
//!
//! Provides access to the encyclopedia collaborator:
//! - Article plain-text extracts and image title listings
//! - Image title to direct URL resolution
//! - Full-text article search

pub mod client;
pub mod types;

pub use client::WikiClient;
pub use types::{ArticleContent, SearchHit, WikiError};
