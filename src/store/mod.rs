// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Document cache for generated timelines and search-result stubs
//!
//! Backed by SQLite via sqlx. The store is an explicitly constructed,
//! injected dependency with its own connect/close lifecycle; there is no
//! ambient global client. Two logical collections:
//! - `timelines`: one row per slug, last-write-wins upsert, no expiry
//! - `articles`: search stubs, appended opportunistically, never expired

pub mod articles;
pub mod timelines;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use thiserror::Error;

pub use articles::{ArticleStore, ArticleStub};
pub use timelines::TimelineStore;

/// Errors from the document cache
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database-level failure
    #[error("Store error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A persisted timeline could not be (de)serialized
    #[error("Stored timeline serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS timelines (
    slug TEXT PRIMARY KEY,
    timeline TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS articles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    snippet TEXT NOT NULL,
    page_id INTEGER,
    created_at TEXT NOT NULL
);
"#;

/// Handle to the SQLite-backed document cache
#[derive(Clone)]
pub struct CacheStore {
    pool: SqlitePool,
}

impl CacheStore {
    /// Connect (or create) the cache database at `database_url` and
    /// ensure the schema exists.
    ///
    /// Example URL: "sqlite://timelines.db?mode=rwc"
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        // A pooled in-memory database gets a fresh copy per connection;
        // pin those to a single connection.
        let in_memory = database_url.contains(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(database_url)
            .await?;

        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Collection of cached timelines keyed by slug
    pub fn timelines(&self) -> TimelineStore {
        TimelineStore::new(self.pool.clone())
    }

    /// Collection of cached article search stubs
    pub fn articles(&self) -> ArticleStore {
        ArticleStore::new(self.pool.clone())
    }

    /// Close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
