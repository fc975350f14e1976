// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cached article search stubs
//!
//! Rows are appended opportunistically after uncached remote searches.
//! There is no uniqueness constraint; duplicate insert attempts are
//! tolerated and the collection is never deduplicated or expired.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use super::StoreError;

/// A cached search suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStub {
    /// Article title
    pub title: String,
    /// Snippet with markup already stripped
    pub snippet: String,
    /// Numeric page id, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,
}

/// Article stub collection
#[derive(Clone)]
pub struct ArticleStore {
    pool: SqlitePool,
}

fn like_pattern(term: &str) -> String {
    // User input must not act as LIKE wildcards
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn row_to_stub(row: &sqlx::sqlite::SqliteRow) -> Result<ArticleStub, StoreError> {
    Ok(ArticleStub {
        title: row.try_get("title")?,
        snippet: row.try_get("snippet")?,
        page_id: row.try_get("page_id")?,
    })
}

impl ArticleStore {
    pub(super) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring match over title and snippet
    pub async fn search_local(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ArticleStub>, StoreError> {
        let pattern = like_pattern(query);

        let rows = sqlx::query(
            r#"
            SELECT title, snippet, page_id FROM articles
            WHERE title LIKE ?1 ESCAPE '\' OR snippet LIKE ?1 ESCAPE '\'
            LIMIT ?2
            "#,
        )
        .bind(pattern)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_stub).collect()
    }

    /// Loosened match: any single query word may match title or snippet.
    /// Used as the degraded path when the remote search is unreachable.
    pub async fn search_local_loose(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ArticleStub>, StoreError> {
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut sql = String::from("SELECT title, snippet, page_id FROM articles WHERE ");
        let clauses: Vec<&str> =
            vec![r#"(title LIKE ? ESCAPE '\' OR snippet LIKE ? ESCAPE '\')"#; words.len()];
        sql.push_str(&clauses.join(" OR "));
        sql.push_str(" LIMIT ?");

        let mut q = sqlx::query(&sql);
        for word in &words {
            let pattern = like_pattern(word);
            q = q.bind(pattern.clone()).bind(pattern);
        }
        q = q.bind(limit as i64);

        let rows = q.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_stub).collect()
    }

    /// Append stubs, ignoring any row that fails to insert. One bad row
    /// does not stop the rest of the batch.
    pub async fn insert_stubs(&self, stubs: &[ArticleStub]) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();

        for stub in stubs {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO articles (title, snippet, page_id, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&stub.title)
            .bind(&stub.snippet)
            .bind(stub.page_id)
            .bind(&now)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}
