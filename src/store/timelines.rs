// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cached timelines keyed by article slug

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use super::StoreError;
use crate::timeline::Timeline;

/// Timeline collection: one row per slug, last-write-wins
#[derive(Clone)]
pub struct TimelineStore {
    pool: SqlitePool,
}

impl TimelineStore {
    pub(super) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up the cached timeline for `slug`
    pub async fn get(&self, slug: &str) -> Result<Option<Timeline>, StoreError> {
        let row = sqlx::query("SELECT timeline FROM timelines WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let json: String = row.try_get("timeline")?;
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => Ok(None),
        }
    }

    /// Upsert the timeline for `slug`, stamping the current time.
    ///
    /// Concurrent writers for the same slug are not coordinated; the
    /// last write wins.
    pub async fn put(&self, slug: &str, timeline: &Timeline) -> Result<(), StoreError> {
        let json = serde_json::to_string(timeline)?;

        sqlx::query(
            r#"
            INSERT INTO timelines (slug, timeline, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(slug) DO UPDATE SET
                timeline = excluded.timeline,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(slug)
        .bind(json)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CacheStore;
    use crate::timeline::{Event, Period};

    fn sample_timeline() -> Timeline {
        Timeline {
            title: "Albert Einstein".to_string(),
            periods: vec![Period {
                years: "1879-1900".to_string(),
                name: "Early life".to_string(),
                events: vec![Event {
                    date: "1879-03-14".to_string(),
                    name: "Birth".to_string(),
                    description: "Born in Ulm.".to_string(),
                    image: None,
                }],
            }],
        }
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = CacheStore::connect("sqlite::memory:").await.unwrap();
        assert!(store.timelines().get("Nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = CacheStore::connect("sqlite::memory:").await.unwrap();
        let timelines = store.timelines();

        timelines
            .put("Albert_Einstein", &sample_timeline())
            .await
            .unwrap();

        let cached = timelines.get("Albert_Einstein").await.unwrap().unwrap();
        assert_eq!(cached.title, "Albert Einstein");
        assert_eq!(cached.periods.len(), 1);
        assert_eq!(cached.periods[0].events[0].date, "1879-03-14");
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_entry() {
        let store = CacheStore::connect("sqlite::memory:").await.unwrap();
        let timelines = store.timelines();

        timelines.put("X", &sample_timeline()).await.unwrap();

        let replacement = Timeline {
            title: "Replacement".to_string(),
            periods: vec![],
        };
        timelines.put("X", &replacement).await.unwrap();

        let cached = timelines.get("X").await.unwrap().unwrap();
        assert_eq!(cached.title, "Replacement");
        assert!(cached.periods.is_empty());
    }

    #[tokio::test]
    async fn test_empty_placeholder_timeline_is_cacheable() {
        let store = CacheStore::connect("sqlite::memory:").await.unwrap();
        let timelines = store.timelines();

        timelines.put("Missing", &Timeline::not_found()).await.unwrap();

        let cached = timelines.get("Missing").await.unwrap().unwrap();
        assert_eq!(cached.title, "Article Not Found");
        assert!(cached.periods.is_empty());
    }
}
