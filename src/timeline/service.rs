// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Timeline request orchestration
//!
//! Cache check, then fetch + resolve + synthesize + cache write.
//! Concurrent first-time requests for the same uncached slug are not
//! coordinated; both synthesize and the last cache write wins.

use tracing::{debug, info};

use super::synthesizer::TimelineSynthesizer;
use super::types::{Timeline, TimelineError};
use crate::images::resolve_images;
use crate::store::TimelineStore;
use crate::wiki::WikiClient;

/// Orchestrates the timeline pipeline for one article slug
pub struct TimelineService {
    wiki: WikiClient,
    synthesizer: TimelineSynthesizer,
    store: TimelineStore,
    max_images: usize,
}

impl TimelineService {
    pub fn new(
        wiki: WikiClient,
        synthesizer: TimelineSynthesizer,
        store: TimelineStore,
        max_images: usize,
    ) -> Self {
        Self {
            wiki,
            synthesizer,
            store,
            max_images,
        }
    }

    /// Return the timeline for `slug`, generating and caching it on a miss
    pub async fn timeline_for(&self, slug: &str) -> Result<Timeline, TimelineError> {
        if let Some(cached) = self.store.get(slug).await? {
            debug!("returning cached timeline for {}", slug);
            return Ok(cached);
        }

        let article = self.wiki.fetch_article(slug).await?;

        let timeline = match article.extract {
            Some(text) if !text.trim().is_empty() => {
                let images = resolve_images(&self.wiki, &article.image_titles, self.max_images).await;
                debug!(
                    "fetched article {} ({} chars, {} candidate images)",
                    slug,
                    text.len(),
                    images.len()
                );
                self.synthesizer.synthesize(&text, &images).await?
            }
            // Nothing to synthesize; the placeholder is a valid result
            // and is cached like any other timeline.
            _ => Timeline::not_found(),
        };

        self.store.put(slug, &timeline).await?;
        info!(
            "generated timeline for {}: {} periods",
            slug,
            timeline.periods.len()
        );

        Ok(timeline)
    }
}
