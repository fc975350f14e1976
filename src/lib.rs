// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod images;
pub mod llm;
pub mod search;
pub mod store;
pub mod timeline;
pub mod version;
pub mod wiki;

// Re-export main types
pub use api::{ApiError, AppState};
pub use config::NodeConfig;
pub use images::{resolve_images, ResolvedImage};
pub use llm::{LlmClient, LlmConfig, LlmError, ToolSpec};
pub use search::{ArticleStub, SearchService};
pub use store::{ArticleStore, CacheStore, StoreError, TimelineStore};
pub use timeline::{
    DetailExpander, Event, EventImage, Period, Timeline, TimelineError, TimelineService,
    TimelineSynthesizer,
};
pub use wiki::{ArticleContent, SearchHit, WikiClient, WikiError};
