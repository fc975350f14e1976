// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::env;
use wiki_timeline_node::{
    api::{start_server, AppState},
    config::NodeConfig,
    llm::LlmClient,
    search::SearchService,
    store::CacheStore,
    timeline::{DetailExpander, TimelineService, TimelineSynthesizer},
    wiki::WikiClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Wiki Timeline Node...\n");
    println!("📦 BUILD VERSION: {}", wiki_timeline_node::version::VERSION);
    println!();

    let config = NodeConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    tracing::info!("Connecting document cache at {}", config.database_url);
    let store = CacheStore::connect(&config.database_url).await?;

    let wiki = WikiClient::new(&config.wikipedia_api_url, config.request_timeout());
    let llm = LlmClient::new(config.llm.clone());

    let timelines = TimelineService::new(
        wiki.clone(),
        TimelineSynthesizer::new(llm.clone()),
        store.timelines(),
        config.max_images,
    );
    let expander = DetailExpander::new(wiki.clone(), llm);
    let search = SearchService::new(wiki, store.articles());

    let state = AppState::new(timelines, expander, search);

    let result = start_server(state, config.api_port)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e));

    store.close().await;
    result
}
