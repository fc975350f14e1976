// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{collections::HashMap, net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use super::ApiError;
use crate::search::SearchService;
use crate::timeline::{DetailExpander, TimelineService};
use crate::version;

#[derive(Clone)]
pub struct AppState {
    pub timelines: Arc<TimelineService>,
    pub expander: Arc<DetailExpander>,
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(
        timelines: TimelineService,
        expander: DetailExpander,
        search: SearchService,
    ) -> Self {
        Self {
            timelines: Arc::new(timelines),
            expander: Arc::new(expander),
            search: Arc::new(search),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Timeline generation (cached)
        .route("/timeline", get(timeline_handler))
        // Event expansion (uncached)
        .route("/extra", get(extra_handler))
        // Search suggestions
        .route("/search", get(search_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    state: AppState,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": version::VERSION_NUMBER,
    }))
}

// Empty parameter values count as missing, matching the upstream
// "empty query rejected" policy.
fn required_param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(|v| v.as_str())
        .filter(|v| !v.is_empty())
}

async fn timeline_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(slug) = required_param(&params, "slug") else {
        return ApiErrorResponse(ApiError::InvalidRequest("Slug is required".to_string()))
            .into_response();
    };

    match state.timelines.timeline_for(slug).await {
        Ok(timeline) => Json(timeline).into_response(),
        Err(e) => {
            error!("Error generating timeline for {}: {}", slug, e);
            ApiErrorResponse(ApiError::InternalError(
                "Failed to generate timeline".to_string(),
            ))
            .into_response()
        }
    }
}

async fn extra_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let (Some(slug), Some(period_name), Some(event_name)) = (
        required_param(&params, "slug"),
        required_param(&params, "periodName"),
        required_param(&params, "eventName"),
    ) else {
        return ApiErrorResponse(ApiError::InvalidRequest(
            "Slug, periodName, and eventName are required".to_string(),
        ))
        .into_response();
    };

    match state.expander.expand(slug, period_name, event_name).await {
        Ok(text) => Json(json!({ "expandedInfo": text })).into_response(),
        Err(e) => {
            error!("Error fetching expanded information for {}: {}", slug, e);
            ApiErrorResponse(ApiError::InternalError(
                "Failed to fetch expanded information".to_string(),
            ))
            .into_response()
        }
    }
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(query) = required_param(&params, "q") else {
        return ApiErrorResponse(ApiError::InvalidRequest(
            "Search query is required".to_string(),
        ))
        .into_response();
    };

    match state.search.search(query).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            error!("Error searching for {:?}: {}", query, e);
            ApiErrorResponse(ApiError::InternalError(
                "Failed to search Wikipedia".to_string(),
            ))
            .into_response()
        }
    }
}

// Error response wrapper
struct ApiErrorResponse(ApiError);

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.0.to_response())).into_response()
    }
}
