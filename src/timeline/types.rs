// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Timeline data model

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::LlmError;
use crate::store::StoreError;
use crate::wiki::WikiError;

/// A generated timeline for one article
///
/// Periods are requested from the model in non-decreasing chronological
/// order but the ordering is not verified here; consumers must be
/// defensive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub title: String,
    pub periods: Vec<Period>,
}

/// A labeled chronological grouping of events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Period {
    /// Label such as "1879-1900"
    pub years: String,
    pub name: String,
    /// 2-8 events expected, not enforced
    pub events: Vec<Event>,
}

/// A single dated event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// "YYYY", "YYYY-MM", or "YYYY-MM-DD"
    pub date: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EventImage>,
}

/// An image attached to an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventImage {
    pub url: String,
    pub title: String,
}

impl Timeline {
    /// Placeholder returned (and cached) when an article has no content.
    /// "Found nothing to write about" is a valid result, not an error.
    pub fn not_found() -> Self {
        Self {
            title: "Article Not Found".to_string(),
            periods: Vec::new(),
        }
    }
}

/// Errors from the timeline pipeline
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error(transparent)]
    Wiki(#[from] WikiError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_placeholder() {
        let timeline = Timeline::not_found();
        assert_eq!(timeline.title, "Article Not Found");
        assert!(timeline.periods.is_empty());
    }

    #[test]
    fn test_event_without_image_omits_field() {
        let event = Event {
            date: "1905".to_string(),
            name: "Annus mirabilis".to_string(),
            description: "Four groundbreaking papers.".to_string(),
            image: None,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("image"));
    }

    #[test]
    fn test_timeline_deserialization_from_tool_arguments() {
        let json = r#"{
            "title": "Albert Einstein",
            "periods": [{
                "years": "1879-1900",
                "name": "Early life",
                "events": [{
                    "date": "1879-03-14",
                    "name": "Birth",
                    "description": "Born in Ulm, Germany.",
                    "image": {"url": "https://example.com/a.jpg", "title": "Einstein 1921.jpg"}
                }]
            }]
        }"#;

        let timeline: Timeline = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.periods[0].events[0].image.as_ref().unwrap().title, "Einstein 1921.jpg");
    }

    #[test]
    fn test_timeline_rejects_missing_required_fields() {
        // No periods field at all: shape validation must fail
        let json = r#"{"title": "Broken"}"#;
        assert!(serde_json::from_str::<Timeline>(json).is_err());
    }
}
