// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the MediaWiki action API
//!
//! All calls hit a single `api.php` endpoint with `action=query` and
//! vary only in the requested properties. Non-success statuses surface
//! as [`WikiError::ApiError`]; no retries are performed here.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;

use super::types::{ArticleContent, SearchHit, WikiError};

/// Client for a MediaWiki `api.php` endpoint
#[derive(Clone)]
pub struct WikiClient {
    base_url: String,
    client: Client,
    timeout_ms: u64,
}

impl WikiClient {
    /// Create a new client for the given `api.php` endpoint
    ///
    /// # Arguments
    /// * `base_url` - Full endpoint URL, e.g. "https://en.wikipedia.org/w/api.php"
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
            timeout_ms: timeout.as_millis() as u64,
        }
    }

    /// Fetch the plain-text extract and attached image titles for one article
    ///
    /// A slug that resolves to no content yields `extract: None` rather
    /// than an error.
    pub async fn fetch_article(&self, slug: &str) -> Result<ArticleContent, WikiError> {
        let envelope = self
            .query::<PagesEnvelope>(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts|images"),
                ("titles", slug),
                ("explaintext", "1"),
                ("exsectionformat", "plain"),
            ])
            .await?;

        let page = envelope.into_first_page();
        Ok(ArticleContent {
            extract: page.as_ref().and_then(|p| p.extract.clone()),
            image_titles: page
                .map(|p| p.images.into_iter().map(|i| i.title).collect())
                .unwrap_or_default(),
        })
    }

    /// Fetch only the plain-text extract for one article
    pub async fn fetch_extract(&self, slug: &str) -> Result<Option<String>, WikiError> {
        let envelope = self
            .query::<PagesEnvelope>(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("titles", slug),
                ("explaintext", "1"),
                ("exsectionformat", "plain"),
            ])
            .await?;

        Ok(envelope.into_first_page().and_then(|p| p.extract))
    }

    /// Resolve one raw image title (e.g. "File:Example.jpg") to a direct URL
    pub async fn resolve_image_url(&self, title: &str) -> Result<Option<String>, WikiError> {
        let envelope = self
            .query::<PagesEnvelope>(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
                ("titles", title),
            ])
            .await?;

        Ok(envelope
            .into_first_page()
            .and_then(|p| p.imageinfo)
            .and_then(|infos| infos.into_iter().next())
            .and_then(|info| info.url))
    }

    /// Full-text search over article titles and content
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, WikiError> {
        let envelope = self
            .query::<SearchEnvelope>(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", query),
                ("utf8", "1"),
                ("origin", "*"),
            ])
            .await?;

        Ok(envelope
            .query
            .search
            .into_iter()
            .map(|entry| SearchHit {
                title: entry.title,
                snippet: entry.snippet,
                page_id: entry.pageid,
            })
            .collect())
    }

    async fn query<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, WikiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WikiError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    WikiError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WikiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WikiError::InvalidResponse(e.to_string()))
    }
}

// MediaWiki response envelopes. Pages are keyed by page id; single-title
// queries carry exactly one entry.
#[derive(Debug, serde::Deserialize)]
struct PagesEnvelope {
    query: PagesBody,
}

impl PagesEnvelope {
    fn into_first_page(self) -> Option<PageEntry> {
        self.query.pages.into_values().next()
    }
}

#[derive(Debug, serde::Deserialize)]
struct PagesBody {
    #[serde(default)]
    pages: HashMap<String, PageEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct PageEntry {
    extract: Option<String>,
    #[serde(default)]
    images: Vec<ImageEntry>,
    imageinfo: Option<Vec<ImageInfoEntry>>,
}

#[derive(Debug, serde::Deserialize)]
struct ImageEntry {
    title: String,
}

#[derive(Debug, serde::Deserialize)]
struct ImageInfoEntry {
    url: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct SearchEnvelope {
    query: SearchBody,
}

#[derive(Debug, serde::Deserialize)]
struct SearchBody {
    #[serde(default)]
    search: Vec<SearchEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct SearchEntry {
    title: String,
    snippet: String,
    pageid: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = WikiClient::new(
            "https://en.wikipedia.org/w/api.php",
            Duration::from_secs(10),
        );
        assert_eq!(client.timeout_ms, 10000);
    }

    #[test]
    fn test_pages_envelope_deserialization() {
        let json = r#"{
            "query": {
                "pages": {
                    "736": {
                        "pageid": 736,
                        "title": "Albert Einstein",
                        "extract": "Albert Einstein was a theoretical physicist.",
                        "images": [
                            {"title": "File:Einstein 1921.jpg"},
                            {"title": "File:Wiki logo.png"}
                        ]
                    }
                }
            }
        }"#;

        let envelope: PagesEnvelope = serde_json::from_str(json).unwrap();
        let page = envelope.into_first_page().unwrap();
        assert!(page.extract.unwrap().starts_with("Albert Einstein"));
        assert_eq!(page.images.len(), 2);
    }

    #[test]
    fn test_missing_page_fields_deserialize() {
        // Nonexistent titles come back without extract or images
        let json = r#"{"query": {"pages": {"-1": {"title": "Nope", "missing": ""}}}}"#;

        let envelope: PagesEnvelope = serde_json::from_str(json).unwrap();
        let page = envelope.into_first_page().unwrap();
        assert!(page.extract.is_none());
        assert!(page.images.is_empty());
    }

    #[test]
    fn test_imageinfo_deserialization() {
        let json = r#"{
            "query": {
                "pages": {
                    "-1": {
                        "title": "File:Einstein 1921.jpg",
                        "imageinfo": [{"url": "https://upload.wikimedia.org/Einstein_1921.jpg"}]
                    }
                }
            }
        }"#;

        let envelope: PagesEnvelope = serde_json::from_str(json).unwrap();
        let url = envelope
            .into_first_page()
            .and_then(|p| p.imageinfo)
            .and_then(|i| i.into_iter().next())
            .and_then(|i| i.url);
        assert_eq!(
            url.as_deref(),
            Some("https://upload.wikimedia.org/Einstein_1921.jpg")
        );
    }

    #[test]
    fn test_search_envelope_deserialization() {
        let json = r#"{
            "query": {
                "search": [
                    {"title": "Lady Gaga", "snippet": "<b>Lady</b> Gaga is a singer", "pageid": 123}
                ]
            }
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.query.search.len(), 1);
        assert_eq!(envelope.query.search[0].pageid, 123);
    }
}
