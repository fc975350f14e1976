// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search orchestration
//!
//! Order of attempts:
//! 1. Case-insensitive substring match against cached stubs (up to 10).
//!    Any hit short-circuits; the remote endpoint is never called.
//! 2. Remote search, snippets stripped of markup, results returned and
//!    persisted by a detached task whose failure is only logged.
//! 3. On remote failure, a loosened per-word local match (up to 5),
//!    falling through to an empty list.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::types::SearchError;
use crate::store::{ArticleStore, ArticleStub};
use crate::wiki::WikiClient;

const LOCAL_RESULT_LIMIT: usize = 10;
const FALLBACK_RESULT_LIMIT: usize = 5;

/// Search suggestion service
pub struct SearchService {
    wiki: WikiClient,
    articles: ArticleStore,
}

fn strip_markup(snippet: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"</?[^>]+(>|$)").expect("valid tag regex"));
    re.replace_all(snippet, "").into_owned()
}

impl SearchService {
    pub fn new(wiki: WikiClient, articles: ArticleStore) -> Self {
        Self { wiki, articles }
    }

    /// Search for article suggestions matching `query`
    ///
    /// Callers are responsible for rejecting empty queries upstream.
    pub async fn search(&self, query: &str) -> Result<Vec<ArticleStub>, SearchError> {
        let local = self.articles.search_local(query, LOCAL_RESULT_LIMIT).await?;
        if !local.is_empty() {
            debug!("local search hit for {:?}: {} results", query, local.len());
            return Ok(local);
        }

        match self.wiki.search(query).await {
            Ok(hits) => {
                let stubs: Vec<ArticleStub> = hits
                    .into_iter()
                    .map(|hit| ArticleStub {
                        title: hit.title,
                        snippet: strip_markup(&hit.snippet),
                        page_id: Some(hit.page_id),
                    })
                    .collect();

                // Persist in the background; the request path never
                // waits on this write and its failure is only logged.
                let articles = self.articles.clone();
                let to_persist = stubs.clone();
                tokio::spawn(async move {
                    if let Err(e) = articles.insert_stubs(&to_persist).await {
                        warn!("failed to persist search results: {}", e);
                    }
                });

                debug!("remote search for {:?}: {} results", query, stubs.len());
                Ok(stubs)
            }
            Err(e) => {
                warn!(
                    "remote search failed for {:?}: {}, trying loose local match",
                    query, e
                );
                Ok(self
                    .articles
                    .search_local_loose(query, FALLBACK_RESULT_LIMIT)
                    .await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_tags() {
        assert_eq!(
            strip_markup("<b>Lady</b> Gaga is a <i>singer</i>"),
            "Lady Gaga is a singer"
        );
    }

    #[test]
    fn test_strip_markup_handles_unclosed_tag() {
        assert_eq!(strip_markup("trailing <span class=\"x"), "trailing ");
    }

    #[test]
    fn test_strip_markup_plain_text_unchanged() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_markup_closing_tags() {
        assert_eq!(
            strip_markup("<span class=\"searchmatch\">Einstein</span>"),
            "Einstein"
        );
    }
}
