// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image reference filtering and URL resolution
//!
//! Takes the raw image titles attached to an article, drops icons and
//! logos, caps the batch, and resolves the survivors to direct URLs in
//! parallel. A failed lookup never fails the batch; that entry simply
//! carries no URL and downstream synthesis treats it as unusable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::wiki::WikiClient;

/// An image reference resolved (or not) to a direct URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedImage {
    /// Always "image"; kept on the wire for the synthesis prompt
    #[serde(rename = "type")]
    pub kind: String,
    /// Display title with the leading "File:" prefix stripped
    pub title: String,
    /// Direct URL, absent when resolution failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Whether a raw title names an icon or logo (case-insensitive substring)
fn is_decoration(title: &str) -> bool {
    let lower = title.to_lowercase();
    lower.contains("icon") || lower.contains("logo")
}

fn display_title(title: &str) -> String {
    title.strip_prefix("File:").unwrap_or(title).to_string()
}

/// Filter raw image titles and resolve them to direct URLs
///
/// Lookups run concurrently; result order matches input order. Each
/// failed lookup yields an entry with `url: None` and does not cancel
/// its siblings.
pub async fn resolve_images(
    wiki: &WikiClient,
    image_titles: &[String],
    max_images: usize,
) -> Vec<ResolvedImage> {
    let candidates: Vec<&String> = image_titles
        .iter()
        .filter(|title| !is_decoration(title))
        .take(max_images)
        .collect();

    let lookups = candidates.iter().map(|title| async move {
        let url = match wiki.resolve_image_url(title).await {
            Ok(url) => url,
            Err(e) => {
                debug!("image lookup failed for {}: {}", title, e);
                None
            }
        };
        ResolvedImage {
            kind: "image".to_string(),
            title: display_title(title),
            url,
        }
    });

    futures::future::join_all(lookups).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_and_logo_filtered_any_case() {
        assert!(is_decoration("File:Site Icon.svg"));
        assert!(is_decoration("File:Company LOGO.png"));
        assert!(is_decoration("File:logotype.jpg"));
        assert!(!is_decoration("File:Einstein 1921.jpg"));
    }

    #[test]
    fn test_display_title_strips_file_prefix() {
        assert_eq!(display_title("File:Einstein 1921.jpg"), "Einstein 1921.jpg");
        assert_eq!(display_title("Einstein 1921.jpg"), "Einstein 1921.jpg");
    }

    #[test]
    fn test_resolved_image_serialization() {
        let image = ResolvedImage {
            kind: "image".to_string(),
            title: "Einstein 1921.jpg".to_string(),
            url: Some("https://upload.wikimedia.org/Einstein_1921.jpg".to_string()),
        };

        let json = serde_json::to_string(&image).unwrap();
        assert!(json.contains(r#""type":"image""#));
    }

    #[test]
    fn test_resolved_image_without_url_omits_field() {
        let image = ResolvedImage {
            kind: "image".to_string(),
            title: "Broken.jpg".to_string(),
            url: None,
        };

        let json = serde_json::to_string(&image).unwrap();
        assert!(!json.contains("url"));
    }
}
