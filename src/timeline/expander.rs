// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! On-demand expansion of a single timeline event
//!
//! Always performs a fresh article fetch and a fresh model call; results
//! are never cached.

use super::types::TimelineError;
use crate::llm::LlmClient;
use crate::wiki::WikiClient;

/// Placeholder returned when the article has no content to expand from
pub const NO_EXTRA_INFO: &str = "No additional information available";

/// Expands one period/event pair into a short supplementary paragraph
#[derive(Clone)]
pub struct DetailExpander {
    wiki: WikiClient,
    llm: LlmClient,
}

impl DetailExpander {
    pub fn new(wiki: WikiClient, llm: LlmClient) -> Self {
        Self { wiki, llm }
    }

    /// Fetch the article and ask the model for context on one event
    pub async fn expand(
        &self,
        slug: &str,
        period_name: &str,
        event_name: &str,
    ) -> Result<String, TimelineError> {
        let extract = self.wiki.fetch_extract(slug).await?;

        let content = match extract {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Ok(NO_EXTRA_INFO.to_string()),
        };

        let prompt = build_prompt(&content, period_name, event_name);
        Ok(self.llm.complete_text(&prompt).await?)
    }
}

fn build_prompt(content: &str, period_name: &str, event_name: &str) -> String {
    format!(
        "Given the following Wikipedia article content, provide detailed \
information about the event \"{event_name}\" from the period \"{period_name}\".\n\
Focus on providing a summary of key details and important information.\n\
Keep the response to less than 1 paragraph.\n\
Do not say the name of the event or period.\n\
\n\
Wikipedia article content:\n\
{content}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_event_and_period() {
        let prompt = build_prompt("Article text here.", "Early life", "Birth");

        assert!(prompt.contains("\"Birth\""));
        assert!(prompt.contains("\"Early life\""));
        assert!(prompt.contains("Article text here."));
        assert!(prompt.contains("less than 1 paragraph"));
        assert!(prompt.contains("Do not say the name"));
    }
}
