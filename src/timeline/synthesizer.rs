// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Timeline synthesis via a mandatory structured completion
//!
//! Callers must short-circuit before invoking this with empty article
//! text; the synthesizer itself always goes to the model. A response
//! with zero tool calls is a hard failure, not "no events found".

use serde_json::json;

use super::types::{Timeline, TimelineError};
use crate::images::ResolvedImage;
use crate::llm::{LlmClient, LlmError, ToolSpec};

/// Synthesizes timelines from article text
#[derive(Clone)]
pub struct TimelineSynthesizer {
    llm: LlmClient,
}

impl TimelineSynthesizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Generate a timeline from a non-empty article extract and the
    /// resolved image list.
    pub async fn synthesize(
        &self,
        extract: &str,
        images: &[ResolvedImage],
    ) -> Result<Timeline, TimelineError> {
        let prompt = build_prompt(extract, images);
        let tool = timeline_tool();

        let arguments = self.llm.complete_structured(&prompt, &tool).await?;

        let timeline: Timeline = serde_json::from_value(arguments)
            .map_err(|e| LlmError::InvalidResponse(format!("timeline shape: {}", e)))?;

        Ok(timeline)
    }
}

/// The single tool offered to the model, with the Timeline JSON schema
/// as its parameters.
pub fn timeline_tool() -> ToolSpec {
    ToolSpec {
        name: "create_timeline".to_string(),
        description: "Create a timeline from the given Wikipedia article content".to_string(),
        parameters: timeline_schema(),
    }
}

fn timeline_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "periods": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "years": { "type": "string" },
                        "name": { "type": "string" },
                        "events": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "date": { "type": "string" },
                                    "name": { "type": "string" },
                                    "description": { "type": "string" },
                                    "image": {
                                        "type": "object",
                                        "properties": {
                                            "url": { "type": "string" },
                                            "title": { "type": "string" }
                                        },
                                        "required": ["url", "title"]
                                    }
                                },
                                "required": ["date", "name", "description"]
                            }
                        }
                    },
                    "required": ["years", "name", "events"]
                }
            }
        },
        "required": ["title", "periods"]
    })
}

fn build_prompt(extract: &str, images: &[ResolvedImage]) -> String {
    let images_json = serde_json::to_string(images).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Given the following Wikipedia article content and available images, \
create a timeline using the create_timeline function.\n\
\n\
Instructions:\n\
1. Extract a comprehensive list of key events and dates from the article.\n\
2. Group events into logical periods.\n\
3. Ensure all dates are in the correct format (YYYY-MM-DD for specific dates, \
YYYY-MM for months, YYYY for years).\n\
4. Provide concise but informative details on each event, 1 to 3 sentences long.\n\
5. Each period should include between 2 and 8 events.\n\
6. The timeline should be chronologically ordered.\n\
7. Use the images available and add them to relevant events.\n\
\n\
Wikipedia article content:\n\
{extract}\n\
\n\
Available images:\n\
{images_json}\n\
\n\
Start by thinking of where each image can be used, then create the timeline \
using the provided function."
    )
}
