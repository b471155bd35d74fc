//! Structured summaries returned by the completion collaborator.
//!
//! Replies are often wrapped in Markdown fences or miss sections. Parsing is
//! lenient: fences are stripped, empty sections get placeholder entries, and
//! a reply that cannot be read at all yields [`StructuredSummary::fallback`].

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Topics, notes and insights extracted from a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSummary {
    pub key_topics: Vec<String>,
    pub key_notes: Vec<String>,
    pub key_insights: Vec<String>,
}

impl StructuredSummary {
    /// Returned when the reply is unusable
    pub fn fallback() -> Self {
        Self {
            key_topics: strings(&["Video main topic", "Secondary topic"]),
            key_notes: strings(&[
                "Important fact from the video",
                "Notable information mentioned",
            ]),
            key_insights: strings(&["Key takeaway from the content", "Significant conclusion"]),
        }
    }

    fn fill_empty_sections(mut self) -> Self {
        if self.key_topics.is_empty() {
            self.key_topics = strings(&["Main topic of the video"]);
        }
        if self.key_notes.is_empty() {
            self.key_notes = strings(&["Important fact from the video"]);
        }
        if self.key_insights.is_empty() {
            self.key_insights =
                strings(&["Key takeaway from the content", "Significant conclusion"]);
        }
        self
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Remove a surrounding ```` ```json ```` / ```` ``` ```` fence
pub fn strip_code_fence(reply: &str) -> &str {
    let mut body = reply.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Strict parse: all three keys must be present
pub fn try_parse_structured_summary(reply: &str) -> Result<StructuredSummary> {
    let summary: StructuredSummary = serde_json::from_str(strip_code_fence(reply))?;
    Ok(summary.fill_empty_sections())
}

/// Lenient parse that always produces a summary
pub fn parse_structured_summary(reply: &str) -> StructuredSummary {
    try_parse_structured_summary(reply).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "unreadable structured summary, using fallback");
        StructuredSummary::fallback()
    })
}
