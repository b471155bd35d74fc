//! Prompt builders for the completion collaborator

use serde::{Deserialize, Serialize};

use super::structured::StructuredSummary;

/// Transcript characters sent with classification and chat prompts
pub const PROMPT_EXCERPT_CHARS: usize = 2000;

/// The first `max_chars` characters of `text`
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Languages a summary can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLanguage {
    #[default]
    English,
    Spanish,
    French,
    German,
    Chinese,
    Hindi,
    Marathi,
    Japanese,
}

impl OutputLanguage {
    /// Parse an ISO code; anything unknown means English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "es" => OutputLanguage::Spanish,
            "fr" => OutputLanguage::French,
            "de" => OutputLanguage::German,
            "zh" => OutputLanguage::Chinese,
            "hi" => OutputLanguage::Hindi,
            "mr" => OutputLanguage::Marathi,
            "ja" => OutputLanguage::Japanese,
            _ => OutputLanguage::English,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Spanish => "Spanish",
            OutputLanguage::French => "French",
            OutputLanguage::German => "German",
            OutputLanguage::Chinese => "Chinese",
            OutputLanguage::Hindi => "Hindi",
            OutputLanguage::Marathi => "Marathi",
            OutputLanguage::Japanese => "Japanese",
        }
    }

    fn respond_instruction(&self) -> String {
        format!("Respond in {}.", self.name())
    }

    fn translate_instruction(&self) -> String {
        match self {
            OutputLanguage::English => String::new(),
            other => format!("Write all output in {}.\n", other.name()),
        }
    }
}

pub fn summary_prompt(transcript: &str, language: OutputLanguage) -> String {
    format!(
        "Summarize this transcript in clear, simple language without going beyond what it says.\n\
         {translate}\n\
         Transcript:\n{transcript}\n",
        translate = language.translate_instruction(),
    )
}

pub fn context_prompt(transcript: &str, language: OutputLanguage) -> String {
    format!(
        "Read the transcript and list:\n\
         - the key topics\n\
         - notable facts\n\
         - highlights or insights\n\
         {translate}\n\
         Transcript:\n{transcript}\n",
        translate = language.translate_instruction(),
    )
}

/// Asks for the JSON shape read by [`super::structured::parse_structured_summary`]
pub fn structured_info_prompt(summary: &str, language: OutputLanguage) -> String {
    format!(
        r#"From the video summary below extract:
1. Key topics (2-5 items)
2. Key notes or facts (2-5 items)
3. Key insights, explained plainly (2-5 items)
{translate}
Reply with JSON only, no Markdown and no commentary, exactly in this shape:
{{
  "key_topics": ["..."],
  "key_notes": ["..."],
  "key_insights": ["..."]
}}

Summary:
{summary}
"#,
        translate = language.translate_instruction(),
    )
}

/// Category prompt; the answer is expected to be one label, in English
pub fn category_prompt(transcript: &str, labels: &[&str]) -> String {
    format!(
        "Pick the one category that best fits this video transcript: {labels}.\n\
         Answer with the category name only, in English.\n\n\
         Transcript:\n{transcript}\n",
        labels = labels.join(", "),
        transcript = excerpt(transcript, PROMPT_EXCERPT_CHARS),
    )
}

/// General zero-shot classification over arbitrary labels
pub fn classification_prompt(text: &str, labels: &[&str]) -> String {
    let options: String = labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}. {}\n", i + 1, label))
        .collect();
    format!(
        "Classify the text into exactly one of these labels:\n{options}\n\
         Reply with the label text only.\n\n\
         Text:\n{text}\n",
        text = excerpt(text, PROMPT_EXCERPT_CHARS),
    )
}

/// What a chat answer about one video may draw on
#[derive(Debug, Clone, Copy)]
pub struct ChatContext<'a> {
    /// Empty titles are shown as "the video"
    pub title: &'a str,
    pub category: &'a str,
    pub summary: &'a str,
    pub structured: &'a StructuredSummary,
    pub transcript: &'a str,
}

/// Question-answering prompt grounded in a video's summary and transcript
pub fn chat_prompt(context: &ChatContext<'_>, question: &str, language: OutputLanguage) -> String {
    let title = match context.title.trim() {
        "" => "the video",
        title => title,
    };
    format!(
        r#"You answer questions about one video, "{title}".

Category: {category}

Summary:
{summary}

Key topics: {topics}
Key notes: {notes}
Key insights: {insights}

Transcript excerpt:
{transcript}...

Question: "{question}"

Answer only from the material above. If it does not contain the answer, say so
briefly. Keep the answer short and conversational and never invent facts.
{respond}
"#,
        category = context.category,
        summary = context.summary,
        topics = context.structured.key_topics.join(", "),
        notes = context.structured.key_notes.join(", "),
        insights = context.structured.key_insights.join(", "),
        transcript = excerpt(context.transcript, PROMPT_EXCERPT_CHARS),
        respond = language.respond_instruction(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_language_codes() {
        assert_eq!(OutputLanguage::from_code("es"), OutputLanguage::Spanish);
        assert_eq!(OutputLanguage::from_code(" MR "), OutputLanguage::Marathi);
        assert_eq!(OutputLanguage::from_code("xx"), OutputLanguage::English);
        assert_eq!(OutputLanguage::Japanese.name(), "Japanese");
    }

    #[test]
    fn test_summary_prompt_translation() {
        let en = summary_prompt("hello", OutputLanguage::English);
        assert!(en.contains("hello"));
        assert!(!en.contains("Write all output in"));

        let de = summary_prompt("hello", OutputLanguage::German);
        assert!(de.contains("Write all output in German."));
    }

    #[test]
    fn test_structured_prompt_shape() {
        let prompt = structured_info_prompt("a summary", OutputLanguage::French);
        assert!(prompt.contains("\"key_topics\""));
        assert!(prompt.contains("\"key_insights\""));
        assert!(prompt.contains("French"));
        assert!(prompt.ends_with("a summary\n"));
    }

    #[test]
    fn test_category_prompt_lists_labels() {
        let prompt = category_prompt("text", &["Health", "Sports"]);
        assert!(prompt.contains("Health, Sports"));
        assert!(context_prompt("t", OutputLanguage::English).contains("key topics"));
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo", 2), "hé");
        assert_eq!(excerpt("abc", 10), "abc");
        assert_eq!(excerpt("", 3), "");
    }

    #[test]
    fn test_classification_prompts_truncate_text() {
        let long = "é".repeat(PROMPT_EXCERPT_CHARS + 500);
        let expected = "é".repeat(PROMPT_EXCERPT_CHARS);

        let prompt = classification_prompt(&long, &["A"]);
        assert!(prompt.ends_with(&format!("Text:\n{expected}\n")));
        let prompt = category_prompt(&long, &["A"]);
        assert!(prompt.ends_with(&format!("Transcript:\n{expected}\n")));
    }

    #[test]
    fn test_chat_prompt() {
        let structured = StructuredSummary {
            key_topics: vec!["AI".into(), "Health".into()],
            key_notes: vec!["85% fewer errors".into()],
            key_insights: vec!["Promising".into()],
        };
        let context = ChatContext {
            title: "",
            category: "Health",
            summary: "AI helps doctors.",
            structured: &structured,
            transcript: &"x".repeat(3000),
        };
        let prompt = chat_prompt(&context, "What changed?", OutputLanguage::Spanish);

        assert!(prompt.contains("\"the video\""));
        assert!(prompt.contains("Key topics: AI, Health"));
        assert!(prompt.contains("Question: \"What changed?\""));
        assert!(prompt.contains(&format!("{}...", "x".repeat(PROMPT_EXCERPT_CHARS))));
        assert!(!prompt.contains(&"x".repeat(PROMPT_EXCERPT_CHARS + 1)));
        assert!(prompt.contains("Respond in Spanish."));
    }

    #[test]
    fn test_classification_prompt_numbers_labels() {
        let prompt = classification_prompt("text", &["Billing", "Support"]);
        assert!(prompt.contains("1. Billing\n2. Support\n"));
        assert!(prompt.ends_with("Text:\ntext\n"));
    }
}
