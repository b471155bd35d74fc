//! # rapid_transcript
//!
//! Transcript cleaning and analysis for spoken-content pipelines.
//!
//! Raw transcript text goes in; key sentences, topic segments, keyword
//! sentiment, tag-cloud weights and text statistics come out.
//!
//! ## Features
//!
//! - **Configurable cleaning**: case, HTML, URLs, punctuation, numbers,
//!   stopwords, stemming and lemmatization, each switchable
//! - **Unicode-aware**: sentence and word boundaries follow UAX #29
//! - **Multilingual stopwords**: unsupported languages fall back to English
//! - **Collaborator seams**: summarization, category detection and
//!   transcription plug in through small traits

pub mod analysis;
pub mod errors;
pub mod nlp;
pub mod services;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{InsightError, Result, ServiceError, TranscriptionError};
pub use types::{
    AnalyzerConfig, CleanConfig, InsightReport, SentimentSummary, TagCloudEntry, TextStatistics,
    TopicSegment,
};

// Re-export main functionality
pub use analysis::{sentiment::SentimentLexicon, TranscriptAnalyzer};
pub use nlp::{
    cleaner::TextCleaner,
    language::{Language, LanguageFallback},
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use services::{
    category::{CategoryClassifier, CategoryDetector, DEFAULT_CATEGORIES},
    prompts::OutputLanguage,
    structured::{parse_structured_summary, StructuredSummary},
    video::{VideoDigest, VideoSummarizer},
    Completion, Transcriber,
};
pub use summarizer::selector::SentenceSelector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
