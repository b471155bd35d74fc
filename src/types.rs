//! Core types for rapid_transcript
//!
//! This module defines the configuration records and the analysis artifacts
//! produced by [`crate::TranscriptAnalyzer`].

use crate::errors::{InsightError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Cleaning Configuration
// ============================================================================

/// Which cleaning steps [`crate::TextCleaner::clean_text`] applies.
///
/// `lemmatize` takes priority over `stem`: when both are set, stemming is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Lowercase everything
    pub case: bool,
    /// Strip `<...>` tags
    pub html: bool,
    /// Strip `http(s)://` and `www.` links
    pub urls: bool,
    /// Delete ASCII punctuation
    pub punctuation: bool,
    /// Delete digit runs
    pub numbers: bool,
    /// Drop stopwords
    pub stopwords: bool,
    /// Reduce words to dictionary form
    pub lemmatize: bool,
    /// Reduce words to Snowball stems
    pub stem: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            case: true,
            html: true,
            urls: true,
            punctuation: true,
            numbers: true,
            stopwords: true,
            lemmatize: false,
            stem: false,
        }
    }
}

impl CleanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every step disabled; only the final whitespace collapse runs
    pub fn none() -> Self {
        Self {
            case: false,
            html: false,
            urls: false,
            punctuation: false,
            numbers: false,
            stopwords: false,
            lemmatize: false,
            stem: false,
        }
    }

    pub fn with_case(mut self, on: bool) -> Self {
        self.case = on;
        self
    }

    pub fn with_html(mut self, on: bool) -> Self {
        self.html = on;
        self
    }

    pub fn with_urls(mut self, on: bool) -> Self {
        self.urls = on;
        self
    }

    pub fn with_punctuation(mut self, on: bool) -> Self {
        self.punctuation = on;
        self
    }

    pub fn with_numbers(mut self, on: bool) -> Self {
        self.numbers = on;
        self
    }

    pub fn with_stopwords(mut self, on: bool) -> Self {
        self.stopwords = on;
        self
    }

    pub fn with_lemmatize(mut self, on: bool) -> Self {
        self.lemmatize = on;
        self
    }

    pub fn with_stem(mut self, on: bool) -> Self {
        self.stem = on;
        self
    }
}

// ============================================================================
// Analysis Artifacts
// ============================================================================

/// Sentence and word counts for a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub num_sentences: usize,
    /// All word tokens, punctuation included
    pub num_words: usize,
    /// Tokens that are neither stopwords nor punctuation
    pub num_meaningful_words: usize,
    pub avg_sentence_length: f64,
    pub max_sentence_length: usize,
    pub min_sentence_length: usize,
    /// Population standard deviation of sentence lengths
    pub std_sentence_length: f64,
}

/// A contiguous run of sentences with its dominant keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSegment {
    /// Index of the first sentence (inclusive)
    pub start_idx: usize,
    /// Index of the last sentence (inclusive)
    pub end_idx: usize,
    pub start_sentence: String,
    pub end_sentence: String,
    pub keywords: Vec<String>,
}

impl TopicSegment {
    /// Number of sentences covered; 0 when `end_idx < start_idx`
    pub fn len(&self) -> usize {
        (self.end_idx + 1).saturating_sub(self.start_idx)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lexicon hit counts for a transcript
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive_keywords: usize,
    pub negative_keywords: usize,
    /// `positive / max(1, negative)`
    pub sentiment_ratio: f64,
    pub total_analyzed_keywords: usize,
}

impl SentimentSummary {
    /// True when positive terms outweigh negative ones
    pub fn is_positive(&self) -> bool {
        self.sentiment_ratio > 1.0
    }
}

/// One word of a tag cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCloudEntry {
    pub text: String,
    /// In `[1, 10]`; exactly 5 when all selected words are equally frequent
    pub weight: f64,
}

/// Everything [`crate::TranscriptAnalyzer::extract_structured_insights`] produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub statistics: TextStatistics,
    pub key_sentences: Vec<String>,
    pub keywords: Vec<String>,
    pub topic_segments: Vec<TopicSegment>,
    pub sentiment: SentimentSummary,
    pub tag_cloud: Vec<TagCloudEntry>,
}

// ============================================================================
// Analyzer Configuration
// ============================================================================

/// Sizes used when composing an [`InsightReport`], plus scoring constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Key sentences in the report
    pub key_sentences: usize,
    /// Keywords in the report
    pub keywords: usize,
    /// Maximum topic segments in the report
    pub topic_segments: usize,
    /// Tags computed for the tag cloud
    pub tag_cloud_tags: usize,
    /// Tags kept in the report (weights are computed over `tag_cloud_tags`)
    pub tag_cloud_display: usize,
    /// Keywords drawn from the whole transcript for sentence scoring
    pub sentence_keyword_pool: usize,
    /// Sentences shorter than this score zero
    pub min_sentence_words: usize,
    /// Keywords listed per topic segment
    pub segment_keywords: usize,
    /// How many preceding tokens a negator reaches in sentiment counting
    pub negation_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            key_sentences: 5,
            keywords: 10,
            topic_segments: 3,
            tag_cloud_tags: 20,
            tag_cloud_display: 10,
            sentence_keyword_pool: 20,
            min_sentence_words: 3,
            segment_keywords: 5,
            negation_window: 2,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.key_sentences == 0 {
            return Err(InsightError::invalid_config("key_sentences must be > 0"));
        }
        if self.keywords == 0 {
            return Err(InsightError::invalid_config("keywords must be > 0"));
        }
        if self.topic_segments == 0 {
            return Err(InsightError::invalid_config("topic_segments must be > 0"));
        }
        if self.tag_cloud_tags == 0 {
            return Err(InsightError::invalid_config("tag_cloud_tags must be > 0"));
        }
        if self.tag_cloud_display > self.tag_cloud_tags {
            return Err(InsightError::invalid_config(format!(
                "tag_cloud_display ({}) must be <= tag_cloud_tags ({})",
                self.tag_cloud_display, self.tag_cloud_tags
            )));
        }
        if self.sentence_keyword_pool == 0 {
            return Err(InsightError::invalid_config(
                "sentence_keyword_pool must be > 0",
            ));
        }
        Ok(())
    }

    /// Builder method: set number of key sentences
    pub fn with_key_sentences(mut self, n: usize) -> Self {
        self.key_sentences = n;
        self
    }

    /// Builder method: set number of keywords
    pub fn with_keywords(mut self, n: usize) -> Self {
        self.keywords = n;
        self
    }

    /// Builder method: set maximum topic segments
    pub fn with_topic_segments(mut self, n: usize) -> Self {
        self.topic_segments = n;
        self
    }

    /// Builder method: set tag cloud size and how many tags the report keeps
    pub fn with_tag_cloud(mut self, tags: usize, display: usize) -> Self {
        self.tag_cloud_tags = tags;
        self.tag_cloud_display = display;
        self
    }

    /// Builder method: set the negation reach for sentiment counting
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }
}
