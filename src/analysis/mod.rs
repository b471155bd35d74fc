//! Transcript analysis
//!
//! [`TranscriptAnalyzer`] turns raw transcript text into key sentences, topic
//! segments, sentiment counts, tag-cloud weights and statistics. Every
//! operation re-runs the [`TextCleaner`] with the cleaning steps it needs and
//! never mutates shared state, so one analyzer can serve many threads.

pub mod segments;
pub mod sentiment;
pub mod tag_cloud;

use rayon::prelude::*;

use crate::errors::Result;
use crate::nlp::cleaner::{rank_by_frequency, TextCleaner};
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::types::{
    AnalyzerConfig, CleanConfig, InsightReport, SentimentSummary, TagCloudEntry, TopicSegment,
};
use sentiment::SentimentLexicon;

/// Transcript analysis engine bound to one language
#[derive(Debug, Clone)]
pub struct TranscriptAnalyzer {
    cleaner: TextCleaner,
    config: AnalyzerConfig,
    lexicon: SentimentLexicon,
}

impl Default for TranscriptAnalyzer {
    fn default() -> Self {
        Self::with_cleaner(TextCleaner::default())
    }
}

impl TranscriptAnalyzer {
    /// Create an analyzer for a language name or code
    pub fn new(language: &str) -> Self {
        Self::with_cleaner(TextCleaner::new(language))
    }

    /// Wrap an existing cleaner
    pub fn with_cleaner(cleaner: TextCleaner) -> Self {
        Self {
            cleaner,
            config: AnalyzerConfig::default(),
            lexicon: SentimentLexicon::default(),
        }
    }

    /// Use a custom configuration (validated)
    pub fn with_config(mut self, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Use a custom sentiment lexicon
    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The `num_sentences` sentences with the highest keyword overlap, in
    /// transcript order and with their original text.
    ///
    /// Sentences are cleaned keeping punctuation and stopwords and scored
    /// against the transcript's top keywords. Among equal scores the earlier
    /// sentence is preferred; beyond that, only the final position order is
    /// guaranteed.
    pub fn extract_key_sentences(&self, transcript: &str, num_sentences: usize) -> Vec<String> {
        let sentences = self.cleaner.tokenize_sentences(transcript);
        let surface = CleanConfig::default()
            .with_punctuation(false)
            .with_stopwords(false)
            .with_lemmatize(false);
        let cleaned: Vec<String> = sentences
            .iter()
            .map(|s| self.cleaner.clean_text(s, &surface))
            .collect();

        let keywords = self
            .cleaner
            .extract_keywords(transcript, self.config.sentence_keyword_pool);

        let selector = SentenceSelector::with_config(SelectorConfig {
            num_sentences,
            min_sentence_words: self.config.min_sentence_words,
        });
        let selected = selector.select(&sentences, &cleaned, &keywords);

        tracing::debug!(
            sentences = sentences.len(),
            keywords = keywords.len(),
            selected = selected.len(),
            "extracted key sentences"
        );
        selected.into_iter().map(|s| s.text).collect()
    }

    /// Split the transcript into at most `max_segments` equal sentence chunks.
    ///
    /// Sentences beyond the last emitted chunk are not covered; see
    /// [`segments`].
    pub fn identify_topic_segments(
        &self,
        transcript: &str,
        max_segments: usize,
    ) -> Vec<TopicSegment> {
        let sentences = self.cleaner.tokenize_sentences(transcript);
        let segments = segments::segment_sentences(
            &self.cleaner,
            &sentences,
            max_segments,
            self.config.segment_keywords,
        );

        if let Some(last) = segments.last() {
            let dropped = sentences.len() - (last.end_idx + 1);
            if dropped > 0 {
                tracing::debug!(dropped, "trailing sentences left out of topic segments");
            }
        }
        segments
    }

    /// Count positive and negative lexicon terms.
    ///
    /// Text is lowercased and lemmatized with punctuation removed but
    /// stopwords kept, so negators stay visible. With the default
    /// `negation_window` of 2 a hit preceded by "not", "no" and the like is
    /// not counted ("not good" adds nothing); configure
    /// [`AnalyzerConfig::with_negation_window`]`(0)` for plain counting.
    pub fn analyze_sentiment_keywords(&self, transcript: &str) -> SentimentSummary {
        let config = CleanConfig::default()
            .with_punctuation(true)
            .with_stopwords(false)
            .with_lemmatize(true);
        let cleaned = self.cleaner.clean_text(transcript, &config).to_lowercase();
        let tokens = self.cleaner.tokenize_words(&cleaned);

        let summary = self.lexicon.count(&tokens, self.config.negation_window);
        tracing::debug!(
            positive = summary.positive_keywords,
            negative = summary.negative_keywords,
            "sentiment keywords counted"
        );
        summary
    }

    /// Weighted word list for a tag cloud, most frequent first
    pub fn generate_tag_cloud_data(&self, transcript: &str, max_tags: usize) -> Vec<TagCloudEntry> {
        let config = CleanConfig::default()
            .with_punctuation(true)
            .with_stopwords(true);
        let cleaned = self.cleaner.clean_text(transcript, &config).to_lowercase();
        let words = self
            .cleaner
            .tokenize_words(&cleaned)
            .into_iter()
            .filter(|w| w.chars().count() > 1);

        tag_cloud::weigh(&rank_by_frequency(words, max_tags))
    }

    /// Run every analysis once and collect the results.
    ///
    /// Sizes come from the analyzer's [`AnalyzerConfig`]; the tag cloud is
    /// weighted over `tag_cloud_tags` words and then cut to `tag_cloud_display`.
    pub fn extract_structured_insights(&self, transcript: &str) -> InsightReport {
        let cfg = &self.config;

        let statistics = self.cleaner.get_text_statistics(transcript);
        let key_sentences = self.extract_key_sentences(transcript, cfg.key_sentences);
        let keywords = self.cleaner.extract_keywords(transcript, cfg.keywords);
        let topic_segments = self.identify_topic_segments(transcript, cfg.topic_segments);
        let sentiment = self.analyze_sentiment_keywords(transcript);
        let mut tag_cloud = self.generate_tag_cloud_data(transcript, cfg.tag_cloud_tags);
        tag_cloud.truncate(cfg.tag_cloud_display);

        InsightReport {
            statistics,
            key_sentences,
            keywords,
            topic_segments,
            sentiment,
            tag_cloud,
        }
    }

    /// [`TranscriptAnalyzer::extract_structured_insights`] over many
    /// transcripts in parallel. Output order matches input order.
    pub fn analyze_batch<T>(&self, transcripts: &[T]) -> Vec<InsightReport>
    where
        T: AsRef<str> + Sync,
    {
        transcripts
            .par_iter()
            .map(|t| self.extract_structured_insights(t.as_ref()))
            .collect()
    }
}
