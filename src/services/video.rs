//! Video summarization on top of the completion and transcription seams

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::category::{classify_by_completion, CategoryDetector, DEFAULT_CATEGORIES};
use super::prompts::{
    category_prompt, chat_prompt, context_prompt, structured_info_prompt, summary_prompt,
    ChatContext, OutputLanguage,
};
use super::structured::{parse_structured_summary, StructuredSummary};
use super::{complete_non_empty, Completion, Transcriber};
use crate::analysis::TranscriptAnalyzer;
use crate::errors::Result;
use crate::types::InsightReport;

/// Everything produced for one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDigest {
    pub transcript: String,
    /// Always one of the English category labels
    pub category: String,
    pub context: String,
    pub summary: String,
    pub structured: StructuredSummary,
    pub insights: InsightReport,
}

/// Summaries from a completion collaborator plus local transcript analysis
pub struct VideoSummarizer<C> {
    completion: C,
    analyzer: TranscriptAnalyzer,
    language: OutputLanguage,
    detector: Option<CategoryDetector>,
}

impl<C: Completion> VideoSummarizer<C> {
    pub fn new(completion: C) -> Self {
        Self {
            completion,
            analyzer: TranscriptAnalyzer::default(),
            language: OutputLanguage::default(),
            detector: None,
        }
    }

    /// Detect categories with `detector` instead of asking the completion
    /// collaborator directly
    pub fn with_detector(mut self, detector: CategoryDetector) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_analyzer(mut self, analyzer: TranscriptAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Language the summaries are written in
    pub fn with_language(mut self, language: OutputLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn analyzer(&self) -> &TranscriptAnalyzer {
        &self.analyzer
    }

    pub fn language(&self) -> OutputLanguage {
        self.language
    }

    pub fn summarize(&self, transcript: &str) -> Result<String> {
        let reply = complete_non_empty(
            &self.completion,
            &summary_prompt(transcript, self.language),
        )?;
        Ok(reply.trim().to_string())
    }

    pub fn understand_context(&self, transcript: &str) -> Result<String> {
        let reply = complete_non_empty(
            &self.completion,
            &context_prompt(transcript, self.language),
        )?;
        Ok(reply.trim().to_string())
    }

    /// Topics, notes and insights from a summary.
    ///
    /// Collaborator failures are errors; an unreadable reply is not, it
    /// yields [`StructuredSummary::fallback`].
    pub fn extract_structured_info(&self, summary: &str) -> Result<StructuredSummary> {
        let reply = complete_non_empty(
            &self.completion,
            &structured_info_prompt(summary, self.language),
        )?;
        Ok(parse_structured_summary(&reply))
    }

    /// Transcribe `audio` and run the local analysis on the transcript
    pub fn transcribe_and_analyze<T>(&self, transcriber: &T, audio: &Path) -> Result<InsightReport>
    where
        T: Transcriber + ?Sized,
    {
        let transcript = transcriber.transcribe(audio)?;
        tracing::debug!(
            audio = %audio.display(),
            chars = transcript.len(),
            "transcription finished"
        );
        Ok(self.analyzer.extract_structured_insights(&transcript))
    }

    /// Category from [`DEFAULT_CATEGORIES`], independent of the output language
    pub fn detect_category(&self, transcript: &str) -> Result<String> {
        match &self.detector {
            Some(detector) => detector.detect(transcript),
            None => classify_by_completion(
                &self.completion,
                &category_prompt(transcript, &DEFAULT_CATEGORIES),
                &DEFAULT_CATEGORIES,
            ),
        }
    }

    /// Transcribe `audio`, then [`VideoSummarizer::digest_transcript`]
    pub fn digest<T>(&self, transcriber: &T, audio: &Path) -> Result<VideoDigest>
    where
        T: Transcriber + ?Sized,
    {
        let transcript = transcriber.transcribe(audio)?;
        tracing::debug!(audio = %audio.display(), "transcription finished");
        self.digest_transcript(&transcript)
    }

    /// Category, context, summary, structured summary and local insights for
    /// a transcript that is already available
    pub fn digest_transcript(&self, transcript: &str) -> Result<VideoDigest> {
        let category = self.detect_category(transcript)?;
        let context = self.understand_context(transcript)?;
        let summary = self.summarize(transcript)?;
        let structured = self.extract_structured_info(&summary)?;
        let insights = self.analyzer.extract_structured_insights(transcript);

        Ok(VideoDigest {
            transcript: transcript.trim().to_string(),
            category: category.trim().to_string(),
            context,
            summary,
            structured,
            insights,
        })
    }

    /// Rewrite the language-dependent parts of `previous` in this
    /// summarizer's language.
    ///
    /// The transcript, category and local insights are reused; nothing is
    /// transcribed or classified again.
    pub fn relocalize(&self, previous: &VideoDigest) -> Result<VideoDigest> {
        tracing::debug!(language = self.language.name(), "re-summarizing existing transcript");
        let context = self.understand_context(&previous.transcript)?;
        let summary = self.summarize(&previous.transcript)?;
        let structured = self.extract_structured_info(&summary)?;

        Ok(VideoDigest {
            transcript: previous.transcript.clone(),
            category: previous.category.clone(),
            context,
            summary,
            structured,
            insights: previous.insights.clone(),
        })
    }

    /// Answer a question about a digested video, in the output language
    pub fn answer(&self, digest: &VideoDigest, title: &str, question: &str) -> Result<String> {
        let context = ChatContext {
            title,
            category: &digest.category,
            summary: &digest.summary,
            structured: &digest.structured,
            transcript: &digest.transcript,
        };
        let reply = complete_non_empty(
            &self.completion,
            &chat_prompt(&context, question, self.language),
        )?;
        Ok(reply.trim().to_string())
    }
}

impl<C> fmt::Debug for VideoSummarizer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoSummarizer")
            .field("analyzer", &self.analyzer)
            .field("language", &self.language)
            .field("detector", &self.detector)
            .finish()
    }
}
