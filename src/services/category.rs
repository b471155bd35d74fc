//! Video category detection
//!
//! Two classifiers share the [`CategoryClassifier`] seam: a local one that
//! looks for label words among the transcript keywords, and one that asks a
//! [`Completion`] collaborator. [`CategoryDetector`] picks one when it is
//! built and sticks with it.

use std::fmt;

use super::prompts::{category_prompt, classification_prompt};
use super::{complete_non_empty, Completion};
use crate::errors::{InsightError, Result};
use crate::nlp::cleaner::TextCleaner;

/// Labels used when the caller does not supply any
pub const DEFAULT_CATEGORIES: [&str; 20] = [
    "Technology",
    "Education",
    "Health",
    "Finance",
    "Entertainment",
    "Science",
    "Business",
    "Politics",
    "Sports",
    "Lifestyle",
    "News",
    "Gaming",
    "Music",
    "Art",
    "Travel",
    "Food",
    "Fashion",
    "Automotive",
    "Environment",
    "History",
];

/// Keywords inspected by the local classifier
const KEYWORD_POOL: usize = 50;
/// Shorter labels only match by stem, so "art" does not claim "artificial"
const MIN_PREFIX_LEN: usize = 5;

/// Pick one label for a text
pub trait CategoryClassifier: Send + Sync {
    fn classify(&self, text: &str, labels: &[&str]) -> Result<String>;
}

fn require_labels(labels: &[&str]) -> Result<()> {
    if labels.is_empty() {
        return Err(InsightError::invalid_config("at least one label is required"));
    }
    Ok(())
}

// ============================================================================
// Local classifier
// ============================================================================

/// Scores each label by the share of keyword occurrences that match it
#[derive(Debug, Clone, Default)]
pub struct KeywordCategoryClassifier {
    cleaner: TextCleaner,
}

impl KeywordCategoryClassifier {
    pub fn new(cleaner: TextCleaner) -> Self {
        Self { cleaner }
    }

    /// Density of `label` among `keywords`, in `[0, 1]`
    fn label_score(&self, label: &str, keywords: &[(String, usize)], total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let label = label.to_lowercase();
        let label_stem = self.cleaner.stem_text(&label);

        let hits: usize = keywords
            .iter()
            .filter(|(word, _)| {
                let stem = self.cleaner.stem_text(word);
                stem == label_stem
                    || (label.chars().count() >= MIN_PREFIX_LEN
                        && (word.starts_with(&label) || stem.starts_with(&label_stem)))
            })
            .map(|(_, count)| *count)
            .sum();

        hits as f64 / total as f64
    }
}

impl CategoryClassifier for KeywordCategoryClassifier {
    /// The best scoring label; earlier labels win ties, so a text with no
    /// matching keywords gets the first label.
    fn classify(&self, text: &str, labels: &[&str]) -> Result<String> {
        require_labels(labels)?;

        let keywords = self.cleaner.keyword_counts(text, KEYWORD_POOL);
        let total: usize = keywords.iter().map(|(_, c)| *c).sum();

        let mut best = (labels[0], 0.0_f64);
        for &label in labels {
            let score = self.label_score(label, &keywords, total);
            if score > best.1 {
                best = (label, score);
            }
        }

        tracing::debug!(label = best.0, score = best.1, "local category chosen");
        Ok(best.0.to_string())
    }
}

// ============================================================================
// Completion-backed classifier
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptStyle {
    Video,
    General,
}

/// Asks a completion collaborator for the label
pub struct CompletionClassifier<C> {
    completion: C,
    style: PromptStyle,
}

impl<C: Completion> CompletionClassifier<C> {
    /// General zero-shot classification prompt
    pub fn new(completion: C) -> Self {
        Self {
            completion,
            style: PromptStyle::General,
        }
    }

    /// Prompt phrased for video transcripts
    pub fn for_video(completion: C) -> Self {
        Self {
            completion,
            style: PromptStyle::Video,
        }
    }
}

impl<C> fmt::Debug for CompletionClassifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionClassifier")
            .field("style", &self.style)
            .finish()
    }
}

/// Replies less similar than this to every label get the first label
const LABEL_SIMILARITY_CUTOFF: f64 = 0.6;

/// Characters both strings share, by recursive longest common substring
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (mut best_len, mut best_a, mut best_b) = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    for i in 0..a.len() {
        let mut row = vec![0usize; b.len() + 1];
        for j in 0..b.len() {
            if a[i] == b[j] {
                row[j + 1] = prev[j] + 1;
                if row[j + 1] > best_len {
                    best_len = row[j + 1];
                    best_a = i + 1 - best_len;
                    best_b = j + 1 - best_len;
                }
            }
        }
        prev = row;
    }
    if best_len == 0 {
        return 0;
    }
    best_len
        + matching_chars(&a[..best_a], &b[..best_b])
        + matching_chars(&a[best_a + best_len..], &b[best_b + best_len..])
}

/// Similarity ratio in `[0, 1]`: twice the matching characters over the
/// combined length
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Map a free-form reply onto one of `labels`.
///
/// Tried in order: a case-insensitive exact match, a reply mentioning exactly
/// one label, the most similar label above the cutoff. Otherwise the first
/// label. `labels` must not be empty.
fn canonical_label(reply: &str, labels: &[&str]) -> String {
    let answer = reply
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c == '*')
        .trim();

    if let Some(label) = labels.iter().find(|l| l.eq_ignore_ascii_case(answer)) {
        return label.to_string();
    }

    let lowered = answer.to_lowercase();
    let mentioned: Vec<&str> = labels
        .iter()
        .copied()
        .filter(|l| lowered.contains(&l.to_lowercase()))
        .collect();
    if let [only] = mentioned.as_slice() {
        return only.to_string();
    }

    let mut closest: Option<(&str, f64)> = None;
    for &label in labels {
        let ratio = similarity(answer, label);
        if ratio >= LABEL_SIMILARITY_CUTOFF && closest.map_or(true, |(_, best)| ratio > best) {
            closest = Some((label, ratio));
        }
    }
    match closest {
        Some((label, _)) => label.to_string(),
        None => {
            tracing::debug!(reply = answer, "reply matches no label, using the first");
            labels.first().map(|l| l.to_string()).unwrap_or_default()
        }
    }
}

/// Send `prompt` and map the reply onto `labels`
pub(crate) fn classify_by_completion<C: Completion + ?Sized>(
    completion: &C,
    prompt: &str,
    labels: &[&str],
) -> Result<String> {
    require_labels(labels)?;
    let reply = complete_non_empty(completion, prompt)?;
    Ok(canonical_label(&reply, labels))
}

impl<C: Completion> CategoryClassifier for CompletionClassifier<C> {
    fn classify(&self, text: &str, labels: &[&str]) -> Result<String> {
        let prompt = match self.style {
            PromptStyle::Video => category_prompt(text, labels),
            PromptStyle::General => classification_prompt(text, labels),
        };
        classify_by_completion(&self.completion, &prompt, labels)
    }
}

// ============================================================================
// Detector
// ============================================================================

/// Which classifier a detector was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierSource {
    Local,
    Remote,
}

/// Category detection with the classifier fixed at construction
pub struct CategoryDetector {
    classifier: Box<dyn CategoryClassifier>,
    source: ClassifierSource,
}

impl CategoryDetector {
    /// Prefer the local classifier when one is available
    pub fn select(
        local: Option<Box<dyn CategoryClassifier>>,
        remote: Box<dyn CategoryClassifier>,
    ) -> Self {
        match local {
            Some(classifier) => Self {
                classifier,
                source: ClassifierSource::Local,
            },
            None => {
                tracing::debug!("no local classifier, using completion service");
                Self {
                    classifier: remote,
                    source: ClassifierSource::Remote,
                }
            }
        }
    }

    pub fn source(&self) -> ClassifierSource {
        self.source
    }

    pub fn is_local(&self) -> bool {
        self.source == ClassifierSource::Local
    }

    /// Classify against [`DEFAULT_CATEGORIES`]
    pub fn detect(&self, transcript: &str) -> Result<String> {
        self.classify(transcript, &DEFAULT_CATEGORIES)
    }

    pub fn classify(&self, text: &str, labels: &[&str]) -> Result<String> {
        self.classifier.classify(text, labels)
    }
}

impl fmt::Debug for CategoryDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryDetector")
            .field("source", &self.source)
            .finish()
    }
}
