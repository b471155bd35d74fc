//! Keyword-overlap sentence selection for summarization
//!
//! Scores each sentence by how many document keywords it contains,
//! normalized by its length, and keeps the best ones in document order.

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Sentences with fewer words than this score zero
    pub min_sentence_words: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: 5,
            min_sentence_words: 3,
        }
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// Position in the transcript
    pub index: usize,
    /// Original (uncleaned) sentence text
    pub text: String,
    /// Keyword hits per word
    pub score: f64,
}

/// Keyword-overlap sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Set the minimum sentence length in words
    pub fn with_min_sentence_words(mut self, n: usize) -> Self {
        self.config.min_sentence_words = n;
        self
    }

    /// Score one cleaned sentence.
    ///
    /// Each keyword counts once if it occurs anywhere in the lowercased
    /// sentence, so "model" also hits "models". The total is divided by the
    /// whitespace word count. Short sentences score 0.
    pub fn score(&self, cleaned: &str, keywords: &[String]) -> f64 {
        let word_count = cleaned.split_whitespace().count();
        if word_count < self.config.min_sentence_words || word_count == 0 {
            return 0.0;
        }

        let lowered = cleaned.to_lowercase();
        let hits = keywords
            .iter()
            .filter(|k| !k.is_empty() && lowered.contains(k.to_lowercase().as_str()))
            .count();

        hits as f64 / word_count as f64
    }

    /// Pick the best sentences.
    ///
    /// `sentences` and `cleaned` are parallel slices. Ranking is a stable sort
    /// on descending score, so among equal scores the earlier sentence wins;
    /// the result is returned in document order.
    pub fn select(
        &self,
        sentences: &[&str],
        cleaned: &[String],
        keywords: &[String],
    ) -> Vec<SelectedSentence> {
        if self.config.num_sentences == 0 || sentences.is_empty() {
            return Vec::new();
        }

        let scores: Vec<f64> = cleaned.iter().map(|s| self.score(s, keywords)).collect();

        let mut ranked: Vec<usize> = (0..sentences.len().min(scores.len())).collect();
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        ranked.truncate(self.config.num_sentences);

        // Sort by document order
        ranked.sort_unstable();

        ranked
            .into_iter()
            .map(|i| SelectedSentence {
                index: i,
                text: sentences[i].to_string(),
                score: scores[i],
            })
            .collect()
    }
}
