//! Configurable text cleaning pipeline
//!
//! [`TextCleaner`] bundles the language-scoped resources (stopwords, stemmer,
//! lemmatizer) with a set of pure string transformations, keyword frequency
//! extraction and corpus statistics.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::language::{self, Language, LanguageFallback};
use super::morphology::{Lemmatizer, WordStemmer};
use super::stopwords::StopwordFilter;
use super::tokenizer::{is_punctuation_token, Tokenizer};
use crate::types::{CleanConfig, TextStatistics};

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid html regex"));
static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid url regex"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid space regex"));

/// Language-scoped text cleaner
#[derive(Debug, Clone)]
pub struct TextCleaner {
    language: Language,
    fallback: Option<LanguageFallback>,
    stopwords: StopwordFilter,
    stemmer: WordStemmer,
    lemmatizer: Lemmatizer,
    tokenizer: Tokenizer,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl TextCleaner {
    /// Create a cleaner for a language name or code.
    ///
    /// Unsupported languages fall back to English; see [`TextCleaner::fallback`].
    pub fn new(language: &str) -> Self {
        let (resolved, fallback) = language::resolve(language);
        let mut cleaner = Self::for_language(resolved);
        cleaner.fallback = fallback;
        cleaner
    }

    /// Create a cleaner for an already resolved language
    pub fn for_language(language: Language) -> Self {
        let stopwords = StopwordFilter::new(language);
        tracing::debug!(
            language = %language,
            stopwords = stopwords.len(),
            "text cleaner initialized"
        );
        Self {
            language,
            fallback: None,
            stopwords,
            stemmer: WordStemmer::new(language),
            lemmatizer: Lemmatizer::new(language),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Replace the stopword filter (e.g. a custom domain list)
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The substitution made at construction, if the requested language was unsupported
    pub fn fallback(&self) -> Option<&LanguageFallback> {
        self.fallback.as_ref()
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    // ------------------------------------------------------------------
    // Single transformations
    // ------------------------------------------------------------------

    pub fn normalize_case(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Strip `<...>` tags. Regex level only: nested or malformed markup is not understood.
    pub fn remove_html_tags(&self, text: &str) -> String {
        HTML_TAG.replace_all(text, "").into_owned()
    }

    pub fn remove_urls(&self, text: &str) -> String {
        URL.replace_all(text, "").into_owned()
    }

    /// Delete every ASCII punctuation character
    pub fn remove_punctuation(&self, text: &str) -> String {
        text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    pub fn remove_numbers(&self, text: &str) -> String {
        DIGITS.replace_all(text, "").into_owned()
    }

    /// Collapse whitespace runs to a single space and trim the ends
    pub fn remove_whitespace(&self, text: &str) -> String {
        WHITESPACE.replace_all(text, " ").trim().to_string()
    }

    /// Drop stopwords. Output is re-joined with single spaces, so original
    /// spacing around punctuation is not preserved.
    pub fn remove_stopwords(&self, text: &str) -> String {
        self.tokenizer
            .words(text)
            .into_iter()
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn stem_text(&self, text: &str) -> String {
        self.tokenizer
            .words(text)
            .into_iter()
            .map(|w| self.stemmer.stem(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn lemmatize_text(&self, text: &str) -> String {
        self.tokenizer
            .words(text)
            .into_iter()
            .map(|w| self.lemmatizer.lemmatize(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn tokenize_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenizer.sentences(text)
    }

    pub fn tokenize_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenizer.words(text)
    }

    /// Split into sentences, optionally cleaning each with the default config
    pub fn text_to_sentences(&self, text: &str, clean: bool) -> Vec<String> {
        let sentences = self.tokenize_sentences(text);
        if !clean {
            return sentences.into_iter().map(str::to_string).collect();
        }
        let config = CleanConfig::default();
        sentences
            .into_iter()
            .map(|s| self.clean_text(s, &config))
            .collect()
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// Apply the enabled cleaning steps.
    ///
    /// Order is fixed: case, html, urls, punctuation, numbers, stopwords,
    /// lemmatize (or stem), then a final whitespace collapse.
    pub fn clean_text(&self, text: &str, config: &CleanConfig) -> String {
        let mut text = text.to_string();

        if config.case {
            text = self.normalize_case(&text);
        }
        if config.html {
            text = self.remove_html_tags(&text);
        }
        if config.urls {
            text = self.remove_urls(&text);
        }
        if config.punctuation {
            text = self.remove_punctuation(&text);
        }
        if config.numbers {
            text = self.remove_numbers(&text);
        }
        if config.stopwords {
            text = self.remove_stopwords(&text);
        }
        if config.lemmatize {
            text = self.lemmatize_text(&text);
        } else if config.stem {
            text = self.stem_text(&text);
        }

        self.remove_whitespace(&text)
    }

    // ------------------------------------------------------------------
    // Keywords & statistics
    // ------------------------------------------------------------------

    /// Most frequent content words, most frequent first
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        self.keyword_counts(text, top_n)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Like [`TextCleaner::extract_keywords`] but keeps the counts.
    ///
    /// Text is lowercased, stopwords, punctuation tokens and single-character
    /// tokens are dropped. Equal counts keep first-seen order.
    pub fn keyword_counts(&self, text: &str, top_n: usize) -> Vec<(String, usize)> {
        let lowered = self.normalize_case(text);
        let words = self
            .tokenizer
            .words(&lowered)
            .into_iter()
            .filter(|w| !self.stopwords.is_stopword(w))
            .filter(|w| !is_punctuation_token(w) && w.chars().count() > 1);

        rank_by_frequency(words, top_n)
    }

    /// Percentage share of each keyword among the stopword-filtered tokens.
    ///
    /// When `keywords` is `None` or empty the top `top_n` keywords are used.
    /// Entries follow keyword order (given order, or most frequent first).
    /// Returns 0 for every keyword when the text has no tokens.
    pub fn calculate_keyword_density(
        &self,
        text: &str,
        keywords: Option<&[&str]>,
        top_n: usize,
    ) -> Vec<(String, f64)> {
        let processed = self.remove_stopwords(&self.normalize_case(text));
        let words = self.tokenizer.words(&processed);
        let total = words.len();

        let keywords: Vec<String> = match keywords {
            Some(list) if !list.is_empty() => list.iter().map(|k| k.to_string()).collect(),
            _ => self.extract_keywords(text, top_n),
        };

        keywords
            .into_iter()
            .map(|keyword| {
                let needle = keyword.to_lowercase();
                let density = if total > 0 {
                    let count = words.iter().filter(|w| **w == needle).count();
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                (keyword, density)
            })
            .collect()
    }

    /// Sentence and word counts plus sentence-length distribution
    pub fn get_text_statistics(&self, text: &str) -> TextStatistics {
        let sentences = self.tokenize_sentences(text);
        let words = self.tokenize_words(text);

        let num_meaningful_words = words
            .iter()
            .filter(|w| !self.stopwords.is_stopword(w) && !is_punctuation_token(w))
            .count();

        let lengths: Vec<usize> = sentences
            .iter()
            .map(|s| self.tokenize_words(s).len())
            .collect();

        let mut stats = TextStatistics {
            num_sentences: sentences.len(),
            num_words: words.len(),
            num_meaningful_words,
            ..TextStatistics::default()
        };

        if lengths.is_empty() {
            return stats;
        }

        let n = lengths.len() as f64;
        let mean = lengths.iter().sum::<usize>() as f64 / n;
        let variance = lengths
            .iter()
            .map(|&l| {
                let d = l as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        stats.avg_sentence_length = mean;
        stats.max_sentence_length = lengths.iter().copied().max().unwrap_or(0);
        stats.min_sentence_length = lengths.iter().copied().min().unwrap_or(0);
        stats.std_sentence_length = variance.sqrt();
        stats
    }
}

/// Count words and return the `top_n` most frequent.
///
/// Ties keep the order in which words were first seen.
pub(crate) fn rank_by_frequency<'a, I>(words: I, top_n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for word in words {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TextCleaner {
        TextCleaner::new("english")
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let c = TextCleaner::new("klingon");
        assert_eq!(c.language(), Language::English);
        assert_eq!(c.fallback().map(|f| f.requested.as_str()), Some("klingon"));
        assert!(c.stopwords().is_stopword("the"));

        assert!(cleaner().fallback().is_none());
        assert!(TextCleaner::new("de").fallback().is_none());
    }

    #[test]
    fn test_single_steps() {
        let c = cleaner();
        assert_eq!(c.normalize_case("HeLLo"), "hello");
        assert_eq!(c.remove_html_tags("<p>Hi <b>there</b></p>"), "Hi there");
        assert_eq!(
            c.remove_urls("see https://example.com/x and www.test.org now"),
            "see  and  now"
        );
        assert_eq!(c.remove_punctuation("a, b! (c)"), "a b c");
        assert_eq!(c.remove_numbers("up to 85% in 2024"), "up to % in ");
        assert_eq!(c.remove_whitespace("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_remove_whitespace_has_no_double_spaces() {
        let c = cleaner();
        for text in ["", "   ", "a  b", "\n\tx\u{a0} y \r\n", " lead", "trail "] {
            let out = c.remove_whitespace(text);
            assert!(!out.contains("  "), "{out:?}");
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn test_remove_stopwords() {
        let c = cleaner();
        assert_eq!(
            c.remove_stopwords("The cat is on the mat."),
            "cat mat ."
        );
    }

    #[test]
    fn test_clean_text_defaults() {
        let c = cleaner();
        let out = c.clean_text(
            "<p>The 3 Doctors visited https://x.io today!</p>",
            &CleanConfig::default(),
        );
        assert_eq!(out, "doctors visited today");
    }

    #[test]
    fn test_clean_text_lemmatize_wins_over_stem() {
        let c = cleaner();
        let config = CleanConfig::default().with_lemmatize(true).with_stem(true);
        assert_eq!(c.clean_text("Great improvements", &config), "great improve");

        let stem_only = CleanConfig::default().with_stem(true);
        assert_eq!(c.clean_text("Great improvements", &stem_only), "great improv");
    }

    #[test]
    fn test_clean_text_none_only_collapses_whitespace() {
        let c = cleaner();
        assert_eq!(
            c.clean_text("  Keep   <b>It</b>, 42! ", &CleanConfig::none()),
            "Keep <b>It</b>, 42!"
        );
    }

    #[test]
    fn test_clean_text_idempotent_with_lemmatize() {
        let c = cleaner();
        let config = CleanConfig::default().with_lemmatize(true);
        let samples = [
            "AI technologies are revolutionizing medical diagnostics.",
            "Studies have shown great improvements in 2023, see www.example.com!",
            "<div>Children and their teachers discussed the approaches.</div>",
            "",
        ];
        for text in samples {
            let once = c.clean_text(text, &config);
            assert_eq!(c.clean_text(&once, &config), once, "{text}");
        }
    }

    #[test]
    fn test_extract_keywords_frequency_and_ties() {
        let c = cleaner();
        let keywords = c.extract_keywords(
            "Rust is fast. Rust is safe. Safety matters, and speed matters too. Rust!",
            3,
        );
        assert_eq!(keywords, vec!["rust", "matters", "fast"]);
    }

    #[test]
    fn test_extract_keywords_bounds() {
        let c = cleaner();
        let text = "A b c. The quick brown fox jumps over the lazy dog, twice: fox fox.";
        for n in 0..6 {
            let keywords = c.extract_keywords(text, n);
            assert!(keywords.len() <= n);
            let cleaned = c.remove_stopwords(&c.normalize_case(text));
            let tokens = c.tokenize_words(&cleaned);
            for k in &keywords {
                assert!(tokens.contains(&k.as_str()));
                assert!(k.chars().count() > 1);
            }
        }
        assert!(c.extract_keywords("", 10).is_empty());
    }

    #[test]
    fn test_keyword_counts() {
        let c = cleaner();
        let counts = c.keyword_counts("data data model", 5);
        assert_eq!(counts, vec![("data".to_string(), 2), ("model".to_string(), 1)]);
    }

    #[test]
    fn test_keyword_density() {
        let c = cleaner();
        let density = c.calculate_keyword_density("Rust rust code", Some(&["Rust", "go"][..]), 10);
        assert_eq!(density[0].0, "Rust");
        assert!((density[0].1 - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(density[1], ("go".to_string(), 0.0));
    }

    #[test]
    fn test_keyword_density_empty_text() {
        let c = cleaner();
        assert!(c.calculate_keyword_density("", None, 10).is_empty());
        let density = c.calculate_keyword_density("", Some(&["rust"][..]), 10);
        assert_eq!(density, vec![("rust".to_string(), 0.0)]);
    }

    #[test]
    fn test_keyword_density_derives_keywords() {
        let c = cleaner();
        let density = c.calculate_keyword_density("pear apple apple", None, 10);
        let order: Vec<&str> = density.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["apple", "pear"]);
        assert!(density[0].1 > density[1].1);
    }

    #[test]
    fn test_text_statistics() {
        let c = cleaner();
        let stats = c.get_text_statistics("The cat sat. Dogs bark loudly today!");

        assert_eq!(stats.num_sentences, 2);
        // 3 words + "." and 4 words + "!"
        assert_eq!(stats.num_words, 9);
        assert_eq!(stats.num_meaningful_words, 6);
        assert!((stats.avg_sentence_length - 4.5).abs() < 1e-9);
        assert_eq!(stats.max_sentence_length, 5);
        assert_eq!(stats.min_sentence_length, 4);
        assert!((stats.std_sentence_length - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_text_statistics_empty() {
        let stats = cleaner().get_text_statistics("");
        assert_eq!(stats.num_sentences, 0);
        assert_eq!(stats.num_words, 0);
        assert_eq!(stats.avg_sentence_length, 0.0);
        assert_eq!(stats.std_sentence_length, 0.0);
    }

    #[test]
    fn test_text_to_sentences() {
        let c = cleaner();
        let raw = c.text_to_sentences("Hello World. The END!", false);
        assert_eq!(raw, vec!["Hello World.", "The END!"]);

        let cleaned = c.text_to_sentences("Hello World. The END!", true);
        assert_eq!(cleaned, vec!["hello world", "end"]);
    }
}
