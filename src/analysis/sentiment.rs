//! Lexicon-based sentiment counting
//!
//! Counts how many tokens fall into a positive and a negative word list. A
//! hit directly preceded (within a small window) by a negator such as "not"
//! is skipped, so "not a bad result" does not count "bad".

use rustc_hash::FxHashSet;

use crate::types::SentimentSummary;

pub const POSITIVE_TERMS: [&str; 15] = [
    "good",
    "great",
    "excellent",
    "beneficial",
    "positive",
    "advantage",
    "helpful",
    "improve",
    "better",
    "best",
    "success",
    "successful",
    "effective",
    "efficient",
    "recommended",
];

pub const NEGATIVE_TERMS: [&str; 15] = [
    "bad",
    "poor",
    "terrible",
    "negative",
    "disadvantage",
    "harmful",
    "worse",
    "worst",
    "fail",
    "failure",
    "ineffective",
    "inefficient",
    "problem",
    "difficult",
    "challenging",
];

/// Negators as they look after punctuation removal ("isn't" -> "isnt")
const NEGATORS: &[&str] = &[
    "not", "no", "never", "without", "nor", "neither", "cannot", "cant", "dont", "doesnt",
    "didnt", "isnt", "arent", "wasnt", "werent", "wont", "wouldnt", "shouldnt", "couldnt",
    "hasnt", "havent", "hadnt",
];

/// Positive and negative word lists plus negators
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: FxHashSet<String>,
    negative: FxHashSet<String>,
    negators: FxHashSet<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::from_lists(&POSITIVE_TERMS, &NEGATIVE_TERMS)
    }
}

impl SentimentLexicon {
    /// Build a lexicon from custom lists (the default negators are kept)
    pub fn from_lists(positive: &[&str], negative: &[&str]) -> Self {
        let to_set =
            |words: &[&str]| words.iter().map(|w| w.to_lowercase()).collect::<FxHashSet<_>>();
        Self {
            positive: to_set(positive),
            negative: to_set(negative),
            negators: to_set(NEGATORS),
        }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    /// Count lexicon hits in lowercase tokens.
    ///
    /// A hit is skipped when one of the `negation_window` tokens before it is
    /// a negator. The ratio divides by at least 1.
    pub fn count<S: AsRef<str>>(&self, tokens: &[S], negation_window: usize) -> SentimentSummary {
        let mut positive = 0;
        let mut negative = 0;

        for (i, token) in tokens.iter().enumerate() {
            let word = token.as_ref();
            let is_pos = self.is_positive(word);
            let is_neg = self.is_negative(word);
            if !is_pos && !is_neg {
                continue;
            }

            let negated = (1..=negation_window)
                .any(|k| i >= k && self.is_negator(tokens[i - k].as_ref()));
            if negated {
                continue;
            }

            if is_pos {
                positive += 1;
            }
            if is_neg {
                negative += 1;
            }
        }

        SentimentSummary {
            positive_keywords: positive,
            negative_keywords: negative,
            sentiment_ratio: positive as f64 / negative.max(1) as f64,
            total_analyzed_keywords: positive + negative,
        }
    }
}
