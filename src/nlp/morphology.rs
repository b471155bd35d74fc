//! Word reduction: Snowball stemming and rule-based lemmatization.
//!
//! Both reducers are pure `word -> word` functions built once per language
//! and shared read-only across calls.

use std::borrow::Cow;

use rust_stemmers::{Algorithm, Stemmer};

use super::language::Language;

/// Snowball stemmer for one language.
///
/// Languages without a Snowball algorithm pass words through unchanged.
pub struct WordStemmer {
    stemmer: Option<Stemmer>,
    algorithm: Option<Algorithm>,
}

impl Clone for WordStemmer {
    fn clone(&self) -> Self {
        // rust_stemmers::Stemmer is not Clone
        Self::from_algorithm(self.algorithm)
    }
}

impl std::fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl WordStemmer {
    pub fn new(language: Language) -> Self {
        Self::from_algorithm(language.stemmer_algorithm())
    }

    fn from_algorithm(algorithm: Option<Algorithm>) -> Self {
        Self {
            stemmer: algorithm.map(Stemmer::create),
            algorithm,
        }
    }

    /// Reduce a word to its stem
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word),
            None => Cow::Borrowed(word),
        }
    }
}

/// Dictionary-form reducer.
///
/// English gets a rule set covering regular plurals, third-person verb forms,
/// common irregular nouns and `-ment` nominalizations ("improvement" ->
/// "improve"). Rules are applied until the word stops changing, so
/// `lemmatize(lemmatize(w)) == lemmatize(w)`. Other languages are identity.
/// Only all-lowercase alphabetic words are touched.
#[derive(Debug, Clone, Copy)]
pub struct Lemmatizer {
    language: Language,
}

impl Lemmatizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.language != Language::English
            || !word.chars().all(|c| c.is_ascii_lowercase())
        {
            return Cow::Borrowed(word);
        }

        let mut current: Cow<'a, str> = Cow::Borrowed(word);
        // Every rule shortens or replaces the word, so this settles quickly.
        for _ in 0..4 {
            match reduce_english(&current) {
                Some(next) => current = Cow::Owned(next),
                None => break,
            }
        }
        current
    }
}

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("analyses", "analysis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
];

/// Words that look inflected but are already base forms
const KEEP: &[&str] = &[
    "always", "perhaps", "sometimes", "whereas", "besides", "news", "series", "species",
    "physics", "mathematics", "economics", "politics", "ethics", "statistics", "analytics",
    "yes", "thus", "lens", "bias", "gas", "canvas", "atlas", "does", "goes", "process",
];

/// `-ment` words whose remainder is not their base form
const MENT_KEEP: &[&str] = &[
    "environment",
    "instrument",
    "implement",
    "supplement",
    "complement",
    "compliment",
    "experiment",
    "sentiment",
    "department",
    "apartment",
    "parliament",
    "ornament",
    "garment",
    "torment",
];

fn reduce_english(word: &str) -> Option<String> {
    if let Some(&(_, base)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return Some(base.to_string());
    }
    if word.len() <= 3 || KEEP.contains(&word) {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ment") {
        if stem.len() >= 5 && !MENT_KEEP.contains(&word) {
            return Some(stem.to_string());
        }
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
        return None;
    }
    if word.ends_with("sses") {
        return Some(word[..word.len() - 2].to_string());
    }
    for suffix in ["xes", "ches", "shes", "zzes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    word.strip_suffix('s').map(str::to_string)
}
