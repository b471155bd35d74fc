//! Language resolution
//!
//! Maps a requested language name or ISO code onto a supported [`Language`].
//! Unsupported requests resolve to English and leave a [`LanguageFallback`]
//! behind so callers can detect the substitution.

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

/// Languages with a stopword list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Hungarian,
    Turkish,
    Polish,
    Arabic,
    Chinese,
    Japanese,
}

impl Language {
    /// Parse a language name ("english") or ISO 639-1 code ("en")
    pub fn parse(value: &str) -> Option<Self> {
        let lang = match value.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            "sv" | "swedish" => Language::Swedish,
            "no" | "norwegian" => Language::Norwegian,
            "da" | "danish" => Language::Danish,
            "fi" | "finnish" => Language::Finnish,
            "hu" | "hungarian" => Language::Hungarian,
            "tr" | "turkish" => Language::Turkish,
            "pl" | "polish" => Language::Polish,
            "ar" | "arabic" => Language::Arabic,
            "zh" | "chinese" => Language::Chinese,
            "ja" | "japanese" => Language::Japanese,
            _ => return None,
        };
        Some(lang)
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Russian => "ru",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
            Language::Danish => "da",
            Language::Finnish => "fi",
            Language::Hungarian => "hu",
            Language::Turkish => "tr",
            Language::Polish => "pl",
            Language::Arabic => "ar",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    /// Snowball algorithm for this language, if one exists
    pub fn stemmer_algorithm(&self) -> Option<Algorithm> {
        match self {
            Language::English => Some(Algorithm::English),
            Language::German => Some(Algorithm::German),
            Language::French => Some(Algorithm::French),
            Language::Spanish => Some(Algorithm::Spanish),
            Language::Italian => Some(Algorithm::Italian),
            Language::Portuguese => Some(Algorithm::Portuguese),
            Language::Dutch => Some(Algorithm::Dutch),
            Language::Russian => Some(Algorithm::Russian),
            Language::Swedish => Some(Algorithm::Swedish),
            Language::Norwegian => Some(Algorithm::Norwegian),
            Language::Danish => Some(Algorithm::Danish),
            Language::Finnish => Some(Algorithm::Finnish),
            Language::Hungarian => Some(Algorithm::Hungarian),
            Language::Turkish => Some(Algorithm::Turkish),
            Language::Arabic => Some(Algorithm::Arabic),
            Language::Polish | Language::Chinese | Language::Japanese => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Record of a language request that could not be honoured
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageFallback {
    /// What the caller asked for
    pub requested: String,
    /// What is used instead
    pub resolved: Language,
}

/// Resolve a requested language, falling back to English
pub fn resolve(requested: &str) -> (Language, Option<LanguageFallback>) {
    match Language::parse(requested) {
        Some(lang) => (lang, None),
        None => {
            tracing::warn!(
                requested,
                "stopwords not available for language, using English"
            );
            (
                Language::English,
                Some(LanguageFallback {
                    requested: requested.to_string(),
                    resolved: Language::English,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("EN"), Some(Language::English));
        assert_eq!(Language::parse(" German "), Some(Language::German));
        assert_eq!(Language::parse("ja"), Some(Language::Japanese));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn test_resolve_records_fallback() {
        let (lang, fallback) = resolve("klingon");
        assert_eq!(lang, Language::English);
        let fallback = fallback.unwrap();
        assert_eq!(fallback.requested, "klingon");
        assert_eq!(fallback.resolved, Language::English);

        let (lang, fallback) = resolve("french");
        assert_eq!(lang, Language::French);
        assert!(fallback.is_none());
    }

    #[test]
    fn test_stemmer_availability() {
        assert!(Language::English.stemmer_algorithm().is_some());
        assert!(Language::Chinese.stemmer_algorithm().is_none());
    }
}
