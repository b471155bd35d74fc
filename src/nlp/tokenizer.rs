//! Sentence and word tokenization
//!
//! Built on Unicode text segmentation (UAX #29). Tokens borrow from the input
//! so callers decide when to allocate.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and word tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into trimmed sentences, in document order.
    ///
    /// Line breaks inside a sentence do not end it: transcripts are often
    /// hard-wrapped, so only terminal punctuation separates sentences. A
    /// fragment ending in a known abbreviation ("Dr.", "e.g.") or an initial
    /// ("J.") is joined with the one after it. Fragments without any
    /// alphanumeric character are dropped.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        // CR and LF are single bytes, so byte offsets stay valid for `text`.
        let unwrapped: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        // Start of a fragment still waiting for its continuation
        let mut pending: Option<usize> = None;
        let mut spans: Vec<(usize, usize)> = Vec::new();
        for (start, segment) in unwrapped.split_sentence_bound_indices() {
            let from = pending.take().unwrap_or(start);
            let end = start + segment.len();
            if ends_with_abbreviation(&text[from..end]) {
                pending = Some(from);
            } else {
                spans.push((from, end));
            }
        }
        if let Some(from) = pending {
            spans.push((from, text.len()));
        }

        spans
            .into_iter()
            .map(|(start, end)| text[start..end].trim())
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .collect()
    }

    /// Split text into word and punctuation tokens, dropping whitespace.
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|t| !t.chars().all(char::is_whitespace))
            .collect()
    }
}

/// Abbreviations that end with a period but rarely end a sentence
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e", "approx",
    "dept", "fig",
];

/// True when `fragment` ends in "Dr." or a single-letter initial like "J."
fn ends_with_abbreviation(fragment: &str) -> bool {
    let Some(last) = fragment.split_whitespace().last() else {
        return false;
    };
    let Some(word) = last.strip_suffix('.') else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase();
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// True for tokens made only of ASCII punctuation ("," or "...")
pub fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_basic() {
        let tok = Tokenizer::new();
        let sentences =
            tok.sentences("AI improves healthcare. AI improves diagnostics. Cats are unrelated.");

        assert_eq!(
            sentences,
            vec![
                "AI improves healthcare.",
                "AI improves diagnostics.",
                "Cats are unrelated."
            ]
        );
    }

    #[test]
    fn test_sentences_ignore_line_wraps() {
        let tok = Tokenizer::new();
        let sentences = tok.sentences("The future looks promising with\n    potential to help. Done!");

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("The future"));
        assert!(sentences[0].ends_with("help."));
        assert_eq!(sentences[1], "Done!");
    }

    #[test]
    fn test_sentences_keep_abbreviations() {
        let tok = Tokenizer::new();
        let sentences = tok.sentences("Dr. Smith treats patients well. Mr. Jones agrees.");

        assert_eq!(
            sentences,
            vec!["Dr. Smith treats patients well.", "Mr. Jones agrees."]
        );
    }

    #[test]
    fn test_sentences_keep_initials_and_lists() {
        let tok = Tokenizer::new();
        let sentences = tok.sentences(
            "We met J. R. Tolkien fans. Bring fruit, e.g. Apples and pears. Prof. Lee left",
        );

        assert_eq!(
            sentences,
            vec![
                "We met J. R. Tolkien fans.",
                "Bring fruit, e.g. Apples and pears.",
                "Prof. Lee left",
            ]
        );
    }

    #[test]
    fn test_trailing_abbreviation_kept() {
        let tok = Tokenizer::new();
        assert_eq!(tok.sentences("Ask Dr."), vec!["Ask Dr."]);
        assert!(ends_with_abbreviation("see (Dr."));
        assert!(!ends_with_abbreviation("The end."));
        assert!(!ends_with_abbreviation("I said a."));
    }

    #[test]
    fn test_sentences_empty() {
        let tok = Tokenizer::new();
        assert!(tok.sentences("").is_empty());
        assert!(tok.sentences("   \n  ").is_empty());
        assert!(tok.sentences("...").is_empty());
    }

    #[test]
    fn test_words_split_punctuation() {
        let tok = Tokenizer::new();
        let words = tok.words("Hello, world! It's fine.");

        assert_eq!(words, vec!["Hello", ",", "world", "!", "It's", "fine", "."]);
    }

    #[test]
    fn test_punctuation_token() {
        assert!(is_punctuation_token(","));
        assert!(is_punctuation_token("..."));
        assert!(!is_punctuation_token("a."));
        assert!(!is_punctuation_token(""));
    }
}
