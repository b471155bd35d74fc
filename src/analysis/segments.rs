//! Fixed-size topic segmentation
//!
//! Sentences are cut into equal-sized contiguous chunks, each labelled with
//! its own most frequent keywords. Once `max_segments` chunks exist the
//! remaining sentences are left out, so with an uneven split the tail of the
//! transcript is not covered.

use crate::nlp::cleaner::TextCleaner;
use crate::types::TopicSegment;

/// Chunk size for `sentence_count` sentences split into at most `max_segments`
pub fn segment_size(sentence_count: usize, max_segments: usize) -> usize {
    if max_segments == 0 {
        return 1;
    }
    (sentence_count / max_segments).max(1)
}

/// Partition `sentences` into at most `max_segments` contiguous segments
pub fn segment_sentences(
    cleaner: &TextCleaner,
    sentences: &[&str],
    max_segments: usize,
    keywords_per_segment: usize,
) -> Vec<TopicSegment> {
    if max_segments == 0 || sentences.is_empty() {
        return Vec::new();
    }

    let size = segment_size(sentences.len(), max_segments);
    let last = sentences.len() - 1;

    sentences
        .chunks(size)
        .take(max_segments)
        .enumerate()
        .map(|(n, chunk)| {
            let start_idx = n * size;
            let end_idx = (start_idx + size - 1).min(last);
            let text = chunk.join(" ");
            TopicSegment {
                start_idx,
                end_idx,
                start_sentence: sentences[start_idx].to_string(),
                end_sentence: sentences[end_idx].to_string(),
                keywords: cleaner.extract_keywords(&text, keywords_per_segment),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_size() {
        assert_eq!(segment_size(10, 3), 3);
        assert_eq!(segment_size(2, 5), 1);
        assert_eq!(segment_size(0, 5), 1);
        assert_eq!(segment_size(4, 0), 1);
    }

    #[test]
    fn test_even_partition() {
        let cleaner = TextCleaner::default();
        let sentences = [
            "Rockets launch.",
            "Rockets fly high.",
            "Gardens grow slowly.",
            "Gardens need water.",
        ];
        let segments = segment_sentences(&cleaner, &sentences, 2, 5);

        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].start_idx, segments[0].end_idx), (0, 1));
        assert_eq!((segments[1].start_idx, segments[1].end_idx), (2, 3));
        assert_eq!(segments[0].keywords[0], "rockets");
        assert_eq!(segments[1].keywords[0], "gardens");
        assert_eq!(segments[1].start_sentence, "Gardens grow slowly.");
        assert_eq!(segments[1].end_sentence, "Gardens need water.");
    }

    #[test]
    fn test_trailing_sentences_dropped() {
        let cleaner = TextCleaner::default();
        let sentences = ["One a.", "Two b.", "Three c.", "Four d.", "Five e."];
        let segments = segment_sentences(&cleaner, &sentences, 2, 5);

        // chunk size 2: [0,1], [2,3]; sentence 4 is not covered
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].end_idx, 3);
    }

    #[test]
    fn test_fewer_sentences_than_segments() {
        let cleaner = TextCleaner::default();
        let sentences = ["Alpha beta.", "Gamma delta."];
        let segments = segment_sentences(&cleaner, &sentences, 5, 5);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].start_idx, 1);
        assert_eq!(segments[1].end_idx, 1);
    }

    #[test]
    fn test_ranges_are_monotonic_and_disjoint() {
        let cleaner = TextCleaner::default();
        let owned: Vec<String> = (0..17).map(|i| format!("Sentence number {i}.")).collect();
        let sentences: Vec<&str> = owned.iter().map(String::as_str).collect();

        for max in 1..8 {
            let segments = segment_sentences(&cleaner, &sentences, max, 5);
            assert!(segments.len() <= max);
            for pair in segments.windows(2) {
                assert!(pair[0].end_idx < pair[1].start_idx);
                assert_eq!(pair[0].end_idx + 1, pair[1].start_idx);
            }
            for seg in &segments {
                assert!(seg.start_idx <= seg.end_idx);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let cleaner = TextCleaner::default();
        assert!(segment_sentences(&cleaner, &[], 3, 5).is_empty());
        assert!(segment_sentences(&cleaner, &["Hi there."], 0, 5).is_empty());
    }
}
