//! Tag-cloud weighting

use crate::types::TagCloudEntry;

const MIN_WEIGHT: f64 = 1.0;
const MAX_WEIGHT: f64 = 10.0;
const FLAT_WEIGHT: f64 = 5.0;

/// Map word counts (most frequent first) onto weights in `[1, 10]`.
///
/// The range is taken from the counts given, so callers should pass only the
/// words they intend to show. Equal counts all get weight 5.
pub fn weigh(counts: &[(String, usize)]) -> Vec<TagCloudEntry> {
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1);
    let min = counts.iter().map(|(_, c)| *c).min().unwrap_or(1);

    counts
        .iter()
        .map(|(word, count)| {
            let weight = if max > min {
                MIN_WEIGHT + (MAX_WEIGHT - MIN_WEIGHT) * (*count - min) as f64 / (max - min) as f64
            } else {
                FLAT_WEIGHT
            };
            TagCloudEntry {
                text: word.clone(),
                weight,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(items: &[(&str, usize)]) -> Vec<(String, usize)> {
        items.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_linear_weights() {
        let cloud = weigh(&counts(&[("ai", 5), ("data", 3), ("care", 1)]));

        assert_eq!(cloud[0].text, "ai");
        assert!((cloud[0].weight - 10.0).abs() < 1e-10);
        assert!((cloud[1].weight - 5.5).abs() < 1e-10);
        assert!((cloud[2].weight - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_equal_counts_get_five() {
        let cloud = weigh(&counts(&[("a1", 2), ("b2", 2), ("c3", 2)]));
        assert!(cloud.iter().all(|t| t.weight == 5.0));
    }

    #[test]
    fn test_weights_in_range() {
        let cloud = weigh(&counts(&[("x", 40), ("y", 17), ("z", 9), ("w", 8), ("v", 2)]));
        assert!(cloud.iter().all(|t| (1.0..=10.0).contains(&t.weight)));
    }

    #[test]
    fn test_empty() {
        assert!(weigh(&[]).is_empty());
    }
}
