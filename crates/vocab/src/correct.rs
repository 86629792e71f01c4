//! Query typo correction against fixed vocabularies.

use devjobs_search::{levenshtein_distance, normalize};

use crate::terms::combined_terms;

/// Maximum edit distance when correcting toward the combined vocabulary.
const KEYWORD_CORRECTION_DISTANCE: usize = 2;

/// Correct each query token toward the closest vocabulary entry.
///
/// Tokens with no entry within `max_distance` edits pass through
/// unchanged. Ties are broken by smallest distance, then by vocabulary
/// enumeration order.
///
/// # Arguments
/// * `query` - Free query text
/// * `vocabulary` - Canonical entries to correct toward
/// * `max_distance` - Maximum accepted edit distance
///
/// # Example
/// ```
/// use devjobs_vocab::correct_query;
///
/// let vocab = ["react", "java"];
/// assert_eq!(correct_query("reakt developer", &vocab, 2), "react developer");
/// ```
pub fn correct_query(query: &str, vocabulary: &[&str], max_distance: usize) -> String {
    normalize(query)
        .split_whitespace()
        .map(|token| {
            let mut best: Option<(&str, usize)> = None;
            for &entry in vocabulary {
                let dist = levenshtein_distance(token, entry);
                if dist <= max_distance && best.map_or(true, |(_, d)| dist < d) {
                    best = Some((entry, dist));
                }
            }
            best.map_or_else(|| token.to_string(), |(entry, _)| entry.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reduce free text to tokens meaningful to the upstream search API.
///
/// Runs typo correction against the combined tech/profession/city
/// vocabulary, then keeps only tokens that are vocabulary members or
/// substring-related to one.
///
/// # Example
/// ```
/// use devjobs_vocab::extract_tech_keywords;
///
/// assert_eq!(extract_tech_keywords("senior reakt person"), "react");
/// ```
pub fn extract_tech_keywords(query: &str) -> String {
    let vocabulary = combined_terms();
    let corrected = correct_query(query, vocabulary, KEYWORD_CORRECTION_DISTANCE);

    corrected
        .split_whitespace()
        .filter(|token| {
            vocabulary
                .iter()
                .any(|entry| entry == token || entry.contains(token) || token.contains(entry))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_exact_member_kept() {
        let vocab = ["react", "java"];
        assert_eq!(correct_query("react", &vocab, 2), "react");
    }

    #[test]
    fn test_correct_single_typo() {
        let vocab = ["react", "java"];
        assert_eq!(correct_query("reakt", &vocab, 2), "react");
    }

    #[test]
    fn test_correct_beyond_distance_passes_through() {
        let vocab = ["react"];
        assert_eq!(correct_query("kubernetes", &vocab, 2), "kubernetes");
    }

    #[test]
    fn test_correct_tie_breaks_by_enumeration_order() {
        // "jav" is distance 1 from both; first entry wins
        let vocab = ["java", "jam"];
        assert_eq!(correct_query("jav", &vocab, 2), "java");
    }

    #[test]
    fn test_correct_normalizes_input() {
        let vocab = ["goteborg"];
        assert_eq!(correct_query("Göteborg", &vocab, 1), "goteborg");
    }

    #[test]
    fn test_extract_keeps_vocabulary_tokens() {
        assert_eq!(extract_tech_keywords("react utvecklare"), "react utvecklare");
    }

    #[test]
    fn test_extract_drops_noise_words() {
        assert_eq!(extract_tech_keywords("senior react person sokes"), "react");
    }

    #[test]
    fn test_extract_corrects_typos() {
        assert_eq!(extract_tech_keywords("reakt"), "react");
    }

    #[test]
    fn test_extract_empty_query() {
        assert_eq!(extract_tech_keywords(""), "");
    }
}
