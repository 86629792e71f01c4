//! Fuzzy matching algorithms.
//!
//! Matching is three-tiered: substring containment, then Levenshtein edit
//! distance with a length-scaled tolerance, then a shared-character ratio
//! for longer tokens. The tiers tolerate missing letters, transpositions
//! and partial-word typing without over-matching short tokens.

use crate::normalize;

/// Similarity floor for the shared-character fallback tier.
const CHAR_OVERLAP_FLOOR: f64 = 0.65;

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit tolerance for a token of the given character length.
///
/// Monotonically non-decreasing: very short tokens must match exactly,
/// typical words tolerate one or two edits, long tokens scale as len/3.
fn edit_tolerance(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=4 => 1,
        5..=7 => 2,
        _ => len / 3,
    }
}

/// Ratio of characters of the shorter string found in the longer one,
/// against the longer string's length. Each character is consumed once.
fn shared_char_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let mut pool: Vec<char> = long.chars().collect();
    let long_len = pool.len();
    if long_len == 0 {
        return 1.0;
    }

    let mut shared = 0usize;
    for c in short.chars() {
        if let Some(pos) = pool.iter().position(|&p| p == c) {
            pool.swap_remove(pos);
            shared += 1;
        }
    }

    shared as f64 / long_len as f64
}

/// Check whether a single query token fuzzily matches a single word.
fn token_matches_word(token: &str, word: &str) -> bool {
    if word.contains(token) || token.contains(word) {
        return true;
    }

    let token_len = token.chars().count();
    if levenshtein_distance(token, word) <= edit_tolerance(token_len) {
        return true;
    }

    // Character-overlap fallback only for longer tokens, where a ratio is
    // meaningful and short-token false positives cannot occur.
    token_len > 3
        && word.chars().count() > 3
        && shared_char_ratio(token, word) >= CHAR_OVERLAP_FLOOR
}

/// Typo-tolerant containment check.
///
/// Both sides are normalized first. An empty needle always matches, an
/// exact substring short-circuits, and otherwise every needle token must
/// fuzzily match some word of the haystack.
///
/// # Arguments
/// * `haystack` - Text to search in
/// * `needle` - Query text
///
/// # Returns
/// true if the haystack fuzzily contains the needle
pub fn fuzzy_contains(haystack: &str, needle: &str) -> bool {
    let needle = normalize(needle);
    if needle.is_empty() {
        return true;
    }

    let haystack = normalize(haystack);
    if haystack.contains(&needle) {
        return true;
    }

    let words: Vec<&str> = haystack.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }

    needle
        .split(' ')
        .all(|token| words.iter().any(|word| token_matches_word(token, word)))
}

/// Check an ordered list of candidate fields against a query.
///
/// # Returns
/// true if `fuzzy_contains` holds for at least one field
pub fn any_field_matches(fields: &[&str], query: &str) -> bool {
    fields.iter().any(|field| fuzzy_contains(field, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_levenshtein_insert() {
        assert_eq!(levenshtein_distance("helo", "hello"), 1);
    }

    #[test]
    fn test_levenshtein_delete() {
        assert_eq!(levenshtein_distance("hello", "helo"), 1);
    }

    #[test]
    fn test_levenshtein_symmetry() {
        assert_eq!(
            levenshtein_distance("react", "angular"),
            levenshtein_distance("angular", "react")
        );
    }

    #[test]
    fn test_tolerance_monotone() {
        let mut prev = 0;
        for len in 0..40 {
            let t = edit_tolerance(len);
            assert!(t >= prev, "tolerance shrank at len {len}");
            prev = t;
        }
    }

    #[test]
    fn test_empty_needle_matches() {
        assert!(fuzzy_contains("React Developer Stockholm", ""));
        assert!(fuzzy_contains("", ""));
    }

    #[test]
    fn test_exact_substring() {
        assert!(fuzzy_contains("React Developer Stockholm", "react"));
        assert!(fuzzy_contains("Senior C#-utvecklare", "c#"));
    }

    #[test]
    fn test_one_substitution() {
        assert!(fuzzy_contains("React Developer Stockholm", "reakt"));
    }

    #[test]
    fn test_unrelated_token_rejected() {
        assert!(!fuzzy_contains("Java Developer", "react"));
    }

    #[test]
    fn test_all_tokens_required() {
        assert!(fuzzy_contains("React Developer Stockholm", "react stockholm"));
        assert!(!fuzzy_contains("React Developer Stockholm", "react malmo"));
    }

    #[test]
    fn test_diacritics_fold() {
        assert!(fuzzy_contains("Systemutvecklare Göteborg", "goteborg"));
    }

    #[test]
    fn test_partial_word_typing() {
        // "utveckl" is a prefix of "utvecklare"
        assert!(fuzzy_contains("Senior utvecklare", "utveckl"));
    }

    #[test]
    fn test_empty_haystack_rejects_nonempty_needle() {
        assert!(!fuzzy_contains("", "react"));
        assert!(!fuzzy_contains("   ", "react"));
    }

    #[test]
    fn test_any_field_matches() {
        let fields = ["Java Backend Engineer", "Spotify", "Stockholm"];
        assert!(any_field_matches(&fields, "spotify"));
        assert!(any_field_matches(&fields, "java"));
        assert!(!any_field_matches(&fields, "react"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn levenshtein_is_symmetric(a in ".{0,12}", b in ".{0,12}") {
                prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
            }

            #[test]
            fn levenshtein_identity(a in ".{0,16}") {
                prop_assert_eq!(levenshtein_distance(&a, &a), 0);
            }

            #[test]
            fn normalize_is_idempotent(s in ".{0,32}") {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn empty_needle_always_matches(s in ".{0,32}") {
                prop_assert!(fuzzy_contains(&s, ""));
            }
        }
    }
}
