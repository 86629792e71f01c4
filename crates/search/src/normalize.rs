//! Locale-tolerant text normalization.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison.
///
/// Lower-cases, decomposes to NFD and strips combining marks (so "Göteborg"
/// and "goteborg" compare equal), replaces anything outside
/// letters/digits/whitespace/`#`/`.`/`-` with a space, collapses whitespace
/// runs and trims. Keeps tokens like "c#", "asp.net" and "full-stack" intact.
///
/// # Arguments
/// * `text` - Raw input text
///
/// # Returns
/// The normalized string (empty input yields an empty string)
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || matches!(c, '#' | '.' | '-') {
                c
            } else {
                ' '
            }
        })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
