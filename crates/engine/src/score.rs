//! Relevance scoring.
//!
//! Field weights fall from headline through occupation and description to
//! employer, at two levels: exact full-query phrase matches and per-token
//! partial matches.

use devjobs_search::{fuzzy_contains, normalize};

use crate::model::JobPosting;

/// Full-phrase weights: headline, occupation, description, employer.
const PHRASE_WEIGHTS: [u32; 4] = [10, 8, 6, 4];

/// Per-token weights, same field order.
const TOKEN_WEIGHTS: [u32; 4] = [5, 3, 2, 1];

/// Bonus when the resolved location matches the ad's municipality.
const LOCATION_BONUS: u32 = 3;

/// Score an ad against a query.
///
/// `query` must already be normalized and non-empty. `location` is the
/// resolved location name, when one exists.
pub fn score_posting(posting: &JobPosting, query: &str, location: Option<&str>) -> u32 {
    let fields = [
        normalize(&posting.headline),
        normalize(posting.occupation_label().unwrap_or("")),
        normalize(posting.description_text().unwrap_or("")),
        normalize(posting.employer_name().unwrap_or("")),
    ];

    let mut score = 0;

    for (field, weight) in fields.iter().zip(PHRASE_WEIGHTS) {
        if !field.is_empty() && field.contains(query) {
            score += weight;
        }
    }

    for token in query.split_whitespace() {
        if token.chars().count() <= 1 {
            continue;
        }
        for (field, weight) in fields.iter().zip(TOKEN_WEIGHTS) {
            if !field.is_empty() && field.contains(token) {
                score += weight;
            }
        }
    }

    if let (Some(location), Some(municipality)) = (location, posting.municipality()) {
        if fuzzy_contains(municipality, location) {
            score += LOCATION_BONUS;
        }
    }

    score
}
