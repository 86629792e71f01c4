//! The filter pipeline and ranking pass.

use devjobs_geo::{haversine_distance, Coordinate};
use devjobs_search::{any_field_matches, fuzzy_contains, levenshtein_distance, normalize};
use devjobs_vocab::{city_coordinate, combined_terms, infer_city_from_query, nearest_city};

use crate::contract::passes_contract_filter;
use crate::model::{EngineMode, FilterSpec, JobPosting, RankOptions, SearchHit};
use crate::score::score_posting;

/// Abbreviation families tried as query rewrites during text matching.
const ABBREVIATION_FAMILIES: &[&[&str]] = &[
    &["c#", "csharp", "c sharp"],
    &["net", "dotnet", ".net", "asp.net"],
    &["swift", "swiftui"],
    &["js", "javascript"],
    &["ts", "typescript"],
];

/// Maximum edit distance when relating a stray token to the vocabulary.
const FALLBACK_CORRECTION_DISTANCE: usize = 2;

/// Resolved geography for one ranking pass.
struct ResolvedGeo {
    /// Normalized location name from the explicit field or query inference
    name: Option<String>,
    /// Center coordinate for radius decisions
    center: Option<Coordinate>,
    /// Name used for municipality fallback matching on coordinate-less ads
    fallback_name: Option<String>,
}

fn resolve_geo(spec: &FilterSpec, user: Option<Coordinate>, options: &RankOptions) -> ResolvedGeo {
    let explicit = spec
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(normalize);

    let name = explicit.or_else(|| {
        if options.infer_city_from_query {
            infer_city_from_query(&spec.query).map(str::to_string)
        } else {
            None
        }
    });

    let gazetteer_center = name.as_deref().and_then(city_coordinate);

    // A geolocated searcher with a radius but no named location still gets
    // a center, and the closest gazetteer city supplies the text to match
    // coordinate-less ads against.
    let center = gazetteer_center.or(if spec.radius_km > 0.0 { user } else { None });

    let fallback_name = name.clone().or_else(|| {
        if gazetteer_center.is_none() && spec.radius_km > 0.0 {
            user.and_then(|u| nearest_city(&u).map(|(city, _)| city.to_string()))
        } else {
            None
        }
    });

    ResolvedGeo {
        name,
        center,
        fallback_name,
    }
}

/// Hard geographic filter, steps 3 and 4 of the pipeline.
fn passes_geo_filter(posting: &JobPosting, spec: &FilterSpec, geo: &ResolvedGeo) -> bool {
    if spec.radius_km > 0.0 {
        if let Some(center) = geo.center {
            return match posting.coordinate() {
                // Coordinates present: the haversine check decides, no
                // text fallback for out-of-radius ads.
                Some(coord) => haversine_distance(&center, &coord) <= spec.radius_km,
                // No coordinates: match the resolved location against the
                // ad's municipality text instead of dropping it silently.
                None => match (&geo.fallback_name, posting.municipality()) {
                    (Some(name), Some(municipality)) => fuzzy_contains(municipality, name),
                    _ => false,
                },
            };
        }

        // Location named but unknown to the gazetteer: no geometry to
        // evaluate, narrow by address text.
        if let Some(name) = &geo.name {
            return location_matches_address(posting, name);
        }

        return true;
    }

    if let Some(name) = &geo.name {
        return location_matches_address(posting, name);
    }

    true
}

fn location_matches_address(posting: &JobPosting, location: &str) -> bool {
    posting
        .municipality()
        .map_or(false, |m| fuzzy_contains(m, location))
        || posting
            .region()
            .map_or(false, |r| fuzzy_contains(r, location))
}

/// Free-text filter, step 5 of the pipeline.
fn passes_text_filter(posting: &JobPosting, query: &str) -> bool {
    let fields = [
        posting.headline.as_str(),
        posting.occupation_label().unwrap_or(""),
        posting.employer_name().unwrap_or(""),
        posting.municipality().unwrap_or(""),
        posting.region().unwrap_or(""),
        posting.description_text().unwrap_or(""),
    ];

    if any_field_matches(&fields, query) {
        return true;
    }

    for rewrite in rewrite_queries(query) {
        if any_field_matches(&fields, &rewrite) {
            return true;
        }
    }

    fallback_token_match(&fields, query)
}

/// Produce query variants for common abbreviation families.
fn rewrite_queries(query: &str) -> Vec<String> {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    let mut rewrites = Vec::new();

    for family in ABBREVIATION_FAMILIES {
        for (i, &token) in tokens.iter().enumerate() {
            if family.contains(&token) {
                for &alt in *family {
                    if alt != token {
                        let mut variant = tokens.clone();
                        variant[i] = alt;
                        rewrites.push(variant.join(" "));
                    }
                }
            }
        }

        // Multiword members ("c sharp") never match at token level
        for &member in family.iter().filter(|m| m.contains(' ')) {
            if query.contains(member) {
                for &alt in *family {
                    if alt != member {
                        rewrites.push(query.replace(member, alt));
                    }
                }
            }
        }
    }

    rewrites
}

/// Last-resort pass: a single query token found verbatim in some field,
/// or typo-corrected to a vocabulary term that matches some field.
fn fallback_token_match(fields: &[&str], query: &str) -> bool {
    query
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .any(|token| {
            if fields.iter().any(|f| normalize(f).contains(token)) {
                return true;
            }

            closest_vocabulary_term(token)
                .map_or(false, |term| any_field_matches(fields, term))
        })
}

fn closest_vocabulary_term(token: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for &term in combined_terms() {
        let dist = levenshtein_distance(token, term);
        if dist <= FALLBACK_CORRECTION_DISTANCE && best.map_or(true, |(_, d)| dist < d) {
            best = Some((term, dist));
        }
    }
    best.map(|(term, _)| term)
}

/// Filter and rank with default options.
///
/// See [`filter_and_rank_with`].
pub fn filter_and_rank(
    postings: &[JobPosting],
    spec: &FilterSpec,
    user: Option<Coordinate>,
) -> Vec<SearchHit> {
    filter_and_rank_with(postings, spec, user, &RankOptions::default())
}

/// Apply the filter pipeline and relevance ranking to a list of ads.
///
/// Hard filters run per ad, short-circuiting: contract type, then
/// geography (radius or location text), then free text. Survivors are
/// scored and sorted by descending score with more-recent application
/// deadlines breaking ties. An empty query skips scoring and keeps the
/// input order. The input is never mutated; the same inputs always
/// produce the same output.
pub fn filter_and_rank_with(
    postings: &[JobPosting],
    spec: &FilterSpec,
    user: Option<Coordinate>,
    options: &RankOptions,
) -> Vec<SearchHit> {
    let query = normalize(&spec.query);
    let geo = resolve_geo(spec, user, options);

    let mut hits: Vec<SearchHit> = postings
        .iter()
        .filter(|posting| {
            options.mode == EngineMode::RankOnly
                || (passes_contract_filter(posting, spec.contract_type)
                    && passes_geo_filter(posting, spec, &geo)
                    && (query.is_empty() || passes_text_filter(posting, &query)))
        })
        .map(|posting| {
            let distance_km = match (geo.center, posting.coordinate()) {
                (Some(center), Some(coord)) => Some(haversine_distance(&center, &coord)),
                _ => None,
            };

            let score = if query.is_empty() {
                0
            } else {
                score_posting(posting, &query, geo.name.as_deref())
            };

            SearchHit {
                posting: posting.clone(),
                score,
                distance_km,
            }
        })
        .collect();

    if !query.is_empty() {
        hits.sort_by_cached_key(|hit| std::cmp::Reverse((hit.score, hit.posting.deadline())));
    } else if options.deadline_sort_when_unscored {
        hits.sort_by_cached_key(|hit| std::cmp::Reverse(hit.posting.deadline()));
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_csharp_family() {
        let rewrites = rewrite_queries("c# utvecklare");
        assert!(rewrites.contains(&"csharp utvecklare".to_string()));
        assert!(rewrites.contains(&"c sharp utvecklare".to_string()));
    }

    #[test]
    fn test_rewrite_multiword_member() {
        let rewrites = rewrite_queries("c sharp utvecklare");
        assert!(rewrites.contains(&"c# utvecklare".to_string()));
    }

    #[test]
    fn test_rewrite_untouched_query() {
        assert!(rewrite_queries("react stockholm").is_empty());
    }

    #[test]
    fn test_rewrite_does_not_mangle_substrings() {
        // "net" inside "kubernetes" must not trigger the dotnet family
        assert!(rewrite_queries("kubernetes").is_empty());
    }

    #[test]
    fn test_closest_vocabulary_term() {
        assert_eq!(closest_vocabulary_term("reakt"), Some("react"));
        assert_eq!(closest_vocabulary_term("xyzzyq"), None);
    }
}
