//! Fuzzy text search primitives for devjobs.
//!
//! This crate provides:
//! - Locale-tolerant text normalization
//! - Levenshtein edit distance
//! - Typo-tolerant containment checks over ad fields
//!
//! Everything here is pure and total: no I/O, no state, no errors.

mod fuzzy;
mod normalize;

pub use fuzzy::{any_field_matches, fuzzy_contains, levenshtein_distance};
pub use normalize::normalize;
