//! Domain vocabularies for devjobs.
//!
//! This crate provides:
//! - Fixed vocabularies of technology and profession terms
//! - A Swedish city gazetteer with coordinates
//! - Query typo correction against a vocabulary
//! - Extraction of API-meaningful tech keywords from free text
//! - City inference from free text
//!
//! City inference ("react stockholm" → location hint "stockholm") is a
//! product heuristic, deliberately kept here so callers can disable it
//! without touching the filtering engine.

mod correct;
mod gazetteer;
mod terms;

pub use correct::{correct_query, extract_tech_keywords};
pub use gazetteer::{city_coordinate, city_names, infer_city_from_query, nearest_city};
pub use terms::{combined_terms, profession_terms, tech_terms};
