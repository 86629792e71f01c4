//! Contract-type inference from ad text.
//!
//! The source has no structured employment-type field; the phrasing is
//! embedded in the headline and description. Detection runs over
//! normalized text, so "Tillsvidareanställning" matches "tillsvidare".

use once_cell::sync::Lazy;
use regex::Regex;

use devjobs_search::normalize;

use crate::model::{ContractType, JobPosting};

static PERMANENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tillsvidare|permanent|fast anstallning").unwrap());

static TEMPORARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"visstid|vikariat|temporary|contract|projekt|timanstallning").unwrap());

/// Infer an ad's contract type from its headline and description.
///
/// Permanent phrasing wins over temporary when both occur. Ads with
/// neither classify as [`ContractType::All`] and survive every
/// contract-type filter.
pub fn infer_contract_type(posting: &JobPosting) -> ContractType {
    let text = normalize(&format!(
        "{} {}",
        posting.headline,
        posting.description_text().unwrap_or("")
    ));

    if PERMANENT_RE.is_match(&text) {
        ContractType::Permanent
    } else if TEMPORARY_RE.is_match(&text) {
        ContractType::Temporary
    } else {
        ContractType::All
    }
}

/// Whether an ad passes the requested contract-type filter.
pub fn passes_contract_filter(posting: &JobPosting, requested: ContractType) -> bool {
    requested == ContractType::All || infer_contract_type(posting) == requested
}
