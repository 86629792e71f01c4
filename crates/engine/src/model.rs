//! Data model for ads and filter criteria.

use chrono::NaiveDateTime;
use devjobs_geo::{parse_coordinate_array, Coordinate};
use serde::{Deserialize, Serialize};

/// One job advertisement record from the upstream source.
///
/// Deserializes straight from the job-search API's hit shape. Every field
/// except `id` and `headline` may be missing; missing fields are tolerated
/// everywhere and simply fail to contribute a match signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    /// Opaque ad ID, unique within a result set
    pub id: String,
    /// Ad headline
    pub headline: String,
    /// Application deadline, e.g. "2026-09-30T23:59:59"
    #[serde(default)]
    pub application_deadline: Option<String>,
    /// Employer block
    #[serde(default)]
    pub employer: Option<Employer>,
    /// Occupation classification
    #[serde(default)]
    pub occupation: Option<ConceptLabel>,
    /// Free-text ad description
    #[serde(default)]
    pub description: Option<AdDescription>,
    /// Workplace address and coordinates
    #[serde(default)]
    pub workplace_address: Option<WorkplaceAddress>,
    /// Working-hours label ("Heltid", "Deltid")
    #[serde(default)]
    pub working_hours_type: Option<ConceptLabel>,
}

/// Employer block on an ad.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employer {
    /// Employer name
    #[serde(default)]
    pub name: Option<String>,
    /// Workplace name, when it differs from the employer
    #[serde(default)]
    pub workplace: Option<String>,
}

/// A labelled taxonomy concept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptLabel {
    /// Human-readable label
    #[serde(default)]
    pub label: Option<String>,
}

/// Ad description block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdDescription {
    /// Plain description text
    #[serde(default)]
    pub text: Option<String>,
}

/// Workplace address on an ad.
///
/// `coordinates` is kept as raw JSON: the source delivers a
/// `[longitude, latitude]` array but absent, empty and malformed values
/// all occur in practice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkplaceAddress {
    /// Municipality name
    #[serde(default)]
    pub municipality: Option<String>,
    /// Region name
    #[serde(default)]
    pub region: Option<String>,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// Raw `[lon, lat]` coordinate array
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl JobPosting {
    /// Employer name, if present.
    pub fn employer_name(&self) -> Option<&str> {
        self.employer.as_ref()?.name.as_deref()
    }

    /// Occupation label, if present.
    pub fn occupation_label(&self) -> Option<&str> {
        self.occupation.as_ref()?.label.as_deref()
    }

    /// Description text, if present.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref()?.text.as_deref()
    }

    /// Workplace municipality, if present.
    pub fn municipality(&self) -> Option<&str> {
        self.workplace_address.as_ref()?.municipality.as_deref()
    }

    /// Workplace region, if present.
    pub fn region(&self) -> Option<&str> {
        self.workplace_address.as_ref()?.region.as_deref()
    }

    /// Workplace coordinate in (lat, lon) order.
    ///
    /// Malformed or missing coordinate data yields `None`.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let address = self.workplace_address.as_ref()?;
        parse_coordinate_array(&address.coordinates)
    }

    /// Parsed application deadline.
    ///
    /// Accepts "2026-09-30T23:59:59" and bare "2026-09-30"; anything else
    /// yields `None`, which sorts as oldest.
    pub fn deadline(&self) -> Option<NaiveDateTime> {
        let raw = self.application_deadline.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .or_else(|| {
                chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

/// Requested contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    /// No contract-type restriction (also the inferred type of unclassifiable ads)
    #[default]
    All,
    /// Tillsvidareanställning
    Permanent,
    /// Visstid, vikariat, projekt
    Temporary,
}

/// User-chosen search and filter criteria for one ranking pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free query text, may be empty
    #[serde(default)]
    pub query: String,
    /// Explicit location name; overrides any city inferred from the query
    #[serde(default)]
    pub location: Option<String>,
    /// Search radius in kilometers; 0 disables radius filtering
    #[serde(default)]
    pub radius_km: f64,
    /// Requested contract type
    #[serde(default)]
    pub contract_type: ContractType,
}

impl FilterSpec {
    /// Spec with a query only.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// True when no criterion is set and the pass should be a no-op.
    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty()
            && self.location.as_deref().map_or(true, |l| l.trim().is_empty())
            && self.radius_km == 0.0
            && self.contract_type == ContractType::All
    }
}

/// How the engine treats its input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Apply all hard filters, then score and sort
    #[default]
    FilterAndRank,
    /// The server already narrowed the result set: skip hard filters,
    /// only score and sort
    RankOnly,
}

/// Engine configuration for one ranking pass.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Filtering mode
    pub mode: EngineMode,
    /// Recognize city names typed into the query as a location hint
    pub infer_city_from_query: bool,
    /// Sort by deadline even when the query is empty and no scoring ran
    pub deadline_sort_when_unscored: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            mode: EngineMode::FilterAndRank,
            infer_city_from_query: true,
            deadline_sort_when_unscored: false,
        }
    }
}

/// A surviving ad with its relevance explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The ad
    pub posting: JobPosting,
    /// Relevance score (higher is better; 0 when no scoring ran)
    pub score: u32,
    /// Distance from the search center in kilometers, when both
    /// coordinates were known
    pub distance_km: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn posting_json() -> serde_json::Value {
        json!({
            "id": "24xyz",
            "headline": "Senior React Developer",
            "application_deadline": "2026-09-30T23:59:59",
            "employer": { "name": "Acme AB", "workplace": "Acme Stockholm" },
            "occupation": { "label": "Frontendutvecklare" },
            "description": { "text": "React och TypeScript." },
            "workplace_address": {
                "municipality": "Stockholm",
                "region": "Stockholms län",
                "country": "Sverige",
                "coordinates": [18.0686, 59.3293]
            },
            "working_hours_type": { "label": "Heltid" }
        })
    }

    #[test]
    fn test_deserialize_full_posting() {
        let posting: JobPosting = serde_json::from_value(posting_json()).unwrap();
        assert_eq!(posting.id, "24xyz");
        assert_eq!(posting.employer_name(), Some("Acme AB"));
        assert_eq!(posting.occupation_label(), Some("Frontendutvecklare"));
        assert_eq!(posting.municipality(), Some("Stockholm"));

        let coord = posting.coordinate().unwrap();
        assert!((coord.latitude - 59.3293).abs() < 0.0001);
    }

    #[test]
    fn test_deserialize_sparse_posting() {
        let posting: JobPosting = serde_json::from_value(json!({
            "id": "1",
            "headline": "Utvecklare"
        }))
        .unwrap();

        assert!(posting.employer_name().is_none());
        assert!(posting.coordinate().is_none());
        assert!(posting.deadline().is_none());
    }

    #[test]
    fn test_malformed_coordinates_are_none() {
        let posting: JobPosting = serde_json::from_value(json!({
            "id": "1",
            "headline": "Utvecklare",
            "workplace_address": { "municipality": "Lund", "coordinates": [] }
        }))
        .unwrap();

        assert!(posting.coordinate().is_none());
        assert_eq!(posting.municipality(), Some("Lund"));
    }

    #[test]
    fn test_deadline_parsing() {
        let mut posting = JobPosting {
            id: "1".into(),
            headline: "x".into(),
            application_deadline: Some("2026-09-30T23:59:59".into()),
            ..JobPosting::default()
        };
        assert!(posting.deadline().is_some());

        posting.application_deadline = Some("2026-09-30".into());
        assert!(posting.deadline().is_some());

        posting.application_deadline = Some("sista september".into());
        assert!(posting.deadline().is_none());
    }

    #[test]
    fn test_filter_spec_default_detection() {
        assert!(FilterSpec::default().is_default());
        assert!(!FilterSpec::with_query("react").is_default());

        let spec = FilterSpec {
            radius_km: 25.0,
            ..FilterSpec::default()
        };
        assert!(!spec.is_default());
    }
}
