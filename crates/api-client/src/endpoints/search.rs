//! Job-search endpoint.
//!
//! Maps to the JobTech `/search` route: free-text query, occupation
//! selectors, municipality + radius and offset/limit pagination.

use crate::client::JobSearchClient;
use crate::error::ApiResult;
use devjobs_engine::{FilterSpec, JobPosting};
use devjobs_vocab::{city_names, extract_tech_keywords, infer_city_from_query};
use serde::{Deserialize, Serialize};

/// Occupation category selectors understood by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    /// Frontend developers
    Frontend,
    /// Backend developers
    Backend,
    /// Fullstack developers
    Fullstack,
    /// The whole software/IT occupation group
    #[default]
    All,
}

impl Occupation {
    /// The query-string fragment selecting this category.
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Frontend => "occupation-name=GDHs_eoz_uKx",
            Self::Backend => "occupation-name=7wdX_4rv_33z",
            Self::Fullstack => "occupation-name=71Ji_irM_rSJ",
            Self::All => "occupation-group=2512",
        }
    }
}

impl std::str::FromStr for Occupation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "fullstack" => Ok(Self::Fullstack),
            "all" => Ok(Self::All),
            other => Err(format!("unknown occupation category: {other}")),
        }
    }
}

/// Parameters for a search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Occupation category
    pub occupation: Occupation,
    /// Free-text query (already reduced to API-meaningful terms)
    pub query: Option<String>,
    /// Municipality filter
    pub municipality: Option<String>,
    /// Radius in km around the municipality
    pub radius_km: Option<u32>,
    /// Pagination offset
    pub offset: u32,
    /// Page size
    pub limit: u32,
}

impl SearchParams {
    /// New params for a category with default pagination.
    pub fn new(occupation: Occupation) -> Self {
        Self {
            occupation,
            limit: 25,
            ..Self::default()
        }
    }

    /// Derive params from a local filter spec.
    ///
    /// The free text is reduced to vocabulary terms the API understands,
    /// with city names moved into the municipality parameter the way the
    /// engine itself would infer them.
    pub fn for_filter_spec(occupation: Occupation, spec: &FilterSpec) -> Self {
        let municipality = spec
            .location
            .clone()
            .filter(|l| !l.trim().is_empty())
            .or_else(|| infer_city_from_query(&spec.query).map(str::to_string));

        let keywords = strip_city_tokens(&extract_tech_keywords(&spec.query));

        Self {
            occupation,
            query: (!keywords.is_empty()).then_some(keywords),
            municipality,
            radius_km: (spec.radius_km > 0.0).then_some(spec.radius_km.round() as u32),
            offset: 0,
            limit: 25,
        }
    }

    /// Set the pagination window.
    #[must_use]
    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    /// Render as a query string for the `/search` route.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![self.occupation.selector().to_string()];

        if let Some(ref query) = self.query {
            parts.push(format!("q={}", encode_component(query)));
        }
        if let Some(ref municipality) = self.municipality {
            parts.push(format!("municipality={}", encode_component(municipality)));
        }
        if let Some(radius) = self.radius_km {
            parts.push(format!("radius={radius}"));
        }

        parts.push(format!("offset={}", self.offset));
        parts.push(format!("limit={}", self.limit));

        parts.join("&")
    }
}

/// Remove gazetteer city names from a keyword string; the city travels in
/// the municipality parameter instead.
fn strip_city_tokens(keywords: &str) -> String {
    keywords
        .split_whitespace()
        .filter(|token| !city_names().any(|city| city == *token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal percent-encoding for query-string values. The inputs are
/// pre-normalized vocabulary terms, so only space, `#` and `.` occur
/// beyond ascii alphanumerics.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '&' => out.push_str("%26"),
            '+' => out.push_str("%2B"),
            _ => out.push(c),
        }
    }
    out
}

/// Total-count block on a search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalCount {
    /// Number of ads matching the upstream query
    #[serde(default)]
    pub value: Option<u64>,
}

/// Response shape of the `/search` route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total matching ads upstream
    #[serde(default)]
    pub total: Option<TotalCount>,
    /// The returned page of ads
    #[serde(default)]
    pub hits: Vec<JobPosting>,
}

/// Search API interface.
#[derive(Clone)]
pub struct SearchApi {
    client: JobSearchClient,
}

impl SearchApi {
    /// Create a new search API interface.
    pub(crate) fn new(client: JobSearchClient) -> Self {
        Self { client }
    }

    /// Fetch a page of ads.
    ///
    /// GET /search?occupation-...&q=...&offset=...&limit=...
    pub async fn fetch(&self, params: &SearchParams) -> ApiResult<SearchResponse> {
        let path = format!("search?{}", params.to_query_string());
        self.client.get(&path).await
    }

    /// Fetch the first page of a category with no further criteria.
    pub async fn fetch_category(&self, occupation: Occupation) -> ApiResult<SearchResponse> {
        self.fetch(&SearchParams::new(occupation)).await
    }
}
