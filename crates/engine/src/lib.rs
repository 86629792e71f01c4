//! Client-side filter and relevance ranking for developer-job ads.
//!
//! The engine takes a flat list of ads, a structured filter spec and an
//! optional searcher coordinate, applies hard filters (contract type,
//! geographic radius, keyword match) and returns the survivors sorted by
//! relevance with a per-ad score.
//!
//! The whole pass is a pure function of its inputs: synchronous, no I/O,
//! no shared state, total over any well-typed input. Fetching ads and
//! debouncing rapid re-invocations belong to the caller.
//!
//! # Example
//!
//! ```
//! use devjobs_engine::{filter_and_rank, FilterSpec, JobPosting};
//!
//! let postings = vec![JobPosting {
//!     id: "1".into(),
//!     headline: "Senior React Developer".into(),
//!     ..JobPosting::default()
//! }];
//!
//! let hits = filter_and_rank(&postings, &FilterSpec::with_query("react"), None);
//! assert_eq!(hits.len(), 1);
//! assert!(hits[0].score > 0);
//! ```

mod contract;
mod filter;
mod model;
mod score;

pub use contract::infer_contract_type;
pub use filter::{filter_and_rank, filter_and_rank_with};
pub use model::{
    AdDescription, ConceptLabel, ContractType, Employer, EngineMode, FilterSpec, JobPosting,
    RankOptions, SearchHit, WorkplaceAddress,
};
