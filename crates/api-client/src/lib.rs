//! Typed client for the JobTech job-search API.
//!
//! This crate provides a thin, resilient HTTP client for the public
//! job-search endpoint the devjobs tools are built around.
//!
//! # Features
//!
//! - **Environment-based configuration**: base URL and timeout from env vars
//! - **Retry with exponential backoff**: automatic retry for transient failures
//! - **Request correlation**: unique IDs on every request for debugging
//! - **Typed search endpoint**: occupation selectors, query cleaning,
//!   municipality/radius and pagination parameters
//!
//! # Example
//!
//! ```rust,no_run
//! use devjobs_api_client::{JobSearchClient, Occupation, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JobSearchClient::new()?;
//!
//!     let params = SearchParams::new(Occupation::Frontend);
//!     let response = client.search().fetch(&params).await?;
//!     println!("Got {} ads", response.hits.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::JobSearchClient;
pub use config::{ClientConfig, Environment, RetryConfig};
pub use endpoints::{Occupation, SearchApi, SearchParams, SearchResponse, TotalCount};
pub use error::{ApiError, ApiResult};
