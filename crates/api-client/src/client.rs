//! Main API client implementation.

use crate::config::ClientConfig;
use crate::endpoints::SearchApi;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header.
const X_REQUEST_ID: &str = "X-Request-ID";

/// JobTech search API client with retry and request correlation.
///
/// Wraps `reqwest` and adds:
/// - Automatic retry with exponential backoff for transient failures
/// - Request correlation IDs for tracing
#[derive(Clone)]
pub struct JobSearchClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl JobSearchClient {
    /// Create a new client with configuration from the environment.
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("devjobs-api-client/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Access the search endpoint.
    #[must_use]
    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.clone())
    }

    /// Perform a GET request against a path under the base URL.
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> ApiResult<T> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path_and_query.trim_start_matches('/')
        );
        self.get_url(&url).await
    }

    /// Perform a GET request against an absolute URL, with retry.
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        let retry = &self.config.retry;
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..retry.max_attempts {
            if attempt > 0 {
                let delay = retry.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self.execute_single_request(&request_id, url).await;
            let elapsed = start.elapsed();

            match result {
                Ok(value) => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) => {
                    if e.is_retryable() && attempt + 1 < retry.max_attempts {
                        warn!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, will retry"
                        );
                        last_error = Some(e);
                    } else {
                        debug!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, not retrying"
                        );
                        return Err(e);
                    }
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: retry.max_attempts,
            last_error: last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Execute a single request without retry.
    async fn execute_single_request<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &str,
    ) -> ApiResult<T> {
        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle an HTTP response and deserialize the body.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}
