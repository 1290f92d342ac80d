use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::CatalogPage;
use crate::movie::Movie;
use crate::recommend::query::QuerySpec;
use crate::recommend::state::ResultState;

/// Shown when the server answered but had nothing usable.
pub const NO_SUGGESTIONS: &str = "No suggestions found.";
/// Shown when the request failed before any response arrived.
pub const CANNOT_CONNECT: &str = "Cannot connect to server.";

/// JSON wrapper returned by every recommendation endpoint. Absence of
/// `recommendations` signals "no results" regardless of `message` content.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub recommendations: Option<Vec<Movie>>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Seam between the view flow and the remote API, so the flow can run
/// against a stub in tests.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// One GET per submitted query. Never fails: every outcome is folded
    /// into a `ResultState` for the view.
    async fn recommendations(&self, spec: &QuerySpec) -> ResultState;

    /// Fetch one page of the catalog listing.
    async fn movies(&self, page: u32, limit: u32) -> Result<CatalogPage, ClientError>;
}

/// HTTP client for the catalog and recommendation endpoints. The base URL is
/// injected at construction, never read from ambient state.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl MovieApi for ApiClient {
    async fn recommendations(&self, spec: &QuerySpec) -> ResultState {
        let url = self.url(&spec.endpoint);
        debug!("GET {} ({} params)", url, spec.params.len());

        let response = match self.http.get(&url).query(&spec.params).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("recommendation request failed: {}", e);
                let message = if e.is_connect() || e.is_timeout() {
                    CANNOT_CONNECT.to_string()
                } else {
                    e.to_string()
                };
                return ResultState::Error(message);
            }
        };

        if !response.status().is_success() {
            debug!("recommendation request returned {}", response.status());
            return ResultState::Error(NO_SUGGESTIONS.to_string());
        }

        match response.json::<Envelope>().await {
            Ok(envelope) => classify(envelope),
            Err(e) => ResultState::Error(e.to_string()),
        }
    }

    async fn movies(&self, page: u32, limit: u32) -> Result<CatalogPage, ClientError> {
        let url = format!("{}/api/movies", self.base_url);
        debug!("GET {} page={} limit={}", url, page, limit);

        let response = self
            .http
            .get(&url)
            .query(&[("page", page.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<CatalogPage>().await?)
    }
}

/// Classify a 2xx envelope: only a non-empty `recommendations` array counts
/// as a result.
pub fn classify(envelope: Envelope) -> ResultState {
    match envelope.recommendations {
        Some(movies) if !movies.is_empty() => ResultState::Success(movies),
        _ => ResultState::Error(NO_SUGGESTIONS.to_string()),
    }
}
