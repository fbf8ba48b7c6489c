use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::retry::{is_retryable_status, with_retry, RetryConfig, RetryableError};

pub const FAKESTORE_API_BASE: &str = "https://fakestoreapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl RetryableError for CatalogError {
    fn is_retryable(&self) -> bool {
        match self {
            CatalogError::UnexpectedStatus { status, .. } => is_retryable_status(*status),
            CatalogError::NetworkError(e) => e.is_connect() || e.is_timeout(),
            CatalogError::RequestFailed(_) | CatalogError::ParseError(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Raw product record as the catalog host returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: ApiRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRating {
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

/// Client for the Fake Store catalog (or anything serving the same shape)
pub struct FakeStoreClient {
    client: reqwest::Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl FakeStoreClient {
    pub fn new() -> Self {
        Self::with_base_url(FAKESTORE_API_BASE.to_string())
    }

    /// Point the client at a different catalog host
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: build_http_client(DEFAULT_TIMEOUT),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_config: RetryConfig::default(),
        }
    }

    /// Give up on a request (and count it as a transient failure) after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self
    }

    /// Create client with custom retry configuration
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full catalog. No query parameters are sent.
    pub async fn get_products(&self) -> Result<Vec<ApiProduct>> {
        let url = format!("{}/products", self.base_url);
        info!("Fetching catalog from {}", url);

        with_retry(&self.retry_config, || async {
            let response = self.client.get(&url).send().await?;

            if response.status() != reqwest::StatusCode::OK {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(CatalogError::UnexpectedStatus { status, body });
            }

            // Read as text first so a malformed body surfaces as a ParseError
            let body = response.text().await?;
            let products: Vec<ApiProduct> = serde_json::from_str(&body)?;
            debug!("Catalog returned {} records", products.len());
            Ok(products)
        })
        .await
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static("ShopScout/0.1.0"),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}

impl Default for FakeStoreClient {
    fn default() -> Self {
        Self::new()
    }
}
