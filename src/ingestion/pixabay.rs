//! HTTP client for the Pixabay image search API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub const PIXABAY_API_BASE: &str = "https://pixabay.com/api/";

/// Failure of one search call. Quota exhaustion and connectivity problems
/// are failures of that call only, never fatal.
#[derive(Debug, Error)]
pub enum SearchApiError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("search API returned status {0}")]
    Status(u16),

    #[error("failed to decode search response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: u32,
    pub page: u32,
    /// Restrict to vertical orientation (the feed layout is portrait-biased).
    pub vertical_only: bool,
}

/// A page of search hits, as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    /// Comma-joined tag string.
    #[serde(default)]
    pub tags: String,
    /// Uploader display name.
    #[serde(default)]
    pub user: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(rename = "imageWidth")]
    pub image_width: Option<u32>,
    #[serde(rename = "imageHeight")]
    pub image_height: Option<u32>,
    pub likes: Option<u32>,
}

#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchApiError>;
}

pub struct PixabayClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PixabayClient {
    pub fn new(api_key: &str, timeout_sec: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: PIXABAY_API_BASE.trim_end_matches('/').to_string(),
        })
    }

    /// Points the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, request: &SearchRequest) -> String {
        let mut url = format!(
            "{}/?key={}&q={}&image_type=photo&per_page={}&page={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(&request.query),
            request.per_page,
            request.page,
        );
        if request.vertical_only {
            url.push_str("&orientation=vertical");
        }
        url.push_str("&safesearch=true");
        url
    }
}

#[async_trait]
impl SearchApi for PixabayClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchApiError> {
        let url = self.request_url(request);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SearchApiError::Transport)?;

        if !response.status().is_success() {
            return Err(SearchApiError::Status(response.status().as_u16()));
        }

        response.json().await.map_err(SearchApiError::Decode)
    }
}
