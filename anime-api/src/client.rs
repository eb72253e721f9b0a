//! HTTP client for the four read-only anime endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::types::{AnimeDetail, AnimeSummary, Envelope};

/// Public Jikan v4 endpoint.
pub const DEFAULT_API_URL: &str = "https://api.jikan.moe/v4";

/// Server-side cap on search results.
pub const SEARCH_LIMIT: usize = 5;

/// Read-only anime catalogue.
///
/// Missing or empty `data` yields an empty list / `None`; transport and parse failures are returned as
/// [`ApiError`] for the caller to turn into a user-facing message. No retries.
#[async_trait]
pub trait AnimeApi: Send + Sync {
    /// Searches by title; at most [`SEARCH_LIMIT`] results.
    async fn search_anime(&self, query: &str) -> Result<Vec<AnimeSummary>, ApiError>;
    /// Full record by id, `None` when the API has nothing for it.
    async fn get_anime_details(&self, id: i64) -> Result<Option<AnimeDetail>, ApiError>;
    /// Top-ranked titles in API order, uncapped.
    async fn get_top_anime(&self) -> Result<Vec<AnimeSummary>, ApiError>;
    /// One random title.
    async fn get_random_anime(&self) -> Result<Option<AnimeDetail>, ApiError>;
}

/// [`AnimeApi`] over HTTP GET against a Jikan-compatible base URL.
#[derive(Debug, Clone)]
pub struct JikanClient {
    http: Client,
    base_url: String,
}

impl JikanClient {
    /// Creates a client for `base_url` (e.g. `https://api.jikan.moe/v4`). Trailing slashes are ignored.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client that shares an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_data(&self, path: &str, query: &[(&str, &str)]) -> Result<Option<Value>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(url = %url, status = %status, body_len = body.len(), "anime api response");

        let envelope: Envelope<Value> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(envelope.data.filter(|data| !is_empty_payload(data)))
    }

    async fn get_list(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<AnimeSummary>, ApiError> {
        match self.get_data(path, query).await? {
            Some(data) => decode(data),
            None => Ok(Vec::new()),
        }
    }

    async fn get_detail(&self, path: &str) -> Result<Option<AnimeDetail>, ApiError> {
        match self.get_data(path, &[]).await? {
            Some(data) => decode(data).map(Some),
            None => Ok(None),
        }
    }
}

fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait]
impl AnimeApi for JikanClient {
    #[instrument(skip(self))]
    async fn search_anime(&self, query: &str) -> Result<Vec<AnimeSummary>, ApiError> {
        info!(query = %query, "step: anime search request");
        let limit = SEARCH_LIMIT.to_string();
        let results = self
            .get_list("/anime", &[("q", query), ("limit", limit.as_str())])
            .await?;
        info!(count = results.len(), "step: anime search done");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_anime_details(&self, id: i64) -> Result<Option<AnimeDetail>, ApiError> {
        info!(anime_id = id, "step: anime details request");
        let detail = self.get_detail(&format!("/anime/{}/full", id)).await?;
        info!(anime_id = id, found = detail.is_some(), "step: anime details done");
        Ok(detail)
    }

    #[instrument(skip(self))]
    async fn get_top_anime(&self) -> Result<Vec<AnimeSummary>, ApiError> {
        info!("step: top anime request");
        let results = self.get_list("/top/anime", &[]).await?;
        info!(count = results.len(), "step: top anime done");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_random_anime(&self) -> Result<Option<AnimeDetail>, ApiError> {
        info!("step: random anime request");
        let detail = self.get_detail("/random/anime").await?;
        info!(found = detail.is_some(), "step: random anime done");
        Ok(detail)
    }
}
