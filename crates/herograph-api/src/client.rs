//! Paginated client for the remote character catalog.
//!
//! Pages are requested one after another with a fixed `limit` and growing
//! `offset`, and concatenated into a single collection. No retries: any
//! failure ends the fetch and is returned to the caller.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use herograph_catalog::CharacterRecordDto;
use herograph_domain::EntityType;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Collection served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiResource {
    /// The character collection itself
    Characters,

    /// One of the sub-entity collections
    Entity(EntityType),
}

impl ApiResource {
    /// Path segment of the collection endpoint
    pub fn as_path(&self) -> &'static str {
        match self {
            ApiResource::Characters => "characters",
            ApiResource::Entity(entity_type) => entity_type.as_str(),
        }
    }
}

impl fmt::Display for ApiResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ApiResource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "characters" {
            return Ok(ApiResource::Characters);
        }
        s.parse::<EntityType>()
            .map(ApiResource::Entity)
            .map_err(|_| {
                ApiError::InvalidInput(format!(
                    "Invalid resource '{}' (must be characters, comics, series, stories or events)",
                    s
                ))
            })
    }
}

/// Response envelope: `{"data": {"total": n, "results": [...]}}`
#[derive(Deserialize)]
struct PageEnvelope {
    data: PageData,
}

#[derive(Deserialize)]
struct PageData {
    results: Vec<CharacterRecordDto>,
}

#[derive(Deserialize)]
struct TotalEnvelope {
    data: TotalData,
}

#[derive(Deserialize)]
struct TotalData {
    total: u64,
}

/// Number of pages needed to cover `total` items at `limit` per page
pub fn page_count(total: u64, limit: u32) -> u64 {
    total.div_ceil(u64::from(limit.max(1)))
}

/// HTTP client for the remote character catalog
pub struct MarvelApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl MarvelApiClient {
    /// Create a client from validated settings
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the settings fail validation, or `Request`
    /// if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { config, client })
    }

    /// Settings this client was created with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Endpoint URL for a collection
    pub fn resource_url(&self, resource: ApiResource) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), resource.as_path())
    }

    /// Query parameters for one request; `offset` is omitted for count queries
    pub fn query_params(&self, offset: Option<u64>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apikey", self.config.api_key.clone()),
            ("hash", self.config.hash.clone()),
            ("ts", self.config.ts.clone()),
            ("limit", self.config.data_max.to_string()),
        ];
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }

    /// Total number of items in a collection
    pub async fn total_count(&self, resource: ApiResource) -> Result<u64> {
        let body = self.get(resource, None).await?;
        let envelope: TotalEnvelope = serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Missing data.total: {}", e)))?;

        debug!("Remote {} total: {}", resource, envelope.data.total);
        Ok(envelope.data.total)
    }

    /// One page of characters starting at `offset`
    pub async fn fetch_page(&self, offset: u64) -> Result<Vec<CharacterRecordDto>> {
        let body = self.get(ApiResource::Characters, Some(offset)).await?;
        let envelope: PageEnvelope = serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Missing data.results: {}", e)))?;

        Ok(envelope.data.results)
    }

    /// Every character, given the total count computed beforehand
    ///
    /// # Errors
    /// Returns `InvalidInput` if `total` is zero; any page failure aborts
    /// the whole fetch.
    pub async fn fetch_all_characters(&self, total: u64) -> Result<Vec<CharacterRecordDto>> {
        if total == 0 {
            return Err(ApiError::InvalidInput(
                "total character count must be greater than 0".to_string(),
            ));
        }

        let limit = self.config.data_max;
        let pages = page_count(total, limit);
        info!("Fetching {} characters in {} pages of {}", total, pages, limit);

        let mut characters = Vec::new();
        for page in 0..pages {
            let offset = page * u64::from(limit);
            let results = self.fetch_page(offset).await?;
            debug!("Page {}/{} (offset {}): {} records", page + 1, pages, offset, results.len());
            characters.extend(results);
        }

        info!("Fetched {} character records", characters.len());
        Ok(characters)
    }

    /// Count, then fetch, the whole character collection
    pub async fn fetch_catalog(&self) -> Result<Vec<CharacterRecordDto>> {
        let total = self.total_count(ApiResource::Characters).await?;
        self.fetch_all_characters(total).await
    }

    async fn get(&self, resource: ApiResource, offset: Option<u64>) -> Result<String> {
        let response = self
            .client
            .get(self.resource_url(resource))
            .query(&self.query_params(offset))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
