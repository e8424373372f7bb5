//! HTTP page source backed by the public artworks API.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::source::{PageResponse, PageSource};
use artbrowse_types::Row;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Fallback when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// API response structures.
#[derive(Debug, Deserialize)]
struct ArtworksEnvelope {
    data: Vec<Row>,
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: u64,
}

/// Fetches catalog pages over HTTP.
pub struct HttpPageSource {
    config: CatalogConfig,
    client: Client,
}

impl HttpPageSource {
    /// Creates a page source after validating `config`.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn retry_after_secs(response: &reqwest::Response) -> u64 {
        response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32, page_size: u32) -> CatalogResult<PageResponse> {
        if page == 0 {
            return Err(CatalogError::InvalidRequest("page numbers start at 1".to_string()));
        }
        if page_size == 0 {
            return Err(CatalogError::InvalidRequest("page size must be positive".to_string()));
        }

        debug!(page, page_size, "fetching catalog page");

        let response = self
            .client
            .get(self.config.artworks_url())
            .query(&[("page", page), ("limit", page_size)])
            .send()
            .await
            .inspect_err(|e| warn!(page, error = %e, "catalog request failed"))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = Self::retry_after_secs(&response);
            warn!(page, retry_after_secs, "catalog rate limited");
            return Err(CatalogError::RateLimited { retry_after_secs });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(page, status = status.as_u16(), "catalog returned an error");
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ArtworksEnvelope = serde_json::from_str(&body)
            .inspect_err(|e| warn!(page, error = %e, "failed to parse catalog page"))?;

        debug!(
            page,
            rows = envelope.data.len(),
            total = envelope.pagination.total,
            "catalog page fetched"
        );

        Ok(PageResponse {
            rows: envelope.data,
            total_records: envelope.pagination.total,
        })
    }
}
