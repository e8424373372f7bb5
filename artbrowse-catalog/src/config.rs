//! Catalog client configuration.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

/// Public artworks API of the Art Institute of Chicago.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Configuration for [`crate::HttpPageSource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API root; `/artworks` is appended.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("artbrowse/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Checks that the configuration can produce valid requests.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.timeout_secs == 0 {
            return Err(CatalogError::Config("timeout_secs must be positive".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CatalogError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// URL of the artworks collection endpoint.
    pub fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url.trim_end_matches('/'))
    }
}
