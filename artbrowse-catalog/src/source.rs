//! Page source abstraction.

use crate::error::CatalogResult;
use artbrowse_types::Row;
use async_trait::async_trait;

/// One successfully fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    /// Rows in the order the catalog returned them.
    pub rows: Vec<Row>,
    /// Total rows the catalog reports across all pages.
    pub total_records: u64,
}

/// Anything that can produce catalog pages on demand.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches 1-based page `page` with `page_size` rows per page.
    async fn fetch_page(&self, page: u32, page_size: u32) -> CatalogResult<PageResponse>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for std::sync::Arc<T> {
    async fn fetch_page(&self, page: u32, page_size: u32) -> CatalogResult<PageResponse> {
        (**self).fetch_page(page, page_size).await
    }
}
