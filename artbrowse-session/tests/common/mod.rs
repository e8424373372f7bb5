//! In-memory page source shared by the session tests.

use artbrowse_catalog::{CatalogError, CatalogResult, PageResponse, PageSource};
use artbrowse_types::Row;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Serves rows `1..=total` in id order, `page_size` per page.
#[derive(Default)]
pub struct MemorySource {
    pub total: u64,
    pub failing: Mutex<HashSet<u32>>,
    pub delays: HashMap<u32, Duration>,
    pub requests: Mutex<Vec<u32>>,
}

impl MemorySource {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn fail_page(&self, page: u32) {
        self.failing.lock().unwrap().insert(page);
    }

    pub fn heal_page(&self, page: u32) {
        self.failing.lock().unwrap().remove(&page);
    }

    pub fn with_delay(mut self, page: u32, delay: Duration) -> Self {
        self.delays.insert(page, delay);
        self
    }

    /// Pages requested so far, ascending. Concurrent fetches start in no
    /// guaranteed order.
    pub fn requests(&self) -> Vec<u32> {
        let mut pages = self.requests.lock().unwrap().clone();
        pages.sort_unstable();
        pages
    }
}

#[async_trait]
impl PageSource for MemorySource {
    async fn fetch_page(&self, page: u32, page_size: u32) -> CatalogResult<PageResponse> {
        self.requests.lock().unwrap().push(page);
        if let Some(delay) = self.delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.lock().unwrap().contains(&page) {
            return Err(CatalogError::Api {
                status: 503,
                body: format!("page {page} unavailable"),
            });
        }

        let first = u64::from(page - 1) * u64::from(page_size) + 1;
        let last = (first + u64::from(page_size) - 1).min(self.total);
        let rows = (first..=last)
            .map(|id| Row::new(id).with_field("title", format!("Artwork {id}")))
            .collect();
        Ok(PageResponse {
            rows,
            total_records: self.total,
        })
    }
}

pub fn selected(ids: impl Iterator<Item = artbrowse_types::RowId>) -> Vec<u64> {
    ids.map(|id| id.get()).collect()
}
