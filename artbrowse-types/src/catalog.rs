//! Catalog state as seen by the browsing session.

use crate::Page;
use serde::{Deserialize, Serialize};

/// What the session currently knows about the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Total rows reported by the catalog on the most recent fetch.
    pub total_records: u64,
    /// The page currently on display, once one has loaded.
    pub current_page: Option<Page>,
    /// Rows requested per page. Always positive.
    pub page_size: u32,
}

impl CatalogState {
    /// Creates an empty catalog state.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            total_records: 0,
            current_page: None,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages the catalog spans at the current page size.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.pages_for(self.total_records)
    }

    /// Number of pages `total_records` rows span at the current page size.
    #[must_use]
    pub fn pages_for(&self, total_records: u64) -> u32 {
        let pages = total_records.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Number of the page on display, if any.
    #[must_use]
    pub fn current_number(&self) -> Option<u32> {
        self.current_page.as_ref().map(|p| p.number)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_number()
            .is_some_and(|n| n < self.page_count())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_number().is_some_and(|n| n > 1)
    }

    /// Records a newly arrived page and the catalog total it reported.
    pub fn set_page(&mut self, page: Page, total_records: u64) {
        self.total_records = total_records;
        self.current_page = Some(page);
    }

    /// "Showing X to Y of Z entries" for the page on display.
    #[must_use]
    pub fn summary(&self) -> String {
        let (first, last) = self
            .current_page
            .as_ref()
            .map_or((0, 0), |p| {
                (p.first_record(self.total_records), p.last_record(self.total_records))
            });
        format!(
            "Showing {first} to {last} of {} entries",
            self.total_records
        )
    }
}
