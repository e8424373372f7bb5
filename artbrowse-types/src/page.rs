//! Fetched pages.

use crate::{Row, RowId};
use serde::{Deserialize, Serialize};

/// One fetched batch of rows.
///
/// `number` is 1-based. Row order is exactly the order the catalog returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
    pub page_size: u32,
    pub rows: Vec<Row>,
}

impl Page {
    /// Creates a page.
    #[must_use]
    pub fn new(number: u32, page_size: u32, rows: Vec<Row>) -> Self {
        Self {
            number,
            page_size,
            rows,
        }
    }

    /// Number of rows actually on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row ids in page order.
    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().map(|r| r.id)
    }

    /// Looks up a row on this page by id.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// 1-based index of the first record shown on this page, or 0 for an
    /// empty catalog.
    #[must_use]
    pub fn first_record(&self, total_records: u64) -> u64 {
        if total_records == 0 {
            return 0;
        }
        let start = u64::from(self.number.saturating_sub(1)) * u64::from(self.page_size) + 1;
        start.min(total_records)
    }

    /// 1-based index of the last record shown on this page, capped at the
    /// catalog total.
    #[must_use]
    pub fn last_record(&self, total_records: u64) -> u64 {
        (u64::from(self.number) * u64::from(self.page_size)).min(total_records)
    }
}
