//! Error types for the session layer.

use artbrowse_catalog::CatalogError;
use artbrowse_selection::SelectionError;
use artbrowse_types::RowId;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while browsing.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Fetching a page failed. Selection state is untouched.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// User input for a bulk selection was rejected.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Requested page does not exist.
    #[error("page {page} is out of range (1..={page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },

    /// The operation needs a page on display.
    #[error("no page loaded")]
    NoPageLoaded,

    /// The row is not on the page currently on display.
    #[error("row {0} is not on the current page")]
    RowNotOnPage(RowId),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
