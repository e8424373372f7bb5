//! Session configuration.

use crate::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Pages fetched concurrently by auto-fill by default.
pub const DEFAULT_PREFETCH_DEPTH: usize = 2;

/// Default bound on pages one auto-fill may scan.
pub const DEFAULT_MAX_FILL_PAGES: u32 = 50;

/// Configuration for a [`crate::BrowserSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rows per page.
    pub page_size: u32,
    /// Pages fetched concurrently while auto-filling a pending selection.
    pub prefetch_depth: usize,
    /// Upper bound on pages scanned by one auto-fill.
    pub max_fill_pages: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            prefetch_depth: DEFAULT_PREFETCH_DEPTH,
            max_fill_pages: DEFAULT_MAX_FILL_PAGES,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> SessionResult<()> {
        if self.page_size == 0 {
            return Err(SessionError::Config("page_size must be positive".to_string()));
        }
        if self.prefetch_depth == 0 {
            return Err(SessionError::Config(
                "prefetch_depth must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
