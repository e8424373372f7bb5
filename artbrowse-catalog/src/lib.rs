//! Page source for the remote artwork catalog.
//!
//! The browser only needs one capability from the catalog: "give me page P
//! of size L, in order, and tell me how many rows exist in total". That
//! capability is the [`PageSource`] trait. [`HttpPageSource`] implements it
//! over the public artworks API:
//!
//! ```text
//! GET {base_url}/artworks?page={p}&limit={L}
//! -> { "data": [Row, ...], "pagination": { "total": N, ... } }
//! ```
//!
//! No selection logic lives here.

mod config;
mod error;
mod http;
mod source;

pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, CatalogResult};
pub use http::HttpPageSource;
pub use source::{PageResponse, PageSource};
