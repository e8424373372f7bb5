//! Core type definitions for ArtBrowse.
//!
//! This crate defines the data model shared by every layer of the browser:
//! - Row identifiers and rows with pass-through display fields
//! - Pages as fetched from the remote catalog
//! - The catalog state owned by the browsing session
//!
//! Nothing here performs I/O or knows about selection.

mod catalog;
mod ids;
mod page;
mod row;

pub use catalog::CatalogState;
pub use ids::RowId;
pub use page::Page;
pub use row::Row;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid row id: {0}")]
    InvalidRowId(#[from] std::num::ParseIntError),

    #[error("row is not a JSON object")]
    NotAnObject,
}
