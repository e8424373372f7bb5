//! Browsing session host for ArtBrowse.
//!
//! The session is the only owner of the catalog state and the selection.
//! It turns user commands into page fetches and bulk requests, and turns
//! successful fetches into page-arrival events for the accumulator.
//!
//! ## Components
//!
//! - **BrowserSession**: paging, bulk selection, manual toggles, auto-fill
//! - **ArrivalSequencer**: reorders concurrent fetch completions so pages are
//!   reconciled in visitation order
//! - **SessionView**: read-only snapshot handed to the renderer
//!
//! All mutation goes through `&mut BrowserSession`, so no two reconciliations
//! ever interleave.

mod config;
mod error;
mod sequencer;
mod session;

pub use config::{
    DEFAULT_MAX_FILL_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_PREFETCH_DEPTH, SessionConfig,
};
pub use error::{SessionError, SessionResult};
pub use sequencer::{Arrival, ArrivalSequencer, Ticket};
pub use session::{BrowserSession, FailedPage, FillReport, PageArrival, SessionView};
