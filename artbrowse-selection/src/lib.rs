//! Cross-page selection accumulation for ArtBrowse.
//!
//! A user may ask for "the next N rows" while only one page is on screen.
//! The accumulator takes what it can from that page and remembers how many
//! rows are still owed; every later page arrival pays down the debt until it
//! reaches zero or the catalog runs out.
//!
//! # Architecture
//!
//! The accumulator is a pure state machine. It performs no I/O and never
//! suspends; the browsing session feeds it bulk requests and page arrivals
//! in visitation order.
//!
//! ## States
//!
//! - **Satisfied**: nothing owed, page arrivals are ignored.
//! - **Accumulating**: `pending > 0`, each arrival is scanned greedily.
//!
//! # Example
//!
//! ```
//! use artbrowse_selection::{SelectionAccumulator, parse_select_count};
//! use artbrowse_types::Row;
//!
//! let page_one: Vec<Row> = (1..=3u64).map(Row::new).collect();
//! let page_two: Vec<Row> = (4..=6u64).map(Row::new).collect();
//!
//! let mut acc = SelectionAccumulator::new();
//! acc.request_select(parse_select_count("5").unwrap(), &page_one);
//! assert_eq!(acc.pending(), 2);
//!
//! acc.on_page_arrived(&page_two);
//! assert_eq!(acc.pending(), 0);
//! assert_eq!(acc.len(), 5);
//! ```

mod accumulator;
mod error;
mod state;

pub use accumulator::{Accumulation, Phase, SelectionAccumulator, parse_select_count};
pub use error::{SelectionError, SelectionResult};
pub use state::SelectionState;
