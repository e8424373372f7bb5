//! The browsing session.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::sequencer::ArrivalSequencer;
use artbrowse_catalog::{CatalogError, PageSource};
use artbrowse_selection::{Accumulation, SelectionAccumulator, parse_select_count};
use artbrowse_types::{CatalogState, Page, RowId};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

/// Outcome of loading a page for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArrival {
    /// Page number now on display.
    pub page: u32,
    /// Rows on the page.
    pub rows: usize,
    /// What the accumulator took from the page.
    pub accumulation: Accumulation,
}

/// A page that could not be fetched during auto-fill.
#[derive(Debug)]
pub struct FailedPage {
    pub page: u32,
    pub error: CatalogError,
}

/// Outcome of [`BrowserSession::fill_pending`].
#[derive(Debug, Default)]
pub struct FillReport {
    /// Pages reconciled, in ascending order.
    pub pages_scanned: Vec<u32>,
    /// Rows added to the selection across those pages.
    pub added: usize,
    /// Rows still owed when the fill stopped.
    pub pending: usize,
    /// First page whose fetch failed; scanning stopped there.
    pub failed: Option<FailedPage>,
}

impl FillReport {
    pub fn is_satisfied(&self) -> bool {
        self.pending == 0
    }
}

/// Read-only snapshot of a session for rendering.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub catalog: &'a CatalogState,
    pub selection: &'a SelectionAccumulator,
}

impl SessionView<'_> {
    /// "Showing X to Y of Z entries".
    pub fn summary(&self) -> String {
        self.catalog.summary()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.catalog.current_page.as_ref()
    }
}

/// A browsing session over one page source.
///
/// Holds the only reference to the catalog state and the selection; every
/// mutation goes through `&mut self`.
pub struct BrowserSession<S> {
    source: S,
    config: SessionConfig,
    catalog: CatalogState,
    selection: SelectionAccumulator,
}

impl<S: PageSource> BrowserSession<S> {
    /// Creates a session with nothing loaded yet.
    pub fn new(source: S, config: SessionConfig) -> SessionResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            catalog: CatalogState::new(config.page_size),
            config,
            selection: SelectionAccumulator::new(),
        })
    }

    /// Creates a session and loads `start_page`.
    pub async fn open(source: S, config: SessionConfig, start_page: u32) -> SessionResult<Self> {
        let mut session = Self::new(source, config)?;
        session.load_page(start_page).await?;
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionAccumulator {
        &self.selection
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.catalog.current_page.as_ref()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            catalog: &self.catalog,
            selection: &self.selection,
        }
    }

    fn require_page(&self) -> SessionResult<&Page> {
        self.catalog
            .current_page
            .as_ref()
            .ok_or(SessionError::NoPageLoaded)
    }

    fn out_of_range(&self, page: u32) -> SessionError {
        SessionError::PageOutOfRange {
            page,
            page_count: self.catalog.page_count(),
        }
    }

    // ── Paging ───────────────────────────────────────────────────

    /// Fetches `number` and puts it on display.
    ///
    /// A successful arrival is always offered to the accumulator. On failure
    /// the catalog state and the selection are left as they were. A page past
    /// the end of the total reported with it is rejected the same way; page 1
    /// of an empty catalog is still shown.
    pub async fn load_page(&mut self, number: u32) -> SessionResult<PageArrival> {
        let known_pages = self.catalog.page_count().max(1);
        if number == 0 || (self.catalog.current_page.is_some() && number > known_pages) {
            return Err(self.out_of_range(number));
        }

        let page_size = self.config.page_size;
        let response = match self.source.fetch_page(number, page_size).await {
            Ok(response) => response,
            Err(e) => {
                warn!(page = number, error = %e, "page fetch failed");
                return Err(e.into());
            }
        };

        let page_count = self.catalog.pages_for(response.total_records);
        if number > page_count.max(1) {
            warn!(page = number, page_count, "page past the end of the catalog");
            return Err(SessionError::PageOutOfRange { page: number, page_count });
        }

        let accumulation = self.selection.on_page_arrived(&response.rows);
        let rows = response.rows.len();
        self.catalog
            .set_page(Page::new(number, page_size, response.rows), response.total_records);

        debug!(
            page = number,
            rows,
            total = self.catalog.total_records,
            added = accumulation.added,
            pending = accumulation.pending,
            "page loaded"
        );

        Ok(PageArrival {
            page: number,
            rows,
            accumulation,
        })
    }

    pub async fn go_to(&mut self, number: u32) -> SessionResult<PageArrival> {
        self.load_page(number).await
    }

    pub async fn first_page(&mut self) -> SessionResult<PageArrival> {
        self.load_page(1).await
    }

    pub async fn next_page(&mut self) -> SessionResult<PageArrival> {
        let current = self.require_page()?.number;
        if !self.catalog.has_next() {
            return Err(self.out_of_range(current.saturating_add(1)));
        }
        self.load_page(current + 1).await
    }

    pub async fn previous_page(&mut self) -> SessionResult<PageArrival> {
        let current = self.require_page()?.number;
        if !self.catalog.has_previous() {
            return Err(self.out_of_range(current.saturating_sub(1)));
        }
        self.load_page(current - 1).await
    }

    pub async fn last_page(&mut self) -> SessionResult<PageArrival> {
        self.require_page()?;
        let last = self.catalog.page_count().max(1);
        self.load_page(last).await
    }

    // ── Selection ────────────────────────────────────────────────

    /// Bulk-selects `n` rows starting from the page on display.
    pub fn request_select(&mut self, n: NonZeroUsize) -> SessionResult<Accumulation> {
        let page = self
            .catalog
            .current_page
            .as_ref()
            .ok_or(SessionError::NoPageLoaded)?;
        let accumulation = self.selection.request_select(n, &page.rows);
        info!(
            requested = n.get(),
            page = page.number,
            added = accumulation.added,
            pending = accumulation.pending,
            "bulk selection"
        );
        Ok(accumulation)
    }

    /// Parses user input and bulk-selects.
    pub fn request_select_input(&mut self, input: &str) -> SessionResult<Accumulation> {
        let n = parse_select_count(input)?;
        self.request_select(n)
    }

    /// Toggles one row of the page on display. Returns true if it is now
    /// selected.
    pub fn toggle_row(&mut self, id: RowId) -> SessionResult<bool> {
        let page = self
            .catalog
            .current_page
            .as_ref()
            .ok_or(SessionError::NoPageLoaded)?;
        let row = page.row(id).ok_or(SessionError::RowNotOnPage(id))?;
        Ok(self.selection.toggle(row))
    }

    /// Clears the selection. Any pending count is kept.
    pub fn clear_selection(&mut self) {
        self.selection.replace_selection(Vec::new());
    }

    // ── Auto-fill ────────────────────────────────────────────────

    /// Scans pages after the one on display until the pending count is paid,
    /// the catalog ends, or `max_pages` pages have been scanned.
    ///
    /// Up to `prefetch_depth` pages are fetched at once; completions are
    /// reconciled in ascending page order regardless of when they finish.
    /// The displayed page does not change.
    pub async fn fill_pending(&mut self, max_pages: Option<u32>) -> SessionResult<FillReport> {
        let start = self.require_page()?.number;
        let last = self.catalog.page_count();
        let limit = max_pages.unwrap_or(self.config.max_fill_pages);
        let stop = last.min(start.saturating_add(limit));
        let page_size = self.config.page_size;
        let depth = u32::try_from(self.config.prefetch_depth).unwrap_or(u32::MAX);

        let mut report = FillReport {
            pending: self.selection.pending(),
            ..Default::default()
        };
        if report.pending == 0 || start >= stop {
            return Ok(report);
        }
        info!(from = start + 1, to = stop, pending = report.pending, "filling pending selection");

        let source = &self.source;
        let mut next = start + 1;
        'batches: while next <= stop && self.selection.pending() > 0 {
            let batch_end = stop.min(next.saturating_add(depth - 1));
            let mut sequencer = ArrivalSequencer::new();
            let mut in_flight = FuturesUnordered::new();
            for number in next..=batch_end {
                let ticket = sequencer.issue(number);
                in_flight.push(async move { (ticket, source.fetch_page(number, page_size).await) });
            }

            while let Some((ticket, result)) = in_flight.next().await {
                for arrival in sequencer.complete(ticket, result) {
                    match arrival.outcome {
                        Ok(response) => {
                            let step = self.selection.on_page_arrived(&response.rows);
                            report.pages_scanned.push(arrival.page);
                            report.added += step.added;
                            if step.is_satisfied() {
                                break 'batches;
                            }
                        }
                        Err(error) => {
                            warn!(page = arrival.page, error = %error, "auto-fill stopped");
                            report.failed = Some(FailedPage {
                                page: arrival.page,
                                error,
                            });
                            break 'batches;
                        }
                    }
                }
            }
            next = batch_end + 1;
        }

        report.pending = self.selection.pending();
        info!(
            pages = report.pages_scanned.len(),
            added = report.added,
            pending = report.pending,
            "fill finished"
        );
        Ok(report)
    }
}
