//! The selection accumulator.

use crate::error::{SelectionError, SelectionResult};
use crate::state::SelectionState;
use artbrowse_types::{Row, RowId};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use tracing::debug;

/// Where the accumulator stands with respect to the last bulk request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing owed; page arrivals are ignored.
    Satisfied,
    /// Rows are still owed and every arrival is scanned.
    Accumulating { pending: usize },
}

/// Effect of one accumulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accumulation {
    /// Rows appended to the selection by this step.
    pub added: usize,
    /// Rows still owed after this step.
    pub pending: usize,
}

impl Accumulation {
    /// Returns true if the request is fully paid.
    pub fn is_satisfied(&self) -> bool {
        self.pending == 0
    }
}

/// Parses a user-typed bulk-select count.
///
/// Accepts positive integers only; zero, negatives and anything non-numeric
/// are rejected before they can reach the accumulator.
pub fn parse_select_count(input: &str) -> SelectionResult<NonZeroUsize> {
    input
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| SelectionError::InvalidCount {
            input: input.to_string(),
        })
}

/// Accumulates bulk selections across pages.
///
/// Keeps an id index alongside the ordered selection so membership checks
/// stay O(1) across manual toggles and automatic additions.
#[derive(Debug, Clone, Default)]
pub struct SelectionAccumulator {
    state: SelectionState,
    index: HashSet<RowId>,
}

impl SelectionAccumulator {
    /// Creates an empty accumulator in the satisfied phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an accumulator around an existing state.
    ///
    /// Duplicate ids in `state.selected` are dropped, keeping the first
    /// occurrence.
    pub fn from_state(state: SelectionState) -> Self {
        let mut acc = Self {
            state: SelectionState {
                selected: Vec::with_capacity(state.selected.len()),
                pending: state.pending,
            },
            index: HashSet::with_capacity(state.selected.len()),
        };
        for row in state.selected {
            acc.push_unique(row);
        }
        acc
    }

    /// Consumes the accumulator, returning the owned state.
    pub fn into_state(self) -> SelectionState {
        self.state
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Selected rows in selection order.
    pub fn selected(&self) -> &[Row] {
        &self.state.selected
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.state.selected_ids()
    }

    /// Rows still owed to the most recent bulk request.
    pub fn pending(&self) -> usize {
        self.state.pending
    }

    pub fn phase(&self) -> Phase {
        match self.state.pending {
            0 => Phase::Satisfied,
            pending => Phase::Accumulating { pending },
        }
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.index.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.state.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.selected.is_empty()
    }

    // ── Bulk selection ───────────────────────────────────────────

    /// Starts a bulk request for `n` more rows, taking as many as possible
    /// from the page currently on display.
    ///
    /// Any previous pending count is overwritten, not added to.
    pub fn request_select(&mut self, n: NonZeroUsize, current_page_rows: &[Row]) -> Accumulation {
        let added = self.take_unselected(current_page_rows, n.get());
        self.state.pending = n.get() - added;
        debug!(
            requested = n.get(),
            added,
            pending = self.state.pending,
            "bulk selection requested"
        );
        Accumulation {
            added,
            pending: self.state.pending,
        }
    }

    /// Pays down the pending count from a newly arrived page.
    ///
    /// Cheap no-op while satisfied.
    pub fn on_page_arrived(&mut self, new_page_rows: &[Row]) -> Accumulation {
        if self.state.pending == 0 {
            return Accumulation::default();
        }
        let added = self.take_unselected(new_page_rows, self.state.pending);
        self.state.pending -= added;
        debug!(added, pending = self.state.pending, "page reconciled");
        Accumulation {
            added,
            pending: self.state.pending,
        }
    }

    /// Appends up to `limit` rows from `rows` that are not yet selected, in
    /// page order. Returns how many were appended.
    fn take_unselected(&mut self, rows: &[Row], limit: usize) -> usize {
        let mut added = 0;
        for row in rows {
            if added == limit {
                break;
            }
            if self.push_unique(row.clone()) {
                added += 1;
            }
        }
        added
    }

    fn push_unique(&mut self, row: Row) -> bool {
        if !self.index.insert(row.id) {
            return false;
        }
        self.state.selected.push(row);
        true
    }

    // ── Manual selection ─────────────────────────────────────────
    //
    // These never touch `pending`.

    /// Selects a single row. Returns false if it was already selected.
    pub fn select_row(&mut self, row: &Row) -> bool {
        self.push_unique(row.clone())
    }

    /// Deselects a row by id. Returns false if it was not selected.
    ///
    /// A deselected row becomes eligible again for a later accumulation.
    pub fn deselect(&mut self, id: RowId) -> bool {
        if !self.index.remove(&id) {
            return false;
        }
        self.state.selected.retain(|r| r.id != id);
        true
    }

    /// Flips a row's membership. Returns true if the row is now selected.
    pub fn toggle(&mut self, row: &Row) -> bool {
        if self.deselect(row.id) {
            false
        } else {
            self.push_unique(row.clone())
        }
    }

    /// Replaces the whole selection, as when the table reports a new
    /// selection wholesale. Duplicate ids keep their first occurrence.
    pub fn replace_selection(&mut self, rows: Vec<Row>) {
        self.state.selected.clear();
        self.index.clear();
        for row in rows {
            self.push_unique(row);
        }
    }
}
