//! Selection state.

use artbrowse_types::{Row, RowId};
use serde::{Deserialize, Serialize};

/// The selection owned by a browsing session.
///
/// `selected` is unique by row id and ordered by when each row was selected.
/// `pending` is the number of rows still owed to the most recent bulk request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected: Vec<Row>,
    pub pending: usize,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.selected.iter().map(|r| r.id)
    }
}
