use artbrowse_types::{CatalogState, Page, Row, RowId};
use proptest::prelude::*;

fn page(number: u32, size: u32, ids: &[u64]) -> Page {
    Page::new(number, size, ids.iter().map(|&id| Row::new(id)).collect())
}

// ── Page ──────────────────────────────────────────────────────────

#[test]
fn page_preserves_row_order() {
    let p = page(1, 12, &[9, 3, 7]);
    let ids: Vec<RowId> = p.ids().collect();
    assert_eq!(ids, vec![RowId::new(9), RowId::new(3), RowId::new(7)]);
    assert_eq!(p.len(), 3);
    assert!(p.row(RowId::new(3)).is_some());
    assert!(p.row(RowId::new(4)).is_none());
}

#[test]
fn record_range_for_middle_page() {
    let p = page(3, 12, &[]);
    assert_eq!(p.first_record(100), 25);
    assert_eq!(p.last_record(100), 36);
}

#[test]
fn record_range_caps_at_total() {
    let p = page(9, 12, &[]);
    assert_eq!(p.first_record(100), 97);
    assert_eq!(p.last_record(100), 100);
}

#[test]
fn record_range_for_empty_catalog() {
    let p = page(1, 12, &[]);
    assert_eq!(p.first_record(0), 0);
    assert_eq!(p.last_record(0), 0);
}

// ── CatalogState ──────────────────────────────────────────────────

#[test]
fn catalog_state_starts_empty() {
    let state = CatalogState::new(12);
    assert_eq!(state.total_records, 0);
    assert_eq!(state.page_count(), 0);
    assert_eq!(state.current_number(), None);
    assert!(!state.has_next());
    assert!(!state.has_previous());
    assert_eq!(state.summary(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn catalog_state_zero_page_size_is_clamped() {
    assert_eq!(CatalogState::new(0).page_size, 1);
}

#[test]
fn catalog_state_navigation_flags() {
    let mut state = CatalogState::new(12);
    state.set_page(page(1, 12, &[1, 2]), 30);
    assert_eq!(state.page_count(), 3);
    assert!(state.has_next());
    assert!(!state.has_previous());

    state.set_page(page(3, 12, &[25]), 30);
    assert!(!state.has_next());
    assert!(state.has_previous());
    assert_eq!(state.summary(), "Showing 25 to 30 of 30 entries");
}

proptest! {
    #[test]
    fn page_count_covers_every_record(total in 0u64..100_000, size in 1u32..200) {
        let mut state = CatalogState::new(size);
        state.total_records = total;
        let pages = u64::from(state.page_count());
        prop_assert!(pages * u64::from(size) >= total);
        if pages > 0 {
            prop_assert!((pages - 1) * u64::from(size) < total);
        }
    }
}
