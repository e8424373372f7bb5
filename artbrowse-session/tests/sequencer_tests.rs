use artbrowse_session::{Arrival, ArrivalSequencer};
use pretty_assertions::assert_eq;

fn pages<T>(arrivals: &[Arrival<T>]) -> Vec<u32> {
    arrivals.iter().map(|a| a.page).collect()
}

// ── Ordering ────────────────────────────────────────────────────

#[test]
fn in_order_completions_release_immediately() {
    let mut seq = ArrivalSequencer::new();
    let a = seq.issue(4);
    let b = seq.issue(5);

    assert_eq!(pages(&seq.complete(a, "four")), vec![4]);
    assert_eq!(seq.complete(b, "five"), vec![Arrival { page: 5, outcome: "five" }]);
    assert!(seq.is_idle());
}

#[test]
fn out_of_order_completions_are_buffered() {
    let mut seq = ArrivalSequencer::new();
    let a = seq.issue(2);
    let b = seq.issue(3);
    let c = seq.issue(4);

    assert!(seq.complete(c, 'c').is_empty());
    assert!(seq.complete(b, 'b').is_empty());
    assert_eq!(seq.buffered(), 2);
    assert_eq!(seq.outstanding(), 3);

    let released = seq.complete(a, 'a');
    assert_eq!(pages(&released), vec![2, 3, 4]);
    let outcomes: Vec<char> = released.into_iter().map(|a| a.outcome).collect();
    assert_eq!(outcomes, vec!['a', 'b', 'c']);
    assert_eq!(seq.buffered(), 0);
    assert!(seq.is_idle());
}

#[test]
fn partial_release_stops_at_gap() {
    let mut seq = ArrivalSequencer::new();
    let a = seq.issue(1);
    let b = seq.issue(2);
    let c = seq.issue(3);

    assert!(seq.complete(b, ()).is_empty());
    assert_eq!(pages(&seq.complete(a, ())), vec![1, 2]);
    assert_eq!(seq.outstanding(), 1);
    assert_eq!(pages(&seq.complete(c, ())), vec![3]);
}

#[test]
fn ticket_remembers_its_page() {
    let mut seq: ArrivalSequencer<()> = ArrivalSequencer::new();
    assert_eq!(seq.issue(17).page(), 17);
}

// ── Misuse ──────────────────────────────────────────────────────

#[test]
fn duplicate_completion_is_ignored() {
    let mut seq = ArrivalSequencer::new();
    let a = seq.issue(1);
    let b = seq.issue(2);

    assert!(seq.complete(b, 1).is_empty());
    assert!(seq.complete(b, 2).is_empty());
    let released = seq.complete(a, 0);
    assert_eq!(released.len(), 2);
    assert_eq!(released[1].outcome, 1);

    assert!(seq.complete(a, 9).is_empty());
}

#[test]
fn ticket_never_issued_is_ignored() {
    let mut other: ArrivalSequencer<()> = ArrivalSequencer::new();
    other.issue(1);
    let foreign = other.issue(2);

    let mut seq = ArrivalSequencer::new();
    seq.issue(1);
    assert!(seq.complete(foreign, ()).is_empty());
    assert_eq!(seq.buffered(), 0);
}

#[test]
fn sequencer_works_outside_a_runtime() {
    // The sequencer is plain data; driving it from a blocking context is fine.
    let released = tokio_test::block_on(async {
        let mut seq = ArrivalSequencer::new();
        let t = seq.issue(8);
        seq.complete(t, Ok::<u32, ()>(8))
    });
    assert_eq!(released, vec![Arrival { page: 8, outcome: Ok(8) }]);
}
