//! Visitation-order release of page fetch completions.
//!
//! Fetches may complete in any order, but the accumulator must see pages in
//! the order they were visited. Each fetch takes a ticket when issued; a
//! completion is held back until every earlier ticket has completed.

use std::collections::BTreeMap;
use tracing::debug;

/// Handle for one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    page: u32,
}

impl Ticket {
    /// Page number the ticket was issued for.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A completion released in visitation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival<T> {
    pub page: u32,
    pub outcome: T,
}

/// Reorders completions into issue order.
#[derive(Debug)]
pub struct ArrivalSequencer<T> {
    next_issue: u64,
    next_release: u64,
    buffered: BTreeMap<u64, Arrival<T>>,
}

impl<T> Default for ArrivalSequencer<T> {
    fn default() -> Self {
        Self {
            next_issue: 0,
            next_release: 0,
            buffered: BTreeMap::new(),
        }
    }
}

impl<T> ArrivalSequencer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a fetch of `page`. Tickets must be issued in
    /// visitation order.
    pub fn issue(&mut self, page: u32) -> Ticket {
        let ticket = Ticket {
            seq: self.next_issue,
            page,
        };
        self.next_issue += 1;
        ticket
    }

    /// Records a completion and returns every arrival now releasable, in
    /// issue order.
    ///
    /// Completing the same ticket twice, or a ticket this sequencer never
    /// issued, is ignored.
    pub fn complete(&mut self, ticket: Ticket, outcome: T) -> Vec<Arrival<T>> {
        if ticket.seq < self.next_release
            || ticket.seq >= self.next_issue
            || self.buffered.contains_key(&ticket.seq)
        {
            debug!(page = ticket.page, "ignoring stale completion");
            return Vec::new();
        }

        self.buffered.insert(
            ticket.seq,
            Arrival {
                page: ticket.page,
                outcome,
            },
        );

        let mut released = Vec::new();
        while let Some(arrival) = self.buffered.remove(&self.next_release) {
            released.push(arrival);
            self.next_release += 1;
        }
        if !self.buffered.is_empty() {
            debug!(
                buffered = self.buffered.len(),
                waiting_for = self.next_release,
                "holding out-of-order completions"
            );
        }
        released
    }

    /// Completions held back waiting for an earlier ticket.
    pub fn buffered(&self) -> usize {
        self.buffered.len()
    }

    /// Tickets issued but not yet released.
    pub fn outstanding(&self) -> u64 {
        self.next_issue - self.next_release
    }

    /// Returns true once every issued ticket has been released.
    pub fn is_idle(&self) -> bool {
        self.outstanding() == 0
    }
}
