// Page-scoped fetch supersession. A user action that triggers a new fetch
// invalidates any in-flight one: each fetch takes a ticket, and only the most
// recently issued ticket may commit its result. Stale completions are dropped
// instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct FetchCoordinator {
    latest: AtomicU64,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new fetch, superseding all previous tickets.
    pub fn begin(&self) -> FetchTicket<'_> {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            seq,
            coordinator: self,
        }
    }
}

#[derive(Debug)]
pub struct FetchTicket<'a> {
    seq: u64,
    coordinator: &'a FetchCoordinator,
}

impl FetchTicket<'_> {
    /// True while no newer fetch has been started.
    pub fn is_current(&self) -> bool {
        self.coordinator.latest.load(Ordering::SeqCst) == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ticket_is_current() {
        let coordinator = FetchCoordinator::new();
        let ticket = coordinator.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let coordinator = FetchCoordinator::new();
        let first = coordinator.begin();
        let second = coordinator.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn supersession_is_transitive() {
        let coordinator = FetchCoordinator::new();
        let tickets: Vec<_> = (0..4).map(|_| coordinator.begin()).collect();
        for stale in &tickets[..3] {
            assert!(!stale.is_current());
        }
        assert!(tickets[3].is_current());
    }
}
