//! Debounced coalescing for search-as-you-type fetches.
//!
//! Each filter change issues a [`Ticket`]; issuing one invalidates every
//! earlier ticket. A fetch only goes out if its ticket survives the delay,
//! and its result is only applied if the ticket is still current when the
//! response arrives. The most recent filter state always wins, regardless
//! of arrival order or the underlying executor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delay between the last keystroke and the request it settles into.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Issues generation-numbered tickets; the newest one wins.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding tickets and issue a fresh one.
    pub fn issue(&self) -> Ticket {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation: Arc::clone(&self.generation),
            issued,
        }
    }
}

/// One scheduled fetch attempt.
#[derive(Debug)]
pub struct Ticket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl Ticket {
    /// True while no newer ticket has been issued.
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }

    /// Wait out the debounce delay. Returns false when a newer ticket
    /// superseded this one in the meantime: the fetch must not be issued.
    pub async fn settle(&self, delay: Duration) -> bool {
        if !delay.is_zero() {
            sleep(delay).await;
        }
        self.is_current()
    }
}

/// Timer that works in the browser and in native test builds.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn newest_ticket_wins() {
        let debouncer = Debouncer::new();
        let first = debouncer.issue();
        let second = debouncer.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[tokio::test]
    async fn superseded_ticket_settles_stale() {
        let debouncer = Debouncer::new();
        let first = debouncer.issue();
        let second = debouncer.issue();
        assert!(!first.settle(Duration::from_millis(1)).await);
        assert!(second.settle(Duration::from_millis(1)).await);
    }

    #[tokio::test]
    async fn rapid_changes_fetch_once_with_the_final_state() {
        let debouncer = Debouncer::new();
        let fetches = Arc::new(AtomicUsize::new(0));

        let mut tasks = Vec::new();
        for query in ["d", "du", "dune"] {
            let ticket = debouncer.issue();
            let fetches = Arc::clone(&fetches);
            tasks.push(tokio::spawn(async move {
                if ticket.settle(Duration::from_millis(20)).await {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    return Some(query);
                }
                None
            }));
        }

        let mut applied = None;
        for task in tasks {
            if let Some(query) = task.await.unwrap() {
                applied = Some(query);
            }
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(applied, Some("dune"));
    }

    #[tokio::test]
    async fn response_of_a_stale_request_is_not_applied() {
        let debouncer = Debouncer::new();
        let slow = debouncer.issue();
        assert!(slow.settle(Duration::ZERO).await);

        // A newer request starts while the first is still in flight; the
        // first response must be dropped on arrival.
        let fresh = debouncer.issue();
        assert!(!slow.is_current());
        assert!(fresh.is_current());
    }
}
