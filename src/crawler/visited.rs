// src/crawler/visited.rs
// =============================================================================
// This module implements the visited-URL set - the one piece of state that
// every crawl task shares.
//
// The whole API is a single atomic operation: "claim this URL if nobody has
// claimed it yet". That check-and-mark happens under one mutex lock, so when
// two tasks race on the same URL, exactly one of them wins the claim and
// fetches the page; everyone else backs off. Entries are never removed -
// the set only grows for the lifetime of one crawl.
//
// Rust concepts:
// - Mutex: Mutual exclusion so only one task touches the set at a time
// - HashSet: O(1) membership checks, no duplicates
// - Interior mutability: &self methods that still mutate (through the lock)
// =============================================================================

use std::collections::HashSet;
use std::sync::Mutex;

// Concurrency-safe record of which URLs have been claimed for fetching
//
// This is the sole synchronization point preventing duplicate fetches of the
// same URL. It hands out each URL exactly once, no matter how many tasks ask.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Claims a URL for fetching
    //
    // Returns:
    //   true  = somebody already claimed it, caller must stop
    //   false = the caller now exclusively owns this URL
    //
    // HashSet::insert returns true when the value was newly inserted, which
    // is the opposite of what we want to report, hence the `!`. The lookup
    // and the insert are a single operation under the lock - there is no
    // window where two callers can both see "unclaimed".
    pub fn claim(&self, url: &str) -> bool {
        let mut urls = self.urls.lock().unwrap();
        !urls.insert(url.to_string())
    }

    // Copies the current contents out as a Vec
    //
    // The engine only calls this after the completion signal has fired, at
    // which point nothing is mutating the set anymore and the copy is the
    // final answer. Order is whatever the HashSet happens to iterate in -
    // the crawl makes no ordering promises.
    pub fn snapshot(&self) -> Vec<String> {
        self.urls.lock().unwrap().iter().cloned().collect()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why std::sync::Mutex and not tokio::sync::Mutex?
//    - The critical section is tiny (one hash lookup + insert) and never
//      awaits anything
//    - For short, non-async critical sections the std mutex is the right
//      tool even inside async code - tokio's own docs say so
//
// 2. Why does claim() take &self but still mutate?
//    - This is "interior mutability": the Mutex owns the HashSet, and
//      locking it gives us temporary mutable access
//    - That's what lets many tasks share one &VisitedSet (via Arc) and all
//      call claim() concurrently
//
// 3. Why .unwrap() on lock()?
//    - lock() only fails if another thread panicked while holding the lock
//      (a "poisoned" mutex)
//    - If that happens our crawl state is broken anyway, so propagating the
//      panic is the honest thing to do
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_claim_wins_second_backs_off() {
        let visited = VisitedSet::new();
        assert!(!visited.claim("https://example.com/")); // first claim: ours
        assert!(visited.claim("https://example.com/")); // second: already taken
        assert_eq!(visited.snapshot().len(), 1);
    }

    #[test]
    fn test_distinct_urls_are_independent() {
        let visited = VisitedSet::new();
        assert!(!visited.claim("https://example.com/a"));
        assert!(!visited.claim("https://example.com/b"));
        assert_eq!(visited.snapshot().len(), 2);
    }

    #[test]
    fn test_snapshot_contains_all_claimed_urls() {
        let visited = VisitedSet::new();
        visited.claim("https://example.com/a");
        visited.claim("https://example.com/b");

        let mut snapshot = visited.snapshot();
        snapshot.sort();
        assert_eq!(
            snapshot,
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_exactly_one_winner_under_concurrency() {
        // Hammer one URL from many tasks at once; exactly one claim may
        // come back "false" (i.e., "you own it")
        let visited = Arc::new(VisitedSet::new());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let visited = Arc::clone(&visited);
            handles.push(tokio::spawn(async move {
                visited.claim("https://example.com/contested")
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if !handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(visited.snapshot().len(), 1);
    }
}
