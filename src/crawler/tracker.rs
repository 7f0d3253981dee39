// src/crawler/tracker.rs
// =============================================================================
// This module implements the completion signal for the crawl.
//
// The problem it solves: we don't know up front how many tasks a crawl will
// spawn. Every fetched page can spawn more tasks, so the caller can't just
// join a fixed list of handles. Instead we keep a live-task counter:
//
//   - +1 every time a task is spawned (the root included)
//   - -1 every time a task reaches a terminal state
//   - when the count returns to zero, the whole tree is done and we wake
//     the waiting caller
//
// The one rule that makes this correct: a parent registers each child BEFORE
// its own deregister runs. That way the counter can never dip to zero while
// unspawned children are still pending in some parent's loop.
//
// Rust concepts:
// - AtomicUsize: Lock-free shared counter
// - tokio::sync::Notify: Wake up a waiting task without polling
// - Memory ordering: SeqCst keeps counter updates and wakeups consistent
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

// Join counter over all live crawl tasks
//
// Fires (wakes waiters) exactly when the number of outstanding tasks drops
// back to zero.
#[derive(Debug, Default)]
pub struct TaskTracker {
    outstanding: AtomicUsize,
    done: Notify,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a task has been spawned. Call BEFORE the spawn itself.
    pub fn register(&self) {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
    }

    // Records that a task reached a terminal state
    //
    // fetch_sub returns the value BEFORE the subtraction, so seeing 1 here
    // means we were the last live task - time to wake the caller.
    pub fn deregister(&self) {
        if self.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.done.notify_waiters();
        }
    }

    // Blocks until every registered task has deregistered
    //
    // The loop handles the classic lost-wakeup race. notify_waiters() only
    // reaches futures that have already registered interest, so we pin the
    // notified() future and enable() it BEFORE checking the counter. If the
    // last task finishes in between, either the check sees zero and we
    // return without sleeping, or the enabled future has already caught the
    // notification.
    pub async fn wait(&self) {
        loop {
            let notified = self.done.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.outstanding.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not just collect JoinHandles and await them all?
//    - The set of tasks grows while we're waiting: a task we're joining may
//      spawn three more, and those handles live inside that task, not in
//      the caller's list
//    - A shared counter doesn't care where a task was spawned from
//
// 2. What is Notify?
//    - tokio's "wake me up" primitive: one side calls notified().await,
//      the other side calls notify_waiters()
//    - It carries no data - the counter is the data, Notify is just the
//      doorbell
//    - enable() is the subtle part: notify_waiters() skips futures that
//      haven't registered yet, and enable() registers without awaiting
//
// 3. Why SeqCst ordering?
//    - The register/deregister pairs and the waiter's zero-check all have
//      to agree on one global order of events
//    - Relaxed orderings could let the waiter read a stale count
//    - This counter is touched once per page fetch, so the cost of the
//      strongest ordering is irrelevant here
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_returns_immediately_when_nothing_outstanding() {
        let tracker = TaskTracker::new();
        // No tasks were ever registered; wait() must not hang
        tracker.wait().await;
    }

    #[tokio::test]
    async fn test_wait_returns_after_last_deregister() {
        let tracker = Arc::new(TaskTracker::new());

        tracker.register();
        tracker.register();

        let waiter = {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move { tracker.wait().await })
        };

        tracker.deregister();
        tracker.deregister();

        // The waiter must complete promptly once the count hits zero
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("completion signal never fired")
            .unwrap();
    }

    #[tokio::test]
    async fn test_wait_after_completion_returns_immediately() {
        let tracker = TaskTracker::new();
        tracker.register();
        tracker.deregister();

        // Even though notify_waiters() already ran with nobody listening,
        // the zero-check makes this return without sleeping
        tokio::time::timeout(Duration::from_secs(1), tracker.wait())
            .await
            .expect("wait() hung after completion");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_dynamically_growing_task_tree_terminates() {
        // Simulate the crawl pattern: tasks register children before they
        // deregister themselves
        let tracker = Arc::new(TaskTracker::new());

        fn spawn_level(tracker: Arc<TaskTracker>, fanout: usize, depth: usize) {
            tracker.register();
            tokio::spawn(async move {
                if depth > 0 {
                    for _ in 0..fanout {
                        spawn_level(Arc::clone(&tracker), fanout, depth - 1);
                    }
                }
                tracker.deregister();
            });
        }

        spawn_level(Arc::clone(&tracker), 3, 3);

        tokio::time::timeout(Duration::from_secs(5), tracker.wait())
            .await
            .expect("tracker never signalled completion");

        // A second wait after completion must also return immediately
        tracker.wait().await;
    }
}
