// src/crawler/engine.rs
// =============================================================================
// This module implements the crawl orchestrator - the concurrency core of
// the whole tool.
//
// How it works:
// 1. The caller spawns a root task with (seed URL, depth budget)
// 2. Every task claims its URL in the shared visited set; losers of that
//    race stop immediately
// 3. A task with depth budget left acquires a semaphore permit, fetches the
//    page, releases the permit
// 4. Each discovered link becomes a new child task with depth - 1
// 5. A shared task tracker counts live tasks; when the count hits zero the
//    caller wakes up and snapshots the visited set
//
// The semaphore bounds only the fetch itself: claiming, spawning and link
// bookkeeping never hold a permit, so a link-dense page can't starve the
// rest of the crawl while it expands its children.
//
// Rust concepts:
// - Arc: Shared ownership of the crawl state across all spawned tasks
// - tokio::spawn: One lightweight task per (URL, depth) unit of work
// - Semaphore: Counting permits = max fetches in flight
// - Generics: The engine works with any Fetcher implementation
// =============================================================================

use anyhow::{bail, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::tracker::TaskTracker;
use super::visited::VisitedSet;
use crate::fetcher::Fetcher;

// Crawls a link graph using any Fetcher implementation
//
// The Crawler itself only owns the fetcher; everything that is per-crawl
// (visited set, limiter, tracker) is created fresh inside crawl(), so one
// Crawler can run independent crawls back to back.
pub struct Crawler<F> {
    fetcher: Arc<F>,
}

// Everything the spawned tasks share for the duration of one crawl
struct CrawlState<F> {
    fetcher: Arc<F>,
    visited: VisitedSet,
    limiter: Semaphore,
    tracker: TaskTracker,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    // Crawls outward from `seed`, following links up to `depth` hops, with
    // at most `concurrency` page fetches in flight at any moment.
    //
    // Returns the unordered set of distinct URLs reached. Individual page
    // failures stop only their own branch and are reported as warnings on
    // stderr - they never fail the crawl as a whole.
    //
    // Errors:
    //   - concurrency of 0 is rejected up front: the first fetch would wait
    //     forever for a permit that can never be granted
    pub async fn crawl(
        &self,
        seed: &str,
        depth: usize,
        concurrency: usize,
    ) -> Result<Vec<String>> {
        if concurrency == 0 {
            bail!("concurrency limit must be at least 1 (a limit of 0 would deadlock the first fetch)");
        }

        let state = Arc::new(CrawlState {
            fetcher: Arc::clone(&self.fetcher),
            visited: VisitedSet::new(),
            limiter: Semaphore::new(concurrency),
            tracker: TaskTracker::new(),
        });

        // Kick off the root task, then block until the entire tree of tasks
        // (root plus everything it transitively spawned) has terminated.
        // We can't know how many tasks that will be - pages decide that -
        // which is exactly what the tracker is for.
        spawn_task(Arc::clone(&state), seed.to_string(), depth);
        state.tracker.wait().await;

        // Nothing is running anymore, so this copy is the final answer
        Ok(state.visited.snapshot())
    }
}

// Spawns one crawl task for (url, depth)
//
// The tracker registration happens HERE, before the spawn, not inside the
// spawned task. A parent calling this therefore raises the live-task count
// before its own task finishes, and the count can never touch zero while
// children are still waiting to start.
fn spawn_task<F: Fetcher>(state: Arc<CrawlState<F>>, url: String, depth: usize) {
    state.tracker.register();
    tokio::spawn(async move {
        run_task(&state, url, depth).await;
        state.tracker.deregister();
    });
}

// Executes a single crawl task from claim to expansion
//
// Terminal outcomes:
//   - already claimed        -> stop (someone else owns this URL)
//   - depth budget exhausted -> stop (URL is recorded, page not fetched)
//   - fetch failed           -> stop this branch, warn on stderr
//   - fetch succeeded        -> spawn one child per link and finish
async fn run_task<F: Fetcher>(state: &Arc<CrawlState<F>>, url: String, depth: usize) {
    // Claim first, depth check second. A URL that arrives with an empty
    // depth budget is still recorded as reached - we saw it, we just don't
    // fetch it - and the claim is atomic, so of all the tasks racing on
    // this URL exactly one gets past this line.
    if state.visited.claim(&url) {
        return;
    }
    if depth == 0 {
        return;
    }

    // Hold a permit for the duration of the fetch and nothing else.
    // The permit is released when `_permit` drops at the end of this block,
    // on the error path just the same as on the success path.
    let links = {
        let _permit = state
            .limiter
            .acquire()
            .await
            .expect("crawl limiter closed unexpectedly");
        println!("  Crawling [depth {}]: {}", depth, url);
        state.fetcher.get_links(&url).await
    };

    match links {
        Ok(links) => {
            // One child task per discovered link, each with one less hop of
            // budget. This task is done once the children are spawned -
            // their completion is the tracker's business, not ours.
            for link in links {
                spawn_task(Arc::clone(state), link, depth - 1);
            }
        }
        Err(e) => {
            // A dead page ends this branch and nothing else
            eprintln!("  Warning: failed to fetch {}: {}", url, e);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does recursion work here when "recursive async fn" usually doesn't?
//    - run_task never awaits itself; it hands children to tokio::spawn and
//      returns
//    - Each level of the tree lives in its own task with its own stack-less
//      future, so there is no infinitely-nested future type
//
// 2. Why acquire the permit around ONLY the fetch?
//    - The semaphore exists to cap open network connections
//    - Claiming a URL or spawning children costs microseconds and no
//      sockets, so gating those too would just serialize bookkeeping
//    - Scoping the permit to a block means the compiler releases it for us
//      on every exit path, including errors
//
// 3. Why expect() on acquire()?
//    - acquire() only fails if the semaphore has been closed, and nothing
//      in this crate ever closes it
//    - If that invariant is broken, panicking loudly beats limping on
//
// 4. Where did the task go? tokio::spawn's JoinHandle is dropped!
//    - Dropping a JoinHandle detaches the task; it keeps running
//    - We don't need handles because the tracker counts terminations -
//      that's the whole trick that lets the task set grow dynamically
// -----------------------------------------------------------------------------
