// src/fetcher/mod.rs
// =============================================================================
// This module is the crawler's view of the outside world: "give me a URL,
// I'll give you back the links on that page".
//
// Submodules:
// - http: Fetches pages over HTTP with reqwest
// - html: Extracts and resolves links from HTML pages
//
// The key export is the Fetcher trait - a single-method interface that the
// crawl engine depends on. The engine never learns how the page was fetched
// or parsed, so tests swap in a canned in-memory fetcher and the production
// binary plugs in HttpFetcher.
//
// Rust concepts:
// - Traits: Interfaces that multiple types can implement
// - BoxFuture: A boxed, type-erased future, so the trait stays object-safe
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

use anyhow::Result;
use futures::future::BoxFuture;

// Declare submodules (tells Rust to include these files)
mod html;
mod http;

// Re-export the production implementation from its submodule
// This lets users write `fetcher::HttpFetcher` instead of
// `fetcher::http::HttpFetcher`
pub use http::HttpFetcher;

// The capability the crawl engine needs: turn a URL into the absolute URLs
// that page links to.
//
// Contract:
// - Returned URLs are absolute (relative hrefs already resolved)
// - Duplicates within one page are allowed; deduplication is the engine's job
// - A failed fetch (network error, non-success status) returns Err, and the
//   engine treats it as "zero links, this branch stops here"
// - A single malformed href is dropped from the result, it never fails the
//   whole fetch
//
// Send + Sync + 'static because implementations are shared (via Arc) across
// the spawned crawl tasks.
pub trait Fetcher: Send + Sync + 'static {
    /// Fetch the page at `url` and return the outbound links found on it.
    fn get_links<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<String>>>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly from the engine?
//    - The engine's logic (dedup, depth, concurrency) has nothing to do with
//      HTTP - it only cares about "URL in, links out"
//    - With a trait, tests use an in-memory fake with no network at all
//    - This is the Rust version of "program to an interface"
//
// 2. What is BoxFuture?
//    - async fn in traits doesn't give us an object-safe trait (yet), and
//      the compiler can't name the future type across implementations
//    - BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>
//    - The implementation writes Box::pin(async move { ... }) and we get a
//      uniform, Send-able future the engine can await inside spawned tasks
//
// 3. Why Send + Sync + 'static on the trait?
//    - The engine wraps the fetcher in an Arc and clones it into every
//      tokio::spawn'd task
//    - Those tasks may run on different threads, so the fetcher must be safe
//      to share (Sync) and to move between threads (Send)
// -----------------------------------------------------------------------------
