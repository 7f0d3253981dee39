// src/fetcher/http.rs
// =============================================================================
// This module implements the Fetcher trait over real HTTP using reqwest.
//
// Key functionality:
// - One GET request per page (no retries - a failed branch just stops)
// - Treats non-success status codes as errors, not as empty pages
// - Hands the body to the html module for link extraction
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling with the ? operator
// - Trait implementation: Plugging a concrete type into the Fetcher interface
// =============================================================================

use anyhow::{anyhow, Result};
use futures::future::BoxFuture;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::html::extract_links;
use super::Fetcher;

// Fetches pages over HTTP and extracts their links
//
// Holds a single reqwest Client which is reused for every request
// (connection pooling). Client is internally reference-counted, so the
// whole struct stays cheap to share behind an Arc.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with reasonable settings for polite crawling
    pub fn new() -> Result<Self> {
        // Create an HTTP client with reasonable settings
        let client = Client::builder()
            .timeout(Duration::from_secs(10)) // 10 second timeout per request
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .build()?;

        Ok(Self { client })
    }

    // Fetches a web page and returns its HTML content
    //
    // A non-success status (404, 500, ...) is an error here. Returning an
    // empty body instead would make a dead page indistinguishable from a
    // page with no links, and the caller could never log the difference.
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let html = response.text().await?;
        Ok(html)
    }
}

impl Fetcher for HttpFetcher {
    // Fetch one page and return every absolute http(s) link found on it
    //
    // Error cases (malformed URL, network failure, bad status) all surface
    // as Err - the crawl engine turns that into "this branch stops here"
    fn get_links<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<String>>> {
        Box::pin(async move {
            // Parse the page URL first; we need it to resolve relative links,
            // and there is no point issuing a request for a malformed URL
            let page_url =
                Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;

            let html = self.fetch_page(url).await?;

            Ok(extract_links(&html, &page_url))
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is get_links written with Box::pin(async move { ... })?
//    - The Fetcher trait returns BoxFuture so that every implementation has
//      the same return type regardless of what its async body looks like
//    - Box::pin takes our anonymous async block and erases its type
//    - Inside the block we write completely normal async code with ?
//
// 2. Why GET and not HEAD?
//    - We need the page body to find the links in it
//    - HEAD is great for "is this link alive?" checks, useless for crawling
//
// 3. Why no retry logic?
//    - The crawl treats a failed page as a dead branch and moves on
//    - Retrying would slow the whole crawl down for pages that are most
//      likely genuinely unreachable
//    - A caller who wants retries can wrap HttpFetcher in their own Fetcher
//      implementation - that's the point of the trait
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_client() {
        // Client construction should never fail with our constant settings
        assert!(HttpFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_malformed_url_is_an_error() {
        let fetcher = HttpFetcher::new().unwrap();
        // "not a url" never hits the network - parsing fails first
        let result = fetcher.get_links("not a url").await;
        assert!(result.is_err());
    }
}
