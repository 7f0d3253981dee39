// src/fetcher/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs to absolute URLs (like a browser does)
//
// Rust concepts:
// - Iterators: For processing collections
// - Option<T>: For links that turn out to be unusable
// - Borrowing: We only ever borrow the HTML, never copy it
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all links from HTML content as absolute URLs
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   page_url: the URL the page was fetched from (for resolving relative links)
//
// Returns: Vec<String> containing all absolute http/https URLs found.
// Duplicates are kept - one page may link to the same place twice, and
// deduplication is the crawl engine's job, not ours.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   page_url = https://example.com
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, page_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    // Select all <a> elements with href attributes
    for element in document.select(&selector) {
        // Get the href attribute value
        if let Some(href) = element.value().attr("href") {
            // Try to convert this to an absolute URL
            // A href that doesn't resolve is dropped silently - one bad link
            // on a page should never fail the whole fetch
            if let Some(absolute_url) = resolve_url(page_url, href) {
                // Only keep HTTP/HTTPS links
                if is_crawlable(&absolute_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

// Resolves a possibly-relative href to an absolute URL
//
// Parameters:
//   base: the URL of the current page
//   href: the href value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) or None if invalid
//
// Examples:
//   base = "https://example.com/a/"
//   href = "b/c" -> Some("https://example.com/a/b/c")
//   href = "/page2" -> Some("https://example.com/page2")
//   href = "https://other.com" -> Some("https://other.com/")
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    // Skip anchors and non-navigational schemes up front
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // Url::join handles both cases for us:
    // - an absolute href replaces the base entirely
    // - a relative href is resolved against the base, the same way a
    //   browser would resolve it
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => None, // Invalid URL, skip it
    }
}

// Checks if a URL is something we can actually crawl
//
// We skip:
// - data: links (inline data)
// - file: links (local files)
// - anything else that isn't plain HTTP(S)
fn is_crawlable(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. What is the url crate?
//    - Handles URL parsing and manipulation
//    - Url::parse() parses a string into a Url struct
//    - url.join() resolves relative URLs (like a browser does)
//    - Example: "https://example.com/a/" + "b/c" = "https://example.com/a/b/c"
//
// 3. Why Option<String> return type for resolve_url?
//    - Some hrefs are anchors, javascript:, or plain garbage
//    - Returning Option lets us represent "no usable URL here"
//    - The caller just skips None entries and keeps going
//
// 4. Why keep duplicates within one page?
//    - The fetcher contract says "return what the page links to"
//    - The crawl engine already deduplicates globally via its visited set,
//      so filtering here would be redundant work in two places
//
// 5. Why unwrap() on the selector?
//    - Selector::parse can fail if the CSS selector is invalid
//    - Our selector "a[href]" is constant and known to be valid
//    - If it fails, the program should panic (programmer error)
//    - Generally avoid unwrap() on user input!
// -----------------------------------------------------------------------------
