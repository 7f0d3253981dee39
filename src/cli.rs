// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Default values: clap fills them in when a flag is omitted
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "crawl-scout",
    version = "0.1.0",
    about = "A CLI tool to recursively crawl a website and collect every URL it can reach",
    long_about = "crawl-scout starts at a seed URL, follows every hyperlink it finds up to a \
                  configurable depth, and prints the set of distinct URLs it reached. \
                  Fetches run concurrently, capped by the --concurrency limit."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed)
    pub seed_url: String,

    /// Maximum crawl depth in link hops from the seed
    ///
    /// Depth 1 = fetch just the seed page (its links are collected but not followed)
    /// Depth 2 = seed page + every page it links to
    /// etc. Depth 0 fetches nothing at all.
    ///
    /// #[arg(long, default_value_t = 2)] creates --depth flag with default value
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Maximum number of page fetches allowed in flight at once
    ///
    /// Must be at least 1 - a limit of 0 would leave the very first fetch
    /// waiting forever for a slot that never opens.
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Output results in JSON format instead of a plain listing
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - This tool does exactly one thing: crawl a site
//    - A bare Parser struct keeps the invocation short: crawl-scout <URL>
//    - If we ever add modes (e.g., sitemap export), we'd switch to an enum
//      of subcommands like larger clap applications do
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic (including --help and --version)
//    - Debug: generates code to print the struct for debugging
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 4. What is usize?
//    - An unsigned integer type that's the size of a pointer
//    - Used for sizes, lengths, and counts
//    - Being unsigned also means "depth must be >= 0" holds by construction
// -----------------------------------------------------------------------------
