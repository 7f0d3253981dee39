// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the crawl starting from the seed URL
// 3. Print every URL that was reached (plain listing or JSON)
// 4. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl runs many network fetches concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on success vs. failure
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawler; // src/crawler/ - the concurrent traversal engine
mod fetcher; // src/fetcher/ - HTTP fetching and link extraction

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawler::Crawler;
use fetcher::HttpFetcher;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed
//   Err = configuration or startup error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Crawling from seed: {}", cli.seed_url);
    println!("📊 Max depth: {} | Concurrency limit: {}", cli.depth, cli.concurrency);

    // Build the HTTP fetcher and the crawl engine around it
    let crawler = Crawler::new(HttpFetcher::new()?);

    // Run the crawl. This returns only after every spawned task - the root
    // and everything it transitively discovered - has finished.
    // Per-page failures have already been reported as warnings; only a bad
    // configuration (e.g., --concurrency 0) comes back as Err here.
    let urls = crawler
        .crawl(&cli.seed_url, cli.depth, cli.concurrency)
        .await?;

    print_results(&cli, urls)?;

    Ok(0)
}

// What we hand to serde for --json output
//
// #[derive(Serialize)] generates the JSON conversion code for us
#[derive(Serialize)]
struct CrawlSummary {
    seed: String,
    depth: usize,
    total: usize,
    urls: Vec<String>,
}

// Prints the collected URLs either as a plain listing or as JSON
fn print_results(cli: &Cli, mut urls: Vec<String>) -> Result<()> {
    // The crawl makes no ordering promises, so sort for stable output
    urls.sort();

    if cli.json {
        let summary = CrawlSummary {
            seed: cli.seed_url.clone(),
            depth: cli.depth,
            total: urls.len(),
            urls,
        };

        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(&summary)?;
        println!("{}", json_output);
    } else {
        println!();
        for url in &urls {
            println!("{}", url);
        }

        println!();
        println!("📊 Summary:");
        println!("   📋 URLs reached: {}", urls.len());
    }

    Ok(())
}
