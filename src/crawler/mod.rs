// src/crawler/mod.rs
// =============================================================================
// This module is the traversal engine - the concurrency core of the tool.
//
// Submodules:
// - engine: The orchestrator that spawns and expands crawl tasks
// - visited: Concurrency-safe claim-once set of URLs
// - tracker: Completion signal over a dynamically-growing set of tasks
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod engine;
mod tracker;
mod visited;

// Re-export the engine's entry point
// Users write `crawler::Crawler` instead of `crawler::engine::Crawler`
pub use engine::Crawler;
