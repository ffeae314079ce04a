// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There is exactly one operation (mirror a subtree), so instead of
// subcommands we take the seed URL as a positional argument plus a
// handful of scoping flags. Every flag default reproduces the behavior
// you get from just passing a seed URL.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "docs-mirror",
    version = "0.1.0",
    about = "Mirror a documentation site subtree as local Markdown files",
    long_about = "docs-mirror crawls a documentation site breadth-first, starting from a seed URL \
                  and staying on one host under one path prefix. Every HTML page is converted to \
                  Markdown and written to a file tree mirroring the URL paths."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g. https://sdk.mystenlabs.com/typescript)
    ///
    /// This is a positional argument (required, no flag needed)
    pub seed_url: String,

    /// Allowed host; pages on any other host are never fetched
    ///
    /// Defaults to the seed URL's host
    #[arg(long)]
    pub host: Option<String>,

    /// URL path prefix pages must live under to be in scope
    ///
    /// Defaults to the seed URL's path
    #[arg(long)]
    pub prefix: Option<String>,

    /// Safety cap on the number of pages processed
    #[arg(long, default_value_t = 200)]
    pub max_pages: usize,

    /// Output root directory for the mirrored Markdown tree
    #[arg(long, default_value = "docs-mirror")]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the crawl summary as JSON instead of a human-readable report
    #[arg(long)]
    pub json: bool,
}
