// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Derive the crawl scope from the seed URL (host + path prefix)
// 3. Run the crawl session to completion
// 4. Print the summary and exit
//
// Exit codes:
//   0 = crawl completed (individual page failures do NOT change this)
//   2 = fatal error (bad seed URL, unrecoverable filesystem error)
// =============================================================================

use anyhow::{anyhow, Result};
use clap::Parser;
use docs_mirror::cli::Cli;
use docs_mirror::crawl::{CrawlConfig, CrawlReport, CrawlScope, CrawlSession};
use std::time::Duration;
use url::Url;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
//
// Returns Ok(0) when the crawl ran to completion; per-page fetch failures
// are already accounted for in the report and never change the exit code.
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let seed = Url::parse(&cli.seed_url)
        .map_err(|e| anyhow!("Invalid seed URL '{}': {}", cli.seed_url, e))?;

    // The scope defaults to "everything on the seed's host under the seed's
    // path" unless the user narrows or widens it explicitly
    let host = match cli.host {
        Some(host) => host,
        None => seed
            .host_str()
            .ok_or_else(|| anyhow!("Seed URL has no host: {}", cli.seed_url))?
            .to_string(),
    };
    let path_prefix = cli
        .prefix
        .unwrap_or_else(|| seed.path().trim_end_matches('/').to_string());

    println!("🔍 Mirroring {}", seed);
    let prefix_display = if path_prefix.is_empty() { "/" } else { path_prefix.as_str() };
    println!("🌐 Scope: host {} under {}", host, prefix_display);
    println!("📁 Output root: {}", cli.output.display());
    println!("📊 Page cap: {}\n", cli.max_pages);

    let config = CrawlConfig {
        seed,
        scope: CrawlScope { host, path_prefix },
        max_pages: cli.max_pages,
        output_root: cli.output,
        timeout: Duration::from_secs(cli.timeout),
        user_agent: format!("docs-mirror/{}", env!("CARGO_PKG_VERSION")),
    };

    let session = CrawlSession::new(config)?;
    let report = session.run().await?;

    print_report(&report, cli.json)?;

    // Completion is success even when some pages failed
    Ok(0)
}

// Prints the crawl summary either as a table or JSON
fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
        return Ok(());
    }

    println!();
    println!("📊 Summary:");
    println!("   📄 Pages saved: {}", report.pages_processed);
    println!("   🔗 URLs visited: {}", report.urls_visited);
    println!("   ⏭️  Non-HTML skipped: {}", report.pages_skipped);
    println!("   ⚠️  Failures: {}", report.pages_failed);

    Ok(())
}
