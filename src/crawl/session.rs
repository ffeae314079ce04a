// src/crawl/session.rs
// =============================================================================
// This module implements the breadth-first crawl loop.
//
// How it works:
// 1. Start with the seed URL in a FIFO worklist
// 2. Dequeue a URL, normalize it, skip it if already visited
// 3. Fetch the page; on failure or non-HTML content, log and move on
// 4. Convert the HTML to Markdown, normalize it, write it to the mirrored path
// 5. Extract all links from the page and enqueue the in-scope ones
// 6. Repeat until the worklist is empty or the page cap is reached
//
// All crawl state (worklist, visited set, counters) lives on the session
// struct and is owned by it for the duration of the run - no globals, which
// keeps the loop testable against a local server.
//
// Fully sequential: one fetch, one conversion, one write at a time.
// =============================================================================

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::crawl::filter::{normalize_url, should_visit, CrawlScope};
use crate::markdown::{extract_title, html_to_markdown, normalize_markdown};
use crate::output::{map_url_path, render_document, write_document};
use crate::page::{extract_page_links, fetch_page, FetchOutcome};

// Everything a crawl run needs to know up front
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts
    pub seed: Url,
    /// Host + path prefix restriction for discovered links
    pub scope: CrawlScope,
    /// Hard cap on pages processed (safety net against huge sites)
    pub max_pages: usize,
    /// Base directory for the mirrored Markdown tree
    pub output_root: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

// What a finished crawl reports back
//
// #[derive(Serialize)] lets us print this as JSON with --json
#[derive(Debug, Serialize)]
pub struct CrawlReport {
    /// Pages fetched, converted and written
    pub pages_processed: usize,
    /// Distinct normalized URLs dequeued (processed + failed + skipped)
    pub urls_visited: usize,
    /// Fetches that failed (transport error, non-2xx) or didn't convert
    pub pages_failed: usize,
    /// Responses skipped for having a non-HTML content type
    pub pages_skipped: usize,
}

// One crawl run: owns the worklist, the visited set and the counters
pub struct CrawlSession {
    config: CrawlConfig,
    client: Client,
    worklist: VecDeque<Url>,
    visited: HashSet<String>,
    pages_processed: usize,
    pages_failed: usize,
    pages_skipped: usize,
}

impl CrawlSession {
    // Creates a session with a configured HTTP client
    //
    // The client is built once and reused for every request so we get
    // connection pooling for free.
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            client,
            worklist: VecDeque::new(),
            visited: HashSet::new(),
            pages_processed: 0,
            pages_failed: 0,
            pages_skipped: 0,
        })
    }

    // Runs the crawl to completion and returns the report
    //
    // Per-page failures are logged and skipped; the only fatal errors are
    // filesystem ones (can't create the output tree, can't write a file).
    pub async fn run(mut self) -> Result<CrawlReport> {
        fs::create_dir_all(&self.config.output_root).with_context(|| {
            format!(
                "Failed to create output root {}",
                self.config.output_root.display()
            )
        })?;

        self.worklist.push_back(self.config.seed.clone());

        // Terminal condition: worklist empty OR page cap reached
        while self.pages_processed < self.config.max_pages {
            let Some(url) = self.worklist.pop_front() else {
                break;
            };

            // The visited set is keyed on the fragment/query-stripped form;
            // a URL queued twice before its first dequeue is skipped here
            // without counting toward the cap
            let page_url = normalize_url(&url);
            if !self.visited.insert(page_url.as_str().to_string()) {
                continue;
            }

            println!("Fetching {} ...", page_url);
            if let Some(body) = self.fetch(&page_url).await {
                self.process_page(&page_url, &body)?;
            }
        }

        Ok(CrawlReport {
            pages_processed: self.pages_processed,
            urls_visited: self.visited.len(),
            pages_failed: self.pages_failed,
            pages_skipped: self.pages_skipped,
        })
    }

    // Fetches one page, logging and counting the non-Page outcomes
    //
    // Returns Some(body) only for a 2xx HTML response. A URL that fails here
    // is never retried - it's already in the visited set.
    async fn fetch(&mut self, page_url: &Url) -> Option<String> {
        match fetch_page(&self.client, page_url).await {
            FetchOutcome::Page { body } => Some(body),
            FetchOutcome::NotHtml { content_type } => {
                println!("  ! Skipping non-HTML content: {}", content_type);
                self.pages_skipped += 1;
                None
            }
            FetchOutcome::Failed { reason } => {
                println!("  ! Failed to fetch {}: {}", page_url, reason);
                self.pages_failed += 1;
                None
            }
        }
    }

    // Converts, writes and link-scans one fetched page
    //
    // Conversion failures are per-page (log and continue); write failures
    // abort the run via Err.
    fn process_page(&mut self, page_url: &Url, body: &str) -> Result<()> {
        let markdown = match html_to_markdown(body) {
            Ok(markdown) => normalize_markdown(&markdown),
            Err(e) => {
                println!("  ! Failed to convert {}: {}", page_url, e);
                self.pages_failed += 1;
                return Ok(());
            }
        };

        // Fall back to the URL when the page carries no <title>
        let title = extract_title(body).unwrap_or_else(|| page_url.to_string());

        let document = render_document(&title, page_url.as_str(), Utc::now(), &markdown);

        let out_path = self
            .config
            .output_root
            .join(map_url_path(page_url.path(), &self.config.scope.path_prefix));
        write_document(&out_path, &document)?;
        println!("  -> Saved to {}", out_path.display());

        self.pages_processed += 1;

        // Enqueue every in-scope link; writes only happened above, so a
        // failed page never contributes links
        for link in extract_page_links(body, page_url) {
            if should_visit(&link, &self.config.scope, &self.visited) {
                self.worklist.push_back(link);
            }
        }

        Ok(())
    }
}
