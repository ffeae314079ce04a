// src/page/fetch.rs
// =============================================================================
// This module fetches a single page over HTTP.
//
// Every way a fetch can end is a FetchOutcome variant, so the crawl loop
// inspects a value instead of catching errors:
// - Page: 2xx response with an HTML body
// - NotHtml: 2xx response with some other content type
// - Failed: transport error or non-2xx status
//
// None of these outcomes is fatal to the crawl - the loop logs Failed and
// NotHtml and moves on. A failed URL is never retried.
// =============================================================================

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

// The result of one fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// Got a 2xx HTML response; holds the raw body
    Page { body: String },
    /// Got a 2xx response but the content type is not HTML
    /// (nothing is written and no links are extracted)
    NotHtml { content_type: String },
    /// The request failed: network/transport error or non-2xx status
    Failed { reason: String },
}

// Fetches one page with the client's configured timeout and User-Agent
//
// Parameters:
//   client: reqwest HTTP client (reused across the whole crawl)
//   url: the normalized URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> FetchOutcome {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    // Non-2xx statuses (404, 500, ...) count as failures, same as transport
    // errors - the page is skipped either way
    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::Failed {
            reason: format!("HTTP {}", status.as_u16()),
        };
    }

    // Only HTML pages are converted; everything else (images, PDFs, JSON)
    // is reported so the loop can log and skip it
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchOutcome::NotHtml { content_type };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Page { body },
        Err(e) => FetchOutcome::Failed {
            reason: e.to_string(),
        },
    }
}
