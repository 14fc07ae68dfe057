//! Page fetching
//!
//! Builds the shared HTTP client and fetches pages for analysis. Responses
//! below 500 flow through the success path even when they are 4xx, since the
//! error body is still worth analyzing for links. Everything else is
//! classified into a page-level status code so a failed fetch degrades to an
//! error-shaped result instead of aborting the crawl.

use crate::config::CrawlConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchOutcome {
    /// A response below 500 was obtained (including 4xx)
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body
        body: String,
    },

    /// The page could not be retrieved
    Failed {
        /// Page-level status classification of the failure
        status_code: u16,
        /// Failure description
        error: String,
    },
}

/// Builds the HTTP client shared by the fetcher and the validator
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );

    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(Policy::limited(config.max_redirects as usize))
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page for analysis
///
/// Never returns an error: every failure mode is folded into
/// `FetchOutcome::Failed` with a page-level status code:
///
/// | Condition | Status |
/// |-----------|--------|
/// | HTTP 5xx response | the actual status |
/// | Timeout | 408 |
/// | Connection reset | 503 |
/// | DNS failure / connection refused | 404 |
/// | Anything else | 500 |
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status_code = response.status().as_u16();

            if status_code >= 500 {
                return FetchOutcome::Failed {
                    status_code,
                    error: format!("HTTP {}", status_code),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { status_code, body },
                Err(e) => classify_transport_error(e),
            }
        }
        Err(e) => classify_transport_error(e),
    }
}

/// Maps a transport error to a page-level status code
fn classify_transport_error(error: reqwest::Error) -> FetchOutcome {
    let status_code = if error.is_timeout() {
        408
    } else if is_connection_reset(&error) {
        503
    } else if error.is_connect() {
        404
    } else {
        500
    };

    FetchOutcome::Failed {
        status_code,
        error: error.to_string(),
    }
}

/// Walks the error's source chain for an IO connection reset
fn is_connection_reset(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            if io_error.kind() == std::io::ErrorKind::ConnectionReset {
                return true;
            }
        }
        source = cause.source();
    }
    false
}
