//! Link liveness validation
//!
//! Links are checked with protocol-specific rules: `mailto:` addresses are
//! validated syntactically, phone/messaging schemes are assumed live, and
//! everything else gets a HEAD probe. Probes run in fixed-size concurrent
//! batches with a pacing delay between batches.

use crate::analyzer::Link;
use crate::config::ValidationConfig;
use futures::future::join_all;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;

/// Permissive `local@domain.tld` pattern, matching the engine's historical
/// behavior rather than RFC 5322
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// URI schemes whose reachability cannot be checked over HTTP
const ASSUMED_LIVE_SCHEMES: &[&str] = &["tel:", "sms:", "whatsapp:"];

/// Validates batches of links against a shared HTTP client
pub struct Validator<'a> {
    client: &'a Client,
    batch_size: usize,
    batch_delay: Duration,
}

impl<'a> Validator<'a> {
    /// Creates a validator using the engine's shared client
    pub fn new(client: &'a Client, config: &ValidationConfig) -> Self {
        Self {
            client,
            batch_size: config.batch_size.max(1),
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }

    /// Validates every link, preserving input order
    ///
    /// Links are processed in batches of `batch_size`; all probes within a
    /// batch run concurrently and the whole batch completes before the next
    /// one starts, with the pacing delay inserted between batches. One
    /// link's failure never affects the others.
    pub async fn validate(&self, links: Vec<Link>) -> Vec<Link> {
        let mut validated = Vec::with_capacity(links.len());
        let mut pending = links.into_iter().peekable();

        while pending.peek().is_some() {
            let batch: Vec<Link> = pending.by_ref().take(self.batch_size).collect();
            let outcomes = join_all(batch.into_iter().map(|link| self.check(link))).await;
            validated.extend(outcomes);

            if pending.peek().is_some() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        validated
    }

    /// Checks a single link and returns it with the outcome applied
    async fn check(&self, link: Link) -> Link {
        if let Some(address) = link.url.strip_prefix("mailto:") {
            let address = address.trim();
            return if !address.is_empty() && EMAIL_PATTERN.is_match(address) {
                link.with_outcome(200, false, None)
            } else {
                link.with_outcome(
                    400,
                    true,
                    Some("Invalid email address in mailto link".to_string()),
                )
            };
        }

        if ASSUMED_LIVE_SCHEMES
            .iter()
            .any(|scheme| link.url.starts_with(scheme))
        {
            return link.with_outcome(200, false, None);
        }

        match self.client.head(&link.url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                link.with_outcome(status, status >= 400, None)
            }
            Err(e) => {
                // Transport failures record status 0 unless the error carries
                // a real response status
                let status = e.status().map(|s| s.as_u16()).unwrap_or(0);
                link.with_outcome(status, true, Some(e.to_string()))
            }
        }
    }
}
