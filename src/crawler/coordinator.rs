//! Crawl coordinator - main orchestration logic
//!
//! Drives the breadth-first crawl: dequeue a URL, fetch it, analyze its
//! links, feed newly discovered internal links back into the frontier, and
//! finally aggregate everything into the composite run output and persist it.

use crate::analyzer::{analyze_page, Link};
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::frontier::CrawlState;
use crate::output::{FsStore, OutputStore, StoreResult, OUTPUT_KEY, PAGE_ANALYZED_KEY};
use crate::report::{aggregate_domain, AnalysisMeta, PageResult, RunOutput};
use crate::url::{normalize_url, same_origin};
use crate::{ScanError, DATA_FORMAT_VERSION, ENGINE_VERSION};
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use url::Url;

/// Main crawl coordinator
///
/// Owns the HTTP client and the frontier for one run; the store is borrowed
/// so callers can inspect it afterwards.
pub struct Coordinator<'a> {
    config: &'a Config,
    client: Client,
    base_url: Url,
    store: &'a mut dyn OutputStore,
}

impl<'a> Coordinator<'a> {
    /// Creates a coordinator for one crawl run
    ///
    /// The seed URL is normalized here; its origin becomes the crawl's base
    /// origin and its host the internal/external boundary.
    pub fn new(config: &'a Config, store: &'a mut dyn OutputStore) -> Result<Self, ScanError> {
        let base_url = normalize_url(&config.crawl.start_url)?;
        let client = build_http_client(&config.crawl)?;

        Ok(Self {
            config,
            client,
            base_url,
            store,
        })
    }

    /// Runs the crawl to completion and persists the composite output
    ///
    /// Terminates when the queue empties or the page budget is reached.
    /// Per-page failures degrade to error-shaped results; only store or URL
    /// failures outside the loop propagate, and by then every analyzed page
    /// is already in the result list.
    pub async fn run(&mut self) -> Result<RunOutput, ScanError> {
        let base_host = self
            .base_url
            .host_str()
            .ok_or(crate::UrlError::MissingHost)?
            .to_string();
        let max_pages = self.config.crawl.max_pages;

        tracing::info!(
            "Starting crawl of {} (budget: {} pages)",
            self.base_url,
            max_pages
        );

        let mut state = CrawlState::new(self.base_url.to_string());
        let mut results: Vec<PageResult> = Vec::new();

        while state.processed() < max_pages {
            let Some(current) = state.next() else {
                break;
            };

            if state.is_visited(&current) {
                tracing::debug!("Skipping already processed URL: {}", current);
                continue;
            }
            // Visited before fetch, so discovery during analysis can never
            // re-enqueue the page we are on
            state.mark_visited(&current);

            tracing::info!(
                "Processing: {} ({}/{})",
                current,
                state.processed() + 1,
                max_pages
            );

            match fetch_page(&self.client, &current).await {
                FetchOutcome::Success { status_code, body } => {
                    let page_url = Url::parse(&current)?;
                    let analysis = analyze_page(
                        &self.client,
                        &self.config.validation,
                        &page_url,
                        &base_host,
                        &body,
                    )
                    .await;

                    tracing::info!(
                        "Completed {} (status {}): {} broken of {} links",
                        current,
                        status_code,
                        analysis.total_broken_links,
                        analysis.total_links
                    );

                    self.discover(&analysis.internal_links, &mut state);

                    results.push(PageResult::from_analysis(
                        current,
                        status_code,
                        analysis,
                        timestamp(),
                    ));
                    state.record_processed();
                    self.record_billable_page();
                }

                FetchOutcome::Failed { status_code, error } => {
                    tracing::warn!("Error analyzing {}: {}", current, error);
                    results.push(PageResult::fetch_failure(
                        current,
                        status_code,
                        error,
                        timestamp(),
                    ));
                    state.record_processed();
                }
            }
        }

        tracing::info!(
            "Crawl finished: {} pages processed, {} URLs left pending",
            state.processed(),
            state.pending()
        );

        let domain_name = self.base_url.origin().ascii_serialization();
        let domain = aggregate_domain(&domain_name, &results);

        let output = RunOutput {
            analysis: AnalysisMeta {
                total_pages_processed: results.len(),
                analysis_completed_at: timestamp(),
                engine_version: ENGINE_VERSION.to_string(),
                data_format_version: DATA_FORMAT_VERSION.to_string(),
            },
            domain,
            pages: results,
        };

        self.persist(&output)?;

        Ok(output)
    }

    /// Feeds internal links from a successful page back into the frontier
    ///
    /// Broken internal links are enqueued too; brokenness at discovery time
    /// does not change where a link points. Malformed links are dropped
    /// silently.
    fn discover(&self, links: &[Link], state: &mut CrawlState) {
        for link in links {
            let normalized = match normalize_url(&link.url) {
                Ok(url) => url,
                Err(_) => continue,
            };

            if !same_origin(&normalized, &self.base_url) {
                continue;
            }

            if state.enqueue(normalized.to_string()) {
                tracing::debug!("Added to crawl queue: {}", normalized);
            }
        }
    }

    /// Bumps the billable pages-analyzed counter
    ///
    /// Store failures here are logged, never allowed to abort the crawl.
    fn record_billable_page(&mut self) {
        let result: StoreResult<()> = (|| {
            let count = self
                .store
                .get_value(PAGE_ANALYZED_KEY)?
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            self.store
                .set_value(PAGE_ANALYZED_KEY, &serde_json::Value::from(count + 1))
        })();

        if let Err(e) = result {
            tracing::warn!("Failed to record billable page: {}", e);
        }
    }

    /// Writes the composite output as the latest artifact and as a dataset
    /// record
    fn persist(&mut self, output: &RunOutput) -> Result<(), ScanError> {
        let value = serde_json::to_value(output)?;
        self.store.set_value(OUTPUT_KEY, &value)?;
        self.store.push_record(&value)?;
        Ok(())
    }
}

/// RFC 3339 timestamp for result records
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Runs a full scan with the filesystem store from the configuration
pub async fn run_scan(config: &Config) -> Result<RunOutput, ScanError> {
    let mut store = FsStore::new(&config.output.output_dir)?;
    let mut coordinator = Coordinator::new(config, &mut store)?;
    coordinator.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryStore;

    fn test_config(start_url: &str) -> Config {
        let mut config = Config::default();
        config.crawl.start_url = start_url.to_string();
        config.crawl.timeout_ms = 2000;
        config.validation.batch_delay_ms = 0;
        config
    }

    #[test]
    fn test_new_rejects_malformed_seed() {
        let config = test_config("not a url");
        let mut store = MemoryStore::new();
        assert!(Coordinator::new(&config, &mut store).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_seed_degrades_to_error_result() {
        let config = test_config("http://127.0.0.1:1/");
        let mut store = MemoryStore::new();
        let output = {
            let mut coordinator = Coordinator::new(&config, &mut store).unwrap();
            coordinator.run().await.unwrap()
        };

        assert_eq!(output.pages.len(), 1);
        assert_eq!(output.pages[0].page_status_code, 404);
        assert!(output.pages[0].error.is_some());
        assert_eq!(output.domain.total_pages_analyzed, 1);
        // a failed page is not billable
        assert!(store.get_value(PAGE_ANALYZED_KEY).unwrap().is_none());
        // but the output is still persisted both ways
        assert!(store.get_value(OUTPUT_KEY).unwrap().is_some());
        assert_eq!(store.records().len(), 1);
    }
}
