//! Crawl orchestration
//!
//! A single sequential crawl loop drives the breadth-first traversal; the
//! only concurrency lives inside the validator's probe batches. The frontier
//! (queue + visited set) is owned exclusively by the coordinator.

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::{run_scan, Coordinator};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use frontier::CrawlState;
