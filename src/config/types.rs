use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Linkscan
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Seed URL the crawl starts from
    #[serde(rename = "start-url", default)]
    pub start_url: String,

    /// Maximum number of pages to fetch and analyze
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in milliseconds
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: u32,
}

/// Link validation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Whether internal links are collected and validated
    #[serde(rename = "include-internal-links", default = "default_true")]
    pub include_internal_links: bool,

    /// Whether external links are collected and validated
    #[serde(rename = "include-external-links", default = "default_true")]
    pub include_external_links: bool,

    /// Number of links probed concurrently per batch
    #[serde(rename = "batch-size", default = "default_batch_size")]
    pub batch_size: usize,

    /// Pacing delay between batches in milliseconds
    #[serde(rename = "batch-delay-ms", default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where the latest output and dataset records are written
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_max_pages() -> u32 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; Linkscan/1.0)".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_redirects() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_batch_size() -> usize {
    5
}

fn default_batch_delay_ms() -> u64 {
    100
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./linkscan-out")
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_url: String::new(),
            max_pages: default_max_pages(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            include_internal_links: true,
            include_external_links: true,
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}
