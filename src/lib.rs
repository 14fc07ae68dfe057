//! Linkscan: a broken-link auditor for websites
//!
//! This crate crawls a site breadth-first from a seed URL, classifies every
//! outbound link as internal or external, probes each one for liveness, and
//! rolls the per-page results up into a single domain-level report.

pub mod analyzer;
pub mod config;
pub mod crawler;
pub mod output;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for Linkscan operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(#[from] output::StoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Linkscan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analyzer::{Link, LinkScope};
pub use config::Config;
pub use report::{DomainReport, PageResult, RunOutput};
pub use url::normalize_url;

/// Engine version reported in the composite output
pub const ENGINE_VERSION: &str = "1.0.0";

/// Data format version reported in the composite output
pub const DATA_FORMAT_VERSION: &str = "1.0";
