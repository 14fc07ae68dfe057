//! Report data structures
//!
//! The per-page result, the domain-level rollup, and the composite run
//! output. Field names follow the engine's published JSON format: camelCase
//! on page and link records (with the historical `analysis_date` and
//! `data_source` exceptions), snake_case on the domain report.

mod domain;

pub use domain::{aggregate_domain, AnalysisSummary, BrokenLinkRecord, DomainReport};

use crate::analyzer::PageAnalysis;
use crate::Link;
use serde::{Deserialize, Serialize};

/// Identifies records produced by this engine in shared datasets
pub const DATA_SOURCE: &str = "linkscan";

/// Outcome of analyzing (or failing to fetch) one crawled URL
///
/// Immutable once constructed; the coordinator owns the full list for the
/// crawl's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub url: String,

    pub page_status_code: u16,

    /// Set only on fetch-failure results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub total_links: usize,
    pub total_broken_links: usize,
    pub broken_links_percentage: u32,
    pub internal_links_count: usize,
    pub external_links_count: usize,
    pub internal_links: Vec<Link>,
    pub external_links: Vec<Link>,
    pub broken_internal_links: usize,
    pub broken_external_links: usize,

    /// RFC 3339 timestamp of when the page was analyzed
    #[serde(rename = "analysis_date")]
    pub analysis_date: String,

    #[serde(rename = "data_source")]
    pub data_source: String,
}

impl PageResult {
    /// Builds a result from a successful page analysis
    pub fn from_analysis(
        url: String,
        page_status_code: u16,
        analysis: PageAnalysis,
        analysis_date: String,
    ) -> Self {
        Self {
            url,
            page_status_code,
            error: None,
            total_links: analysis.total_links,
            total_broken_links: analysis.total_broken_links,
            broken_links_percentage: analysis.broken_links_percentage,
            internal_links_count: analysis.internal_links_count,
            external_links_count: analysis.external_links_count,
            internal_links: analysis.internal_links,
            external_links: analysis.external_links,
            broken_internal_links: analysis.broken_internal_links,
            broken_external_links: analysis.broken_external_links,
            analysis_date,
            data_source: DATA_SOURCE.to_string(),
        }
    }

    /// Builds an error-shaped result for a page that could not be fetched
    pub fn fetch_failure(
        url: String,
        page_status_code: u16,
        error: String,
        analysis_date: String,
    ) -> Self {
        Self {
            url,
            page_status_code,
            error: Some(error),
            total_links: 0,
            total_broken_links: 0,
            broken_links_percentage: 0,
            internal_links_count: 0,
            external_links_count: 0,
            internal_links: Vec::new(),
            external_links: Vec::new(),
            broken_internal_links: 0,
            broken_external_links: 0,
            analysis_date,
            data_source: DATA_SOURCE.to_string(),
        }
    }
}

/// Metadata about the run itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMeta {
    pub total_pages_processed: usize,
    pub analysis_completed_at: String,
    pub engine_version: String,
    pub data_format_version: String,
}

/// Composite output of one crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    pub domain: DomainReport,
    pub pages: Vec<PageResult>,
    pub analysis: AnalysisMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_is_zeroed() {
        let result = PageResult::fetch_failure(
            "https://example.com/missing".to_string(),
            404,
            "Connection refused".to_string(),
            "2026-01-01T00:00:00Z".to_string(),
        );

        assert_eq!(result.page_status_code, 404);
        assert_eq!(result.total_links, 0);
        assert_eq!(result.broken_links_percentage, 0);
        assert!(result.internal_links.is_empty());
        assert_eq!(result.error.as_deref(), Some("Connection refused"));
    }

    #[test]
    fn test_page_result_serializes_camel_case() {
        let result = PageResult::fetch_failure(
            "https://example.com/".to_string(),
            500,
            "boom".to_string(),
            "2026-01-01T00:00:00Z".to_string(),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("pageStatusCode").is_some());
        assert!(json.get("totalBrokenLinks").is_some());
        assert!(json.get("analysis_date").is_some());
        assert!(json.get("data_source").is_some());
        assert!(json.get("page_status_code").is_none());
    }

    #[test]
    fn test_success_result_omits_error_field() {
        let result = PageResult::from_analysis(
            "https://example.com/".to_string(),
            200,
            Default::default(),
            "2026-01-01T00:00:00Z".to_string(),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("error").is_none());
    }
}
