//! Domain-level aggregation
//!
//! A pure reduction over the full per-page result list. Recomputed wholesale
//! at the end of a run, never updated incrementally.

use crate::analyzer::rounded_percent;
use crate::report::PageResult;
use crate::Link;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel grouping key for broken links that never obtained a real status
/// (transport failures record status 0 and group here too)
const UNKNOWN_STATUS: &str = "unknown";

/// A broken link flattened out of its page, with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLinkRecord {
    pub url: String,
    pub anchor_text: String,
    pub status_code: Option<u16>,
    #[serde(rename = "type")]
    pub link_type: String,
    pub found_on_page: String,
}

/// Summary flags surfaced at the top of the domain report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub has_broken_links: bool,
    /// Broken links at status 404
    pub critical_issues: usize,
    /// Broken links at status 500
    pub server_errors: usize,
    /// Broken links at status 408
    pub timeout_errors: usize,
}

/// Aggregate report over all analyzed pages of one domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainReport {
    pub domain_name: String,
    pub total_pages_analyzed: usize,

    // Link statistics
    pub total_links: usize,
    pub total_broken_links: usize,
    pub broken_links_percentage: u32,

    // Internal links
    pub total_internal_links: usize,
    pub broken_internal_links: usize,
    pub broken_internal_percentage: u32,

    // External links
    pub total_external_links: usize,
    pub broken_external_links: usize,
    pub broken_external_percentage: u32,

    // Page status rollup
    pub pages_with_successful_status: usize,
    pub pages_with_error_status: usize,
    pub pages_with_successful_status_percentage: u32,
    pub pages_with_error_status_percentage: u32,

    // Detailed broken links
    pub all_broken_links: Vec<BrokenLinkRecord>,
    pub broken_links_by_status_code: BTreeMap<String, Vec<BrokenLinkRecord>>,

    pub analysis_summary: AnalysisSummary,
}

/// Reduces all per-page results into one domain report
///
/// Every percentage is guarded against a zero denominator (result 0, never
/// NaN). Broken links are flattened in page order, then grouped by status
/// code with first-seen order preserved within each group.
pub fn aggregate_domain(domain_name: &str, pages: &[PageResult]) -> DomainReport {
    let total_links: usize = pages.iter().map(|p| p.total_links).sum();
    let total_broken_links: usize = pages.iter().map(|p| p.total_broken_links).sum();
    let total_internal_links: usize = pages.iter().map(|p| p.internal_links_count).sum();
    let total_external_links: usize = pages.iter().map(|p| p.external_links_count).sum();
    let broken_internal_links: usize = pages.iter().map(|p| p.broken_internal_links).sum();
    let broken_external_links: usize = pages.iter().map(|p| p.broken_external_links).sum();

    let pages_with_successful_status = pages
        .iter()
        .filter(|p| (200..300).contains(&p.page_status_code))
        .count();
    let pages_with_error_status = pages.iter().filter(|p| p.page_status_code >= 400).count();

    let all_broken_links = flatten_broken_links(pages);

    let mut broken_links_by_status_code: BTreeMap<String, Vec<BrokenLinkRecord>> = BTreeMap::new();
    for record in &all_broken_links {
        let key = match record.status_code {
            Some(0) | None => UNKNOWN_STATUS.to_string(),
            Some(code) => code.to_string(),
        };
        broken_links_by_status_code
            .entry(key)
            .or_default()
            .push(record.clone());
    }

    let count_at = |status: &str| {
        broken_links_by_status_code
            .get(status)
            .map(|links| links.len())
            .unwrap_or(0)
    };

    let analysis_summary = AnalysisSummary {
        has_broken_links: total_broken_links > 0,
        critical_issues: count_at("404"),
        server_errors: count_at("500"),
        timeout_errors: count_at("408"),
    };

    DomainReport {
        domain_name: domain_name.to_string(),
        total_pages_analyzed: pages.len(),
        total_links,
        total_broken_links,
        broken_links_percentage: rounded_percent(total_broken_links, total_links),
        total_internal_links,
        broken_internal_links,
        broken_internal_percentage: rounded_percent(broken_internal_links, total_internal_links),
        total_external_links,
        broken_external_links,
        broken_external_percentage: rounded_percent(broken_external_links, total_external_links),
        pages_with_successful_status,
        pages_with_error_status,
        pages_with_successful_status_percentage: rounded_percent(
            pages_with_successful_status,
            pages.len(),
        ),
        pages_with_error_status_percentage: rounded_percent(pages_with_error_status, pages.len()),
        all_broken_links,
        broken_links_by_status_code,
        analysis_summary,
    }
}

/// Flattens every broken link across every page, annotated with its origin
fn flatten_broken_links(pages: &[PageResult]) -> Vec<BrokenLinkRecord> {
    let mut records = Vec::new();

    for page in pages {
        let collect = |links: &[Link], link_type: &str, out: &mut Vec<BrokenLinkRecord>| {
            for link in links.iter().filter(|l| l.is_broken) {
                out.push(BrokenLinkRecord {
                    url: link.url.clone(),
                    anchor_text: link.anchor_text.clone(),
                    status_code: link.status_code,
                    link_type: link_type.to_string(),
                    found_on_page: page.url.clone(),
                });
            }
        };

        collect(&page.internal_links, "internal", &mut records);
        collect(&page.external_links, "external", &mut records);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::PageAnalysis;

    fn link(url: &str, status: Option<u16>, broken: bool) -> Link {
        Link {
            url: url.to_string(),
            anchor_text: "text".to_string(),
            status_code: status,
            is_broken: broken,
            error: None,
        }
    }

    fn page(url: &str, status: u16, internal: Vec<Link>, external: Vec<Link>) -> PageResult {
        let broken_internal = internal.iter().filter(|l| l.is_broken).count();
        let broken_external = external.iter().filter(|l| l.is_broken).count();
        let analysis = PageAnalysis {
            internal_links_count: internal.len(),
            external_links_count: external.len(),
            total_links: internal.len() + external.len(),
            total_broken_links: broken_internal + broken_external,
            broken_links_percentage: rounded_percent(
                broken_internal + broken_external,
                internal.len() + external.len(),
            ),
            broken_internal_links: broken_internal,
            broken_external_links: broken_external,
            internal_links: internal,
            external_links: external,
        };
        PageResult::from_analysis(
            url.to_string(),
            status,
            analysis,
            "2026-01-01T00:00:00Z".to_string(),
        )
    }

    #[test]
    fn test_empty_run_is_all_zeroes() {
        let report = aggregate_domain("https://example.com", &[]);

        assert_eq!(report.total_pages_analyzed, 0);
        assert_eq!(report.broken_links_percentage, 0);
        assert_eq!(report.pages_with_successful_status_percentage, 0);
        assert_eq!(report.pages_with_error_status_percentage, 0);
        assert!(!report.analysis_summary.has_broken_links);
    }

    #[test]
    fn test_totals_and_percentages() {
        let pages = vec![
            page(
                "https://example.com/",
                200,
                vec![
                    link("https://example.com/a", Some(200), false),
                    link("https://example.com/b", Some(404), true),
                ],
                vec![link("https://other.example/", Some(200), false)],
            ),
            page(
                "https://example.com/two",
                200,
                vec![link("https://example.com/c", Some(200), false)],
                vec![],
            ),
        ];

        let report = aggregate_domain("https://example.com", &pages);

        assert_eq!(report.total_links, 4);
        assert_eq!(report.total_broken_links, 1);
        assert_eq!(report.broken_links_percentage, 25);
        assert_eq!(report.total_internal_links, 3);
        assert_eq!(report.broken_internal_links, 1);
        assert_eq!(report.broken_internal_percentage, 33);
        assert_eq!(report.total_external_links, 1);
        assert_eq!(report.broken_external_percentage, 0);
    }

    #[test]
    fn test_page_status_rollup() {
        let pages = vec![
            page("https://example.com/", 200, vec![], vec![]),
            page("https://example.com/missing", 404, vec![], vec![]),
            page("https://example.com/moved", 301, vec![], vec![]),
        ];

        let report = aggregate_domain("https://example.com", &pages);

        assert_eq!(report.pages_with_successful_status, 1);
        assert_eq!(report.pages_with_error_status, 1);
        assert_eq!(report.pages_with_successful_status_percentage, 33);
        assert_eq!(report.pages_with_error_status_percentage, 33);
    }

    #[test]
    fn test_broken_links_flattened_with_provenance() {
        let pages = vec![page(
            "https://example.com/",
            200,
            vec![link("https://example.com/dead", Some(404), true)],
            vec![link("https://other.example/gone", Some(500), true)],
        )];

        let report = aggregate_domain("https://example.com", &pages);

        assert_eq!(report.all_broken_links.len(), 2);
        assert_eq!(report.all_broken_links[0].link_type, "internal");
        assert_eq!(report.all_broken_links[0].found_on_page, "https://example.com/");
        assert_eq!(report.all_broken_links[1].link_type, "external");
    }

    #[test]
    fn test_grouping_by_status_with_unknown_sentinel() {
        let pages = vec![page(
            "https://example.com/",
            200,
            vec![
                link("https://example.com/d1", Some(404), true),
                link("https://example.com/d2", Some(404), true),
                link("https://example.com/d3", None, true),
                link("https://example.com/d4", Some(0), true),
            ],
            vec![],
        )];

        let report = aggregate_domain("https://example.com", &pages);

        assert_eq!(report.broken_links_by_status_code["404"].len(), 2);
        // no-status and status-0 (transport failure) links share the sentinel
        assert_eq!(report.broken_links_by_status_code["unknown"].len(), 2);
        assert!(!report.broken_links_by_status_code.contains_key("0"));
        // first-seen order within the group
        assert_eq!(
            report.broken_links_by_status_code["404"][0].url,
            "https://example.com/d1"
        );
    }

    #[test]
    fn test_summary_tallies() {
        let pages = vec![page(
            "https://example.com/",
            200,
            vec![
                link("https://example.com/a", Some(404), true),
                link("https://example.com/b", Some(500), true),
                link("https://example.com/c", Some(408), true),
                link("https://example.com/d", Some(403), true),
            ],
            vec![],
        )];

        let report = aggregate_domain("https://example.com", &pages);

        assert!(report.analysis_summary.has_broken_links);
        assert_eq!(report.analysis_summary.critical_issues, 1);
        assert_eq!(report.analysis_summary.server_errors, 1);
        assert_eq!(report.analysis_summary.timeout_errors, 1);
    }

    #[test]
    fn test_report_serializes_snake_case() {
        let report = aggregate_domain("https://example.com", &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("domain_name").is_some());
        assert!(json.get("broken_links_by_status_code").is_some());
        assert!(json.get("analysis_summary").is_some());
    }
}
