//! Per-page link analysis
//!
//! Composes the classifier and validator over one page's HTML: extract and
//! classify every anchor, validate the internal and external lists in two
//! passes, and compute the page's link statistics.

use crate::analyzer::{classify, Link, LinkScope, Validator};
use crate::config::ValidationConfig;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Link statistics for a single analyzed page
#[derive(Debug, Clone, Default)]
pub struct PageAnalysis {
    pub internal_links: Vec<Link>,
    pub external_links: Vec<Link>,
    pub internal_links_count: usize,
    pub external_links_count: usize,
    pub broken_internal_links: usize,
    pub broken_external_links: usize,
    pub total_links: usize,
    pub total_broken_links: usize,
    pub broken_links_percentage: u32,
}

/// Analyzes all anchor links on a page
///
/// Extraction and classification are synchronous (the parsed document is
/// dropped before any await), then each category is validated in its own
/// batched pass. Duplicate hrefs yield duplicate entries; deduplication is
/// the crawler's concern, not the page's.
pub async fn analyze_page(
    client: &Client,
    config: &ValidationConfig,
    page_url: &Url,
    base_host: &str,
    html: &str,
) -> PageAnalysis {
    let (internal, external) = extract_links(html, page_url, base_host, config);

    let internal_links_count = internal.len();
    let external_links_count = external.len();

    let validator = Validator::new(client, config);
    let internal_links = validator.validate(internal).await;
    let external_links = validator.validate(external).await;

    let broken_internal_links = internal_links.iter().filter(|l| l.is_broken).count();
    let broken_external_links = external_links.iter().filter(|l| l.is_broken).count();
    let total_links = internal_links_count + external_links_count;
    let total_broken_links = broken_internal_links + broken_external_links;

    PageAnalysis {
        internal_links,
        external_links,
        internal_links_count,
        external_links_count,
        broken_internal_links,
        broken_external_links,
        total_links,
        total_broken_links,
        broken_links_percentage: rounded_percent(total_broken_links, total_links),
    }
}

/// Extracts and classifies every `a[href]` element on the page
fn extract_links(
    html: &str,
    page_url: &Url,
    base_host: &str,
    config: &ValidationConfig,
) -> (Vec<Link>, Vec<Link>) {
    let document = Html::parse_document(html);
    let mut internal = Vec::new();
    let mut external = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let anchor_text = element.text().collect::<String>().trim().to_string();

            let Some(classified) = classify(
                href,
                &anchor_text,
                page_url,
                base_host,
                config.include_internal_links,
                config.include_external_links,
            ) else {
                continue;
            };

            match classified.scope {
                LinkScope::Internal => internal.push(classified.link),
                LinkScope::External => external.push(classified.link),
            }
        }
    }

    (internal, external)
}

/// Ratio expressed in whole percent, round-half-up, 0 on a zero denominator
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ValidationConfig {
        ValidationConfig {
            include_internal_links: true,
            include_external_links: true,
            batch_size: 5,
            batch_delay_ms: 0,
        }
    }

    fn page_url() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_extract_partitions_by_host() {
        let html = r#"
            <html><body>
                <a href="/about">About</a>
                <a href="https://example.com/contact">Contact</a>
                <a href="https://other.example/page">Elsewhere</a>
            </body></html>
        "#;
        let (internal, external) = extract_links(html, &page_url(), "example.com", &config());
        assert_eq!(internal.len(), 2);
        assert_eq!(external.len(), 1);
        assert_eq!(internal[0].url, "https://example.com/about");
        assert_eq!(internal[0].anchor_text, "About");
    }

    #[test]
    fn test_extract_skips_fragments_and_social() {
        let html = r##"
            <html><body>
                <a href="#">Top</a>
                <a href="#section">Section</a>
                <a href="https://www.facebook.com/page">Facebook</a>
                <a href="/real">Real</a>
            </body></html>
        "##;
        let (internal, external) = extract_links(html, &page_url(), "example.com", &config());
        assert_eq!(internal.len(), 1);
        assert!(external.is_empty());
    }

    #[test]
    fn test_duplicate_hrefs_kept() {
        let html = r#"
            <html><body>
                <a href="/page">One</a>
                <a href="/page">Two</a>
            </body></html>
        "#;
        let (internal, _) = extract_links(html, &page_url(), "example.com", &config());
        assert_eq!(internal.len(), 2);
    }

    #[test]
    fn test_category_toggles() {
        let html = r#"
            <html><body>
                <a href="/internal">In</a>
                <a href="https://other.example/">Out</a>
            </body></html>
        "#;

        let mut only_external = config();
        only_external.include_internal_links = false;
        let (internal, external) = extract_links(html, &page_url(), "example.com", &only_external);
        assert!(internal.is_empty());
        assert_eq!(external.len(), 1);

        let mut only_internal = config();
        only_internal.include_external_links = false;
        let (internal, external) = extract_links(html, &page_url(), "example.com", &only_internal);
        assert_eq!(internal.len(), 1);
        assert!(external.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_empty_page_has_zero_percentage() {
        let client = Client::new();
        let analysis = analyze_page(
            &client,
            &config(),
            &page_url(),
            "example.com",
            "<html><body>no links</body></html>",
        )
        .await;

        assert_eq!(analysis.total_links, 0);
        assert_eq!(analysis.broken_links_percentage, 0);
    }

    #[tokio::test]
    async fn test_analyze_mailto_only_page() {
        let client = Client::new();
        let html = r#"
            <html><body>
                <a href="mailto:good@example.com">Good</a>
                <a href="mailto:bad">Bad</a>
            </body></html>
        "#;
        let analysis = analyze_page(&client, &config(), &page_url(), "example.com", html).await;

        assert_eq!(analysis.internal_links_count, 0);
        assert_eq!(analysis.external_links_count, 2);
        assert_eq!(analysis.total_broken_links, 1);
        assert_eq!(analysis.broken_links_percentage, 50);
    }

    #[test]
    fn test_rounded_percent_rounding() {
        assert_eq!(rounded_percent(0, 0), 0);
        assert_eq!(rounded_percent(1, 2), 50);
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 8), 13); // 12.5 rounds half-up
        assert_eq!(rounded_percent(3, 3), 100);
    }
}
