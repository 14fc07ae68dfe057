//! Link classification
//!
//! Resolves raw hrefs against the page URL and labels each candidate as
//! internal or external, dropping noise (same-page fragments, social
//! platforms, malformed hrefs) before any network work happens.

use crate::url::is_social_domain;
use serde::{Deserialize, Serialize};
use url::Url;

/// A single link candidate and, after validation, its liveness outcome
///
/// Created by the classifier with no status; the validator returns a new
/// `Link` with `status_code`, `is_broken`, and `error` filled in. Field names
/// serialize in the report's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Absolute URL of the link target
    pub url: String,

    /// Trimmed anchor text of the `<a>` element
    pub anchor_text: String,

    /// Status recorded by validation (`0` for transport failures)
    pub status_code: Option<u16>,

    /// Whether validation judged the link broken
    pub is_broken: bool,

    /// Failure description, when validation recorded one
    pub error: Option<String>,
}

impl Link {
    /// Creates an unvalidated link candidate
    pub fn new(url: String, anchor_text: String) -> Self {
        Self {
            url,
            anchor_text,
            status_code: None,
            is_broken: false,
            error: None,
        }
    }

    /// Returns a copy of this link with a validation outcome applied
    pub fn with_outcome(self, status_code: u16, is_broken: bool, error: Option<String>) -> Self {
        Self {
            status_code: Some(status_code),
            is_broken,
            error,
            ..self
        }
    }
}

/// Whether a link stays within the crawl's origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScope {
    Internal,
    External,
}

/// A link candidate labeled by the classifier
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLink {
    pub link: Link,
    pub scope: LinkScope,
}

/// Classifies a raw href found on a page
///
/// Returns `None` when the candidate is excluded:
/// - the href does not resolve against the page URL (malformed)
/// - the href is a bare `#` or resolves to the page itself plus a fragment
/// - the resolved host is on the social-domain denylist
/// - the candidate's category is toggled off
///
/// Internal means the resolved host equals `base_host` exactly; everything
/// else, including host-less schemes like `mailto:` and `tel:`, is external.
pub fn classify(
    href: &str,
    anchor_text: &str,
    page_url: &Url,
    base_host: &str,
    include_internal: bool,
    include_external: bool,
) -> Option<ClassifiedLink> {
    let href = href.trim();
    if href.is_empty() || href == "#" {
        return None;
    }

    let resolved = page_url.join(href).ok()?;

    if is_same_page_fragment(&resolved, page_url) {
        return None;
    }

    let scope = match resolved.host_str() {
        Some(host) if host == base_host => LinkScope::Internal,
        Some(host) if is_social_domain(host) => return None,
        _ => LinkScope::External,
    };

    match scope {
        LinkScope::Internal if !include_internal => return None,
        LinkScope::External if !include_external => return None,
        _ => {}
    }

    Some(ClassifiedLink {
        link: Link::new(resolved.to_string(), anchor_text.to_string()),
        scope,
    })
}

/// Checks whether a resolved URL is the page itself plus a non-empty fragment
fn is_same_page_fragment(resolved: &Url, page_url: &Url) -> bool {
    resolved.fragment().is_some_and(|f| !f.is_empty())
        && resolved.scheme() == page_url.scheme()
        && resolved.host_str() == page_url.host_str()
        && resolved.port() == page_url.port()
        && resolved.path() == page_url.path()
        && resolved.query() == page_url.query()
}
