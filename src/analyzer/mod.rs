//! Link extraction, classification, and validation
//!
//! The classifier turns raw hrefs into labeled link candidates, the validator
//! probes them for liveness, and the page analyzer composes both over a
//! single page's HTML.

mod classifier;
mod page;
mod validator;

pub use classifier::{classify, ClassifiedLink, Link, LinkScope};
pub use page::{analyze_page, rounded_percent, PageAnalysis};
pub use validator::Validator;
