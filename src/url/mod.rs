//! URL normalization and host classification helpers

mod domain;
mod normalize;

pub use domain::{is_social_domain, same_origin, SOCIAL_DOMAINS};
pub use normalize::normalize_url;
