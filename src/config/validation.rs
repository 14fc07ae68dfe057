use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a loaded configuration
///
/// Checks:
/// - The seed URL is present, parses, and uses http or https
/// - The page budget is at least 1
/// - The validation batch size is at least 1
/// - The request timeout is non-zero
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawl.start_url.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawl.start-url is required".to_string(),
        ));
    }

    let url = Url::parse(&config.crawl.start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.crawl.start_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "start URL must be http or https, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "start URL has no host: {}",
            config.crawl.start_url
        )));
    }

    if config.crawl.max_pages == 0 {
        return Err(ConfigError::Validation(
            "crawl.max-pages must be at least 1".to_string(),
        ));
    }

    if config.crawl.timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "crawl.timeout-ms must be non-zero".to_string(),
        ));
    }

    if config.validation.batch_size == 0 {
        return Err(ConfigError::Validation(
            "validation.batch-size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
