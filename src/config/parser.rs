use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Command-line overrides applied on top of the file configuration
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Seed URL (replaces `crawl.start-url`)
    pub start_url: Option<String>,

    /// Page budget (replaces `crawl.max-pages`)
    pub max_pages: Option<u32>,

    /// Output directory (replaces `output.output-dir`)
    pub output_dir: Option<PathBuf>,
}

/// Loads the configuration, applies overrides, and validates the result
///
/// When `path` is `None` the defaults are used as the base, so a bare
/// `--url` invocation works without any config file.
///
/// # Arguments
///
/// * `path` - Optional path to a TOML configuration file
/// * `overrides` - Command-line overrides
///
/// # Returns
///
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err(ConfigError)` - Failed to read, parse, or validate
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)?;
            toml::from_str::<Config>(&content)?
        }
        None => Config::default(),
    };

    if let Some(url) = &overrides.start_url {
        config.crawl.start_url = url.clone();
    }
    if let Some(max_pages) = overrides.max_pages {
        config.crawl.max_pages = max_pages;
    }
    if let Some(dir) = &overrides.output_dir {
        config.output.output_dir = dir.clone();
    }

    validate(&config)?;

    Ok(config)
}
