//! Configuration loading and validation
//!
//! Configuration comes from a TOML file (all keys optional except the seed
//! URL) with command-line overrides applied on top.

mod parser;
mod types;
mod validation;

pub use parser::{load_config, Overrides};
pub use types::{Config, CrawlConfig, OutputConfig, ValidationConfig};
pub use validation::validate;
