//! Linkscan main entry point
//!
//! Command-line interface for the broken-link auditor.

use anyhow::Context;
use clap::Parser;
use linkscan::config::{load_config, Overrides};
use linkscan::crawler::run_scan;
use linkscan::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkscan: audit a website for broken links
///
/// Crawls a site breadth-first from a seed URL, probes every discovered
/// link, and writes a per-page and domain-level broken-link report.
#[derive(Parser, Debug)]
#[command(name = "linkscan")]
#[command(version = "1.0.0")]
#[command(about = "Audit a website for broken links", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Seed URL to crawl (overrides the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Maximum number of pages to analyze (overrides the config file)
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Output directory (overrides the config file)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let overrides = Overrides {
        start_url: cli.url.clone(),
        max_pages: cli.max_pages,
        output_dir: cli.output_dir.clone(),
    };

    let config = load_config(cli.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!("Starting broken links analysis for {}", config.crawl.start_url);

    let output = run_scan(&config).await.context("Scan failed")?;

    if !cli.quiet {
        print_summary(&output.domain);
        println!(
            "\nProcessed {} pages; output written to {}",
            output.analysis.total_pages_processed,
            config.output.output_dir.display()
        );
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkscan=info,warn"),
            1 => EnvFilter::new("linkscan=debug,info"),
            2 => EnvFilter::new("linkscan=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: shows the effective configuration and exits
fn handle_dry_run(config: &linkscan::Config) {
    println!("=== Linkscan Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", config.crawl.start_url);
    println!("  Max pages: {}", config.crawl.max_pages);
    println!("  User agent: {}", config.crawl.user_agent);
    println!("  Timeout: {}ms", config.crawl.timeout_ms);
    println!("  Max redirects: {}", config.crawl.max_redirects);

    println!("\nValidation:");
    println!(
        "  Internal links: {}",
        if config.validation.include_internal_links {
            "included"
        } else {
            "skipped"
        }
    );
    println!(
        "  External links: {}",
        if config.validation.include_external_links {
            "included"
        } else {
            "skipped"
        }
    );
    println!("  Batch size: {}", config.validation.batch_size);
    println!("  Batch delay: {}ms", config.validation.batch_delay_ms);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.output_dir.display());

    println!("\n✓ Configuration is valid");
}
