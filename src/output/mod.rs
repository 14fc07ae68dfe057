//! Output persistence and run summaries
//!
//! The composite run output is written twice: once as the singular latest
//! artifact under the `OUTPUT` key, and once as an appended dataset record,
//! so downstream consumers can use either access pattern.

mod json_store;
mod memory;
mod traits;

pub use json_store::FsStore;
pub use memory::MemoryStore;
pub use traits::{OutputStore, StoreError, StoreResult, OUTPUT_KEY, PAGE_ANALYZED_KEY};

use crate::report::DomainReport;

/// Prints the end-of-run domain summary to stdout
pub fn print_summary(report: &DomainReport) {
    println!("=== Domain Analysis Summary ===\n");
    println!("Domain: {}", report.domain_name);
    println!("Pages analyzed: {}", report.total_pages_analyzed);
    println!("Total links: {}", report.total_links);
    println!(
        "Broken links: {} ({}%)",
        report.total_broken_links, report.broken_links_percentage
    );
    println!(
        "  Internal broken: {} ({}%)",
        report.broken_internal_links, report.broken_internal_percentage
    );
    println!(
        "  External broken: {} ({}%)",
        report.broken_external_links, report.broken_external_percentage
    );

    if !report.all_broken_links.is_empty() {
        println!("\nBroken links by status code:");
        for (status, links) in &report.broken_links_by_status_code {
            println!("  {}: {}", status, links.len());
        }
    }
}
