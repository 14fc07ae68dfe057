//! Crawl frontier state
//!
//! FIFO queue of pending URLs plus the visited set and the processed-page
//! counter. Owned exclusively by the coordinator and mutated only between
//! suspension points; a fresh `CrawlState` is constructed for every run.
//!
//! Invariants: a URL in the visited set is never re-enqueued, and a URL
//! already pending is never enqueued twice. URL identity is the normalized
//! URL string.

use std::collections::{HashSet, VecDeque};

/// Mutable state of one crawl run
#[derive(Debug)]
pub struct CrawlState {
    queue: VecDeque<String>,
    visited: HashSet<String>,
    processed: u32,
}

impl CrawlState {
    /// Creates a fresh state seeded with one URL
    pub fn new(seed: String) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(seed);
        Self {
            queue,
            visited: HashSet::new(),
            processed: 0,
        }
    }

    /// Dequeues the next pending URL in FIFO order
    pub fn next(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Whether a URL has already been visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL visited (called before fetching, so overlapping discovery
    /// can never re-enqueue it)
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    /// Enqueues a discovered URL unless it is visited or already pending
    ///
    /// The pending check is a linear scan, which is fine at crawl-scale
    /// queue sizes.
    pub fn enqueue(&mut self, url: String) -> bool {
        if self.visited.contains(&url) || self.queue.contains(&url) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    /// Counts one page outcome (success or failure) against the budget
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// Pages processed so far
    pub fn processed(&self) -> u32 {
        self.processed
    }

    /// Number of URLs still pending
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
