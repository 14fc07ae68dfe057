//! Output store trait and error types
//!
//! The store models the two persistence surfaces the engine writes to: a
//! keyed value store (latest output, counters) and an append-only dataset.

use serde_json::Value;
use thiserror::Error;

/// Key under which the latest composite run output is stored
pub const OUTPUT_KEY: &str = "OUTPUT";

/// Key for the billable pages-analyzed counter
pub const PAGE_ANALYZED_KEY: &str = "PAGE_ANALYZED";

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed value store plus append-only dataset
pub trait OutputStore {
    /// Reads a keyed value, `None` when the key has never been written
    fn get_value(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Writes a keyed value, replacing any previous one
    fn set_value(&mut self, key: &str, value: &Value) -> StoreResult<()>;

    /// Appends one record to the dataset
    fn push_record(&mut self, record: &Value) -> StoreResult<()>;
}
