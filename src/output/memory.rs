//! In-memory output store, for tests and dry runs

use crate::output::traits::{OutputStore, StoreResult};
use serde_json::Value;
use std::collections::HashMap;

/// Output store that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    records: Vec<Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All dataset records pushed so far, in order
    pub fn records(&self) -> &[Value] {
        &self.records
    }
}

impl OutputStore for MemoryStore {
    fn get_value(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_value(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn push_record(&mut self, record: &Value) -> StoreResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
