//! Filesystem-backed output store
//!
//! Keyed values live at `<dir>/<KEY>.json` (pretty-printed, replaced on
//! write); dataset records are appended to `<dir>/dataset.jsonl`, one compact
//! JSON object per line.

use crate::output::traits::{OutputStore, StoreError, StoreResult};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the append-only dataset file
const DATASET_FILE: &str = "dataset.jsonl";

/// Output store rooted at a directory
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates the store, creating the root directory if needed
    pub fn new(root: &Path) -> StoreResult<Self> {
        std::fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    fn value_path(&self, key: &str) -> StoreResult<PathBuf> {
        // Keys become file names, so nothing that could escape the root
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl OutputStore for FsStore {
    fn get_value(&self, key: &str) -> StoreResult<Option<Value>> {
        let path = self.value_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn set_value(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        let path = self.value_path(key)?;
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn push_record(&mut self, record: &Value) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(DATASET_FILE))?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path()).unwrap();

        assert!(store.get_value("OUTPUT").unwrap().is_none());

        let value = json!({"total_links": 12});
        store.set_value("OUTPUT", &value).unwrap();
        assert_eq!(store.get_value("OUTPUT").unwrap(), Some(value));
    }

    #[test]
    fn test_set_value_replaces() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path()).unwrap();

        store.set_value("PAGE_ANALYZED", &json!(1)).unwrap();
        store.set_value("PAGE_ANALYZED", &json!(2)).unwrap();
        assert_eq!(store.get_value("PAGE_ANALYZED").unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_push_record_appends_lines() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path()).unwrap();

        store.push_record(&json!({"run": 1})).unwrap();
        store.push_record(&json!({"run": 2})).unwrap();

        let content = std::fs::read_to_string(dir.path().join(DATASET_FILE)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            serde_json::from_str::<Value>(lines[1]).unwrap(),
            json!({"run": 2})
        );
    }

    #[test]
    fn test_invalid_key_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.set_value("../escape", &json!(1)).unwrap_err(),
            StoreError::InvalidKey(_)
        ));
        assert!(matches!(
            store.get_value("").unwrap_err(),
            StoreError::InvalidKey(_)
        ));
    }
}
