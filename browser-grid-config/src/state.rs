//! Key/value persistence for grid state.
//!
//! The grid never writes files directly. It reads and writes string-keyed
//! entries through a [`StateStore`]; [`YamlStateStore`] keeps them in
//! `state.yaml`, [`MemoryStateStore`] keeps them in memory for tests and
//! ephemeral sessions.

use crate::config::write_atomic;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One stored entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

/// Get/set access to persisted entries by string key
pub trait StateStore {
    /// Read the raw entry for `key`
    fn get(&self, key: &str) -> Option<StoredValue>;

    /// Replace the entry for `key`
    fn set(&mut self, key: &str, value: StoredValue);

    /// Persist pending writes, if the store is backed by something durable
    fn flush(&mut self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Read an ordered list of strings
    ///
    /// Older builds stored lists as a JSON-encoded string; that form is
    /// still accepted.
    fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            StoredValue::List(items) => Some(items),
            StoredValue::Text(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(items) => Some(items),
                Err(e) => {
                    log::warn!("State entry '{}' is not a list: {}", key, e);
                    None
                }
            },
            other => {
                log::warn!("State entry '{}' is not a list: {:?}", key, other);
                None
            }
        }
    }

    /// Read an integer; fractional values are rounded
    fn get_integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            StoredValue::Integer(value) => Some(value),
            StoredValue::Float(value) if value.is_finite() => Some(value.round() as i64),
            StoredValue::Text(raw) => raw.trim().parse().ok(),
            other => {
                log::warn!("State entry '{}' is not a number: {:?}", key, other);
                None
            }
        }
    }

    /// Read a text entry
    fn get_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            StoredValue::Text(value) => Some(value),
            other => {
                log::warn!("State entry '{}' is not text: {:?}", key, other);
                None
            }
        }
    }

    fn set_string_list(&mut self, key: &str, items: &[String]) {
        self.set(key, StoredValue::List(items.to_vec()));
    }

    fn set_integer(&mut self, key: &str, value: i64) {
        self.set(key, StoredValue::Integer(value));
    }

    fn set_text(&mut self, key: &str, value: &str) {
        self.set(key, StoredValue::Text(value.to_string()));
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    values: BTreeMap<String, StoredValue>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Store backed by a YAML mapping on disk
///
/// Writes are buffered until [`StateStore::flush`].
#[derive(Debug)]
pub struct YamlStateStore {
    path: PathBuf,
    values: BTreeMap<String, StoredValue>,
    dirty: bool,
}

impl YamlStateStore {
    /// Open the store at `path`; a missing or empty file yields an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let values = Self::read_values(&path)?;
        log::info!("Opened state store {:?} ({} entries)", path, values.len());
        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    fn read_values(path: &Path) -> Result<BTreeMap<String, StoredValue>, ConfigError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl StateStore for YamlStateStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }
        let yaml = serde_yaml_ng::to_string(&self.values).map_err(ConfigError::Serialize)?;
        write_atomic(&self.path, &yaml)?;
        self.dirty = false;
        log::debug!("Flushed {} state entries to {:?}", self.values.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_typed_access() {
        let mut store = MemoryStateStore::new();
        store.set_integer("columnsCount", 4);
        store.set_text("sideMenuVisibility", "expanded");
        store.set_string_list("urls", &["https://a.com".to_string(), String::new()]);

        assert_eq!(store.get_integer("columnsCount"), Some(4));
        assert_eq!(store.get_text("sideMenuVisibility").as_deref(), Some("expanded"));
        assert_eq!(
            store.get_string_list("urls"),
            Some(vec!["https://a.com".to_string(), String::new()])
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_float_entries_round_to_integers() {
        let mut store = MemoryStateStore::new();
        store.set("zoom", StoredValue::Float(70.0));
        assert_eq!(store.get_integer("zoom"), Some(70));
    }

    #[test]
    fn test_json_encoded_list_is_accepted() {
        let mut store = MemoryStateStore::new();
        store.set_text("urls", r#"["http://a.com",""]"#);
        assert_eq!(
            store.get_string_list("urls"),
            Some(vec!["http://a.com".to_string(), String::new()])
        );
    }

    #[test]
    fn test_wrong_type_reads_as_none() {
        let mut store = MemoryStateStore::new();
        store.set_integer("urls", 3);
        assert_eq!(store.get_string_list("urls"), None);
        assert_eq!(store.get_text("urls"), None);
    }

    #[test]
    fn test_yaml_store_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("state.yaml");

        let mut store = YamlStateStore::open(&path).unwrap();
        assert!(!store.is_dirty());
        store.set_string_list("urls", &["https://a.com".to_string()]);
        store.set_integer("rowsCount", 2);
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reopened = YamlStateStore::open(&path).unwrap();
        assert_eq!(
            reopened.get_string_list("urls"),
            Some(vec!["https://a.com".to_string()])
        );
        assert_eq!(reopened.get_integer("rowsCount"), Some(2));
    }

    #[test]
    fn test_yaml_store_unchanged_value_stays_clean() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("state.yaml");
        fs::write(&path, "columnsCount: 3\n").unwrap();

        let mut store = YamlStateStore::open(&path).unwrap();
        store.set_integer("columnsCount", 3);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_yaml_store_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let store = YamlStateStore::open(temp.path().join("missing.yaml")).unwrap();
        assert_eq!(store.get("urls"), None);
    }
}
