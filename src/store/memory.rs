//! In-process store.

use std::collections::HashMap;

use serde_json::Value;

use super::KeyValueStore;
use crate::error::Result;

/// Store holding raw JSON text per key, like browser local storage.
///
/// Cloning a `MemoryStore` takes a snapshot of everything persisted so far.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under `key` without validating it.
    pub fn insert_raw(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Raw text stored under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Whether anything is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        let text = self.entries.get(key)?;
        match serde_json::from_str(text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed JSON under '{}': {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
