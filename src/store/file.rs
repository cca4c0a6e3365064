//! Directory-backed store, one JSON file per key.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

use super::KeyValueStore;
use crate::error::{Result, ShelfError};

/// Store persisting each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file path for a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Write `content` for `key` via temp file and rename.
    fn write_atomic(&self, key: &str, content: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory {:?}", self.dir))?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move {:?} into place", temp_path))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Could not read {:?}: {}", path, e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed JSON in {:?}: {}", path, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        let content = serde_json::to_string_pretty(value).map_err(|e| ShelfError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        self.write_atomic(key, &content)
            .map_err(|e| ShelfError::Storage {
                key: key.to_string(),
                message: format!("{:#}", e),
            })?;

        tracing::debug!("Persisted '{}' to {:?}", key, self.key_path(key));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ShelfError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
