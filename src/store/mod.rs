//! Durable key-value storage.
//!
//! Every persisted collection lives under a single string key as one JSON
//! value. Writes replace the whole value; there is no partial update.
//!
//! - [`KeyValueStore`] is the adapter contract
//! - [`MemoryStore`] keeps raw JSON text in process (tests, snapshots)
//! - [`FileStore`] keeps one `<key>.json` file per key in a directory
//!
//! Reads never fail. A missing key, unreadable backing data, or malformed
//! JSON all read as "absent", which callers treat exactly like "never
//! initialized".

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ShelfError};

/// Key holding the registered accounts.
pub const ACCOUNTS_KEY: &str = "accounts";

/// Key holding the active session, absent when logged out.
pub const SESSION_KEY: &str = "session";

/// Key holding the like registry.
pub const LIKES_KEY: &str = "likes";

/// Synchronous key-value persistence.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &Value) -> Result<()>;

    /// Delete `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read and deserialize `key`.
///
/// A value of the wrong shape is treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring stored '{}' with unexpected shape: {}", key, e);
            None
        }
    }
}

/// Serialize `value` and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let value = serde_json::to_value(value).map_err(|e| ShelfError::Storage {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &value)
}
