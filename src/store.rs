//! Persistence seams: the host key-value store and the item catalog.
//!
//! DESIGN
//! ======
//! The engine never talks to a platform store directly. Hosts implement
//! [`KvStore`] (whole-value JSON get/set/delete — a write replaces the full
//! value under a key, there is no incremental protocol) and the engine layers
//! typed catalog and outfit collections on top. Store failures stop at this
//! boundary: a read that fails or holds malformed JSON degrades to an empty
//! collection, a failed write surfaces a [`PersistenceError`] to the caller
//! who asked for it, and session logic keeps running on in-memory state
//! either way.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::consts::ITEM_CATALOG_KEY;
use crate::item::ItemId;
use crate::payload::EncodedImage;

/// A catalog or store operation that could not reach the backing storage.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("store read failed for key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("store write failed for key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-value JSON key-value store provided by the host platform.
pub trait KvStore {
    /// Read the raw JSON string under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Read`] when the backing store fails.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the full value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] when the backing store fails.
    fn set(&self, key: &str, value: String) -> Result<(), PersistenceError>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] when the backing store fails.
    fn delete(&self, key: &str) -> Result<(), PersistenceError>;
}

/// Existence queries against the persisted item catalog.
///
/// The session uses this to decide whether to offer saving a freshly dropped
/// item to the user's catalog.
pub trait CatalogLookup {
    /// Whether the catalog already holds an item with this id.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the catalog cannot be read; callers
    /// on the session path treat that as "absent" rather than failing.
    fn contains(&self, id: &str) -> Result<bool, PersistenceError>;
}

/// One item in the user's persisted catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// Encoded image in self-describing form.
    pub data: EncodedImage,
}

/// Load the full item catalog from the store.
///
/// Absent or malformed stored JSON degrades to an empty catalog (with a
/// warn) rather than failing the caller.
///
/// # Errors
///
/// Returns [`PersistenceError::Read`] only when the store itself fails.
pub fn load_catalog(store: &dyn KvStore) -> Result<Vec<CatalogItem>, PersistenceError> {
    let Some(raw) = store.get(ITEM_CATALOG_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(key = ITEM_CATALOG_KEY, %err, "malformed catalog JSON, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Overwrite the full item catalog in the store.
///
/// # Errors
///
/// Returns [`PersistenceError`] when serialization or the store write fails.
pub fn save_catalog(store: &dyn KvStore, items: &[CatalogItem]) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(items)?;
    store.set(ITEM_CATALOG_KEY, raw)
}

/// Catalog lookup over any [`KvStore`].
///
/// Reads the full catalog per query; catalogs are small (a user's saved
/// wardrobe) and the query runs on discrete taps, not the gesture path.
pub struct StoredCatalog<'a> {
    store: &'a dyn KvStore,
}

impl<'a> StoredCatalog<'a> {
    #[must_use]
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }
}

impl CatalogLookup for StoredCatalog<'_> {
    fn contains(&self, id: &str) -> Result<bool, PersistenceError> {
        let items = load_catalog(self.store)?;
        Ok(items.iter().any(|item| item.id == id))
    }
}

/// In-memory [`KvStore`] for tests and hosts without platform storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let values = self.values.lock().map_err(|_| PersistenceError::Read {
            key: key.to_string(),
            reason: "store lock poisoned".to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), PersistenceError> {
        let mut values = self.values.lock().map_err(|_| PersistenceError::Write {
            key: key.to_string(),
            reason: "store lock poisoned".to_string(),
        })?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        let mut values = self.values.lock().map_err(|_| PersistenceError::Write {
            key: key.to_string(),
            reason: "store lock poisoned".to_string(),
        })?;
        values.remove(key);
        Ok(())
    }
}
