//! Saved arrangements: a flattened composite image plus per-item placement
//! records, persisted as a named collection.

#[cfg(test)]
#[path = "outfit_test.rs"]
mod outfit_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::OUTFIT_STORE_KEY;
use crate::item::SavedItem;
use crate::payload::EncodedImage;
use crate::session::CanvasSession;
use crate::store::{KvStore, PersistenceError};

/// One saved arrangement.
///
/// `image` is the flattened composite the host renderer produced at save
/// time, used for list thumbnails; `entries` carry everything needed to
/// reconstruct the editable canvas, stacking order and transforms included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Flattened composite image of the whole arrangement.
    pub image: EncodedImage,
    /// Per-item records in the session's insertion order.
    pub entries: Vec<SavedItem>,
}

impl Outfit {
    /// Capture the session's current item set as a saved arrangement.
    ///
    /// `composite` is the flattened image the host rendered from the same
    /// state; the engine stores it opaquely.
    #[must_use]
    pub fn from_session(session: &CanvasSession, name: Option<String>, composite: EncodedImage) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            image: composite,
            entries: session.to_saved(),
        }
    }
}

/// Load all saved arrangements from the store.
///
/// Absent or malformed stored JSON degrades to an empty list with a warn.
///
/// # Errors
///
/// Returns [`PersistenceError::Read`] only when the store itself fails.
pub fn load_outfits(store: &dyn KvStore) -> Result<Vec<Outfit>, PersistenceError> {
    let Some(raw) = store.get(OUTFIT_STORE_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(outfits) => Ok(outfits),
        Err(err) => {
            tracing::warn!(key = OUTFIT_STORE_KEY, %err, "malformed outfit JSON, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Overwrite the full arrangement list in the store.
///
/// # Errors
///
/// Returns [`PersistenceError`] when serialization or the store write fails.
pub fn save_outfits(store: &dyn KvStore, outfits: &[Outfit]) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(outfits)?;
    store.set(OUTFIT_STORE_KEY, raw)
}
