//! Item model: the live canvas entity and its persisted record shape.
//!
//! [`CanvasItem`] is what the session owns while an arrangement is being
//! edited: identity, encoded image, fixed size, real-valued stacking key,
//! and a live [`Transform`] handle shared with the gesture layer.
//! [`SavedItem`] is the plain record that arrangement persistence reads and
//! writes; it freezes the transform into a [`Placement`].

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::payload::EncodedImage;
use crate::transform::{Placement, Transform};

/// Stable unique identifier for a canvas item.
///
/// Ids are opaque strings: freshly dropped items get a generated UUID string,
/// reconstructed items keep whatever id their saved record carries.
pub type ItemId = String;

/// Fixed display size of an item, in canvas-relative units.
///
/// Assigned once at creation (or copied from the saved record) and never
/// resized afterwards; visual size changes go through the transform's scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

/// One placed item on the live canvas.
#[derive(Debug, Clone)]
pub struct CanvasItem {
    /// Unique within the owning session at any instant.
    pub id: ItemId,
    /// Optional display name carried over from the catalog.
    pub name: Option<String>,
    /// Self-describing encoded image payload.
    pub image: EncodedImage,
    /// Fixed size; see [`ItemSize`].
    pub size: ItemSize,
    /// Real-valued stacking key; higher draws on top. Mutated only by the
    /// stacking-order commands in [`crate::layer`].
    pub z_index: f64,
    /// Live transform, shared with the gesture binding for this item.
    pub transform: Arc<Transform>,
}

impl CanvasItem {
    /// Freeze this item into its persisted record shape.
    #[must_use]
    pub fn to_saved(&self) -> SavedItem {
        SavedItem {
            id: self.id.clone(),
            name: self.name.clone(),
            data: self.image.clone(),
            z_index: self.z_index,
            size: self.size,
            placement: self.transform.snapshot(),
        }
    }
}

/// Persisted record for one item of a saved arrangement.
///
/// The on-disk shape is an ordered list of these, serialized as JSON by the
/// host store. Round-trips with [`CanvasItem`] via
/// [`CanvasItem::to_saved`] and [`SavedItem::into_item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Encoded image in self-describing form.
    pub data: EncodedImage,
    /// Stacking key, copied verbatim in both directions.
    pub z_index: f64,
    pub size: ItemSize,
    /// Saved transform fields; seeds the live transform on reconstruction.
    #[serde(default)]
    pub placement: Placement,
}

impl SavedItem {
    /// Rehydrate the live entity, seeding its transform from the saved
    /// placement rather than the identity defaults.
    #[must_use]
    pub fn into_item(self) -> CanvasItem {
        CanvasItem {
            id: self.id,
            name: self.name,
            image: self.data,
            size: self.size,
            z_index: self.z_index,
            transform: Arc::new(Transform::from_placement(self.placement)),
        }
    }
}
