//! The canvas session: authoritative item collection for one editing screen.
//!
//! DESIGN
//! ======
//! One session per open canvas screen, constructed when the screen opens and
//! dropped when it closes; nothing here is global. The session is the single
//! logical owner of its items: discrete commands (add, remove, stacking
//! moves) mutate it through `&mut self` on the interaction loop, while the
//! continuous gesture stream writes only through the per-item transform
//! handles it hands out — those are tear-free on their own and never touch
//! the collection structure. Stacking mutations therefore cannot interleave
//! with a render pass: a [`CanvasSession::render_snapshot`] taken between
//! commands sees either all of a reorder or none of it.
//!
//! Mutations that the host must act on come back as [`SessionEvent`]s, in
//! the style of an action queue: the session decides, the host performs.
//! The save-to-catalog offer in particular is fire-and-forget — it is
//! emitted only after the authoritative insert succeeded and never gates it.
//!
//! The items vector preserves insertion order; callers wanting render order
//! sort by stacking key via [`CanvasSession::items_by_z`]. Neither order is
//! "the" canonical one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use uuid::Uuid;

use crate::consts::{ITEM_HEIGHT_DIVISOR, ITEM_WIDTH_DIVISOR};
use crate::hit;
use crate::item::{CanvasItem, ItemId, ItemSize, SavedItem};
use crate::layer;
use crate::payload::EncodedImage;
use crate::store::CatalogLookup;
use crate::transform::{Placement, Point, Transform};

/// A session mutation the caller asked for could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An insert named an id already present in the session. This is an
    /// upstream logic error (two items competing for one identity), so it is
    /// surfaced rather than swallowed; the session is left unchanged.
    #[error("item already on canvas: {0}")]
    DuplicateItem(ItemId),
}

/// Something the host should do in response to a session mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An item was appended to the canvas.
    ItemAdded { id: ItemId },
    /// The item is not in the user's persisted catalog; offer to save it.
    /// Independent side task — whatever the user answers, the item is
    /// already on the canvas.
    CatalogPromptRequested { id: ItemId },
}

/// One entry of a render pass, in draw order.
///
/// The placement is resolved at snapshot time, so the renderer never reads
/// the live transform itself.
#[derive(Debug, Clone)]
pub struct RenderEntry {
    pub id: ItemId,
    pub image: EncodedImage,
    pub size: ItemSize,
    pub z_index: f64,
    pub placement: Placement,
}

/// Live editing state for one canvas screen.
pub struct CanvasSession {
    items: Vec<CanvasItem>,
    canvas_width: f64,
    canvas_height: f64,
}

impl CanvasSession {
    /// An empty session over a canvas of the given pixel dimensions.
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self { items: Vec::new(), canvas_width, canvas_height }
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Drop a new item onto the canvas.
    ///
    /// Generates an id when none is supplied, normalizes the payload to its
    /// self-describing form, sizes the item to a fixed fraction of the
    /// canvas (width/3 by height/5), stacks it on top (key = current item
    /// count), and appends it with an identity transform.
    ///
    /// After the insert succeeds, the catalog is consulted; if it does not
    /// already hold this id, a [`SessionEvent::CatalogPromptRequested`] is
    /// emitted for the host to offer saving. A catalog that cannot be read
    /// counts as not holding the item — insertion never depends on it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateItem`] when the id is already on the
    /// canvas; the collection is left untouched.
    pub fn add_new_item(
        &mut self,
        catalog: &dyn CatalogLookup,
        raw_image: &str,
        id: Option<ItemId>,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

        if self.items.iter().any(|item| item.id == id) {
            return Err(SessionError::DuplicateItem(id));
        }

        #[allow(clippy::cast_precision_loss)]
        let z_index = self.items.len() as f64;
        let item = CanvasItem {
            id: id.clone(),
            name: None,
            image: EncodedImage::normalize(raw_image),
            size: ItemSize {
                width: self.canvas_width / ITEM_WIDTH_DIVISOR,
                height: self.canvas_height / ITEM_HEIGHT_DIVISOR,
            },
            z_index,
            transform: Arc::new(Transform::new()),
        };
        self.items.push(item);
        tracing::debug!(%id, z_index, "item added to canvas");

        let mut events = vec![SessionEvent::ItemAdded { id: id.clone() }];
        match catalog.contains(&id) {
            Ok(true) => {}
            Ok(false) => events.push(SessionEvent::CatalogPromptRequested { id }),
            Err(err) => {
                tracing::warn!(%id, %err, "catalog lookup failed, offering save anyway");
                events.push(SessionEvent::CatalogPromptRequested { id });
            }
        }
        Ok(events)
    }

    /// Reconstruct an item set from saved records, in entry order.
    ///
    /// Each entry keeps its saved stacking key verbatim and seeds its
    /// transform from the saved placement, so a reopened arrangement comes
    /// back exactly as it was left.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateItem`] when an entry's id is already
    /// in the session or appears twice in the batch. The whole batch is
    /// validated first: on rejection nothing was inserted.
    pub fn add_saved_items(&mut self, entries: &[SavedItem]) -> Result<Vec<SessionEvent>, SessionError> {
        for (index, entry) in entries.iter().enumerate() {
            let in_session = self.items.iter().any(|item| item.id == entry.id);
            let in_batch = entries[..index].iter().any(|prior| prior.id == entry.id);
            if in_session || in_batch {
                return Err(SessionError::DuplicateItem(entry.id.clone()));
            }
        }

        let mut events = Vec::with_capacity(entries.len());
        for entry in entries {
            let item = entry.clone().into_item();
            tracing::debug!(id = %item.id, z_index = item.z_index, "item restored to canvas");
            events.push(SessionEvent::ItemAdded { id: item.id.clone() });
            self.items.push(item);
        }
        Ok(events)
    }

    /// Remove an item. Removing an absent id is a soft no-op (warned, not
    /// an error): under rapid edits the item may already be gone.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            tracing::warn!(%id, "remove_item: no such item");
        } else {
            tracing::debug!(%id, "item removed from canvas");
        }
    }

    /// Update the logical canvas size. Existing items keep the size they
    /// were created with; only future adds see the new dimensions.
    pub fn set_canvas_dimensions(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    // ── Stacking order ──────────────────────────────────────────

    /// Raise an item above everything else.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        layer::bring_to_front(&mut self.items, id)
    }

    /// Lower an item beneath everything else.
    pub fn send_to_back(&mut self, id: &str) -> bool {
        layer::send_to_back(&mut self.items, id)
    }

    /// Move an item one step up in draw order.
    pub fn bring_forward(&mut self, id: &str) -> bool {
        layer::bring_forward(&mut self.items, id)
    }

    /// Move an item one step down in draw order.
    pub fn send_backward(&mut self, id: &str) -> bool {
        layer::send_backward(&mut self.items, id)
    }

    /// Compact fragmented stacking keys to `0..n-1`, order preserved.
    pub fn renumber(&mut self) {
        layer::renumber(&mut self.items);
    }

    /// The double-tap contract: hit-test the point and raise the topmost
    /// hit to the front, returning its id. `None` when nothing was hit.
    pub fn raise_item_at(&mut self, point: Point) -> Option<ItemId> {
        let id = hit::top_item_at(&self.items, point)?.id.clone();
        layer::bring_to_front(&mut self.items, &id);
        Some(id)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// All items in insertion order (the storage-facing order).
    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// All items in ascending stacking order (the render-facing order).
    /// Stable for equal keys; also the order to register gesture handlers
    /// in, so visual order and touch order agree.
    #[must_use]
    pub fn items_by_z(&self) -> Vec<&CanvasItem> {
        layer::sorted_by_z(&self.items)
    }

    /// Look up one item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The live transform handle for one item, for the host's gesture
    /// binding layer. `None` when the id is absent.
    #[must_use]
    pub fn transform_handle(&self, id: &str) -> Option<Arc<Transform>> {
        self.item(id).map(|item| Arc::clone(&item.transform))
    }

    /// Topmost item under a point, if any. Read-only; see [`hit::top_item_at`].
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&CanvasItem> {
        hit::top_item_at(&self.items, point)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical canvas size as `(width, height)`.
    #[must_use]
    pub fn canvas_dimensions(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    // ── Snapshots ───────────────────────────────────────────────

    /// Resolve the whole scene for one render pass, in draw order.
    ///
    /// Transforms are read once here; the returned entries are plain values,
    /// so the pass observes one consistent stacking order no matter what the
    /// gesture stream writes afterwards.
    #[must_use]
    pub fn render_snapshot(&self) -> Vec<RenderEntry> {
        layer::sorted_by_z(&self.items)
            .into_iter()
            .map(|item| RenderEntry {
                id: item.id.clone(),
                image: item.image.clone(),
                size: item.size,
                z_index: item.z_index,
                placement: item.transform.snapshot(),
            })
            .collect()
    }

    /// Freeze the item set into persisted records, in insertion order.
    /// Round-trips with [`CanvasSession::add_saved_items`].
    #[must_use]
    pub fn to_saved(&self) -> Vec<SavedItem> {
        self.items.iter().map(CanvasItem::to_saved).collect()
    }
}
