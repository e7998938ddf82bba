//! Stacking-order commands over the live item collection.
//!
//! DESIGN
//! ======
//! The stacking key is a real number, not an integer slot. Raising to the
//! front or lowering to the back steps past the current extremum by one;
//! single-step moves splice the target fractionally past its neighbor
//! (`neighbor ± 0.5`), which keeps every other item's key untouched instead
//! of renumbering the sequence on each move. Repeated splicing fragments the
//! keys; [`renumber`] compacts them back to `0..n-1` without changing
//! relative order.
//!
//! Ties are broken by insertion order, and [`sorted_by_z`] is the single
//! ascending sort used for both render order and gesture-handler
//! registration order — the two must never diverge, or what the user sees
//! and what their finger grabs would disagree.
//!
//! A command naming an absent id is a soft no-op: under rapid edits an item
//! can be removed mid-gesture, so "not found" is expected traffic, logged
//! and swallowed rather than surfaced.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use crate::consts::Z_SPLICE_STEP;
use crate::item::CanvasItem;

/// All items sorted ascending by stacking key.
///
/// The sort is stable: items sharing a key keep their insertion order. Use
/// this one sort for every order-sensitive consumer.
#[must_use]
pub fn sorted_by_z(items: &[CanvasItem]) -> Vec<&CanvasItem> {
    let mut sorted: Vec<&CanvasItem> = items.iter().collect();
    sorted.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
    sorted
}

/// Raise an item above everything else: key becomes `max + 1`.
///
/// The max is taken over all items (the target included), so raising the
/// frontmost item still bumps its key. An empty or missing max counts as 0.
/// Returns `false` (after a warn) when the id is absent.
pub fn bring_to_front(items: &mut [CanvasItem], id: &str) -> bool {
    let max_z = items.iter().map(|i| i.z_index).reduce(f64::max).unwrap_or(0.0);
    set_z(items, id, max_z + 1.0, "bring_to_front")
}

/// Lower an item beneath everything else: key becomes `min - 1`.
pub fn send_to_back(items: &mut [CanvasItem], id: &str) -> bool {
    let min_z = items.iter().map(|i| i.z_index).reduce(f64::min).unwrap_or(0.0);
    set_z(items, id, min_z - 1.0, "send_to_back")
}

/// Move an item one step up: splice it just past its immediate successor in
/// ascending order. No-op when the item is already frontmost.
pub fn bring_forward(items: &mut [CanvasItem], id: &str) -> bool {
    let new_z = {
        let sorted = sorted_by_z(items);
        let Some(pos) = sorted.iter().position(|i| i.id == id) else {
            tracing::warn!(%id, "bring_forward: no such item");
            return false;
        };
        match sorted.get(pos + 1) {
            Some(successor) => successor.z_index + Z_SPLICE_STEP,
            None => return false,
        }
    };
    set_z(items, id, new_z, "bring_forward")
}

/// Move an item one step down: splice it just beneath its immediate
/// predecessor. No-op when the item is already backmost.
pub fn send_backward(items: &mut [CanvasItem], id: &str) -> bool {
    let new_z = {
        let sorted = sorted_by_z(items);
        let Some(pos) = sorted.iter().position(|i| i.id == id) else {
            tracing::warn!(%id, "send_backward: no such item");
            return false;
        };
        if pos == 0 {
            return false;
        }
        sorted[pos - 1].z_index - Z_SPLICE_STEP
    };
    set_z(items, id, new_z, "send_backward")
}

/// Compact fragmented stacking keys to contiguous `0..n-1` in current order.
///
/// Relative order is preserved exactly; only the key values change. Safe to
/// run at any quiet point (e.g. before saving an arrangement).
pub fn renumber(items: &mut [CanvasItem]) {
    let order: Vec<String> = sorted_by_z(items).iter().map(|i| i.id.clone()).collect();
    for (slot, id) in order.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let z = slot as f64;
        if let Some(item) = items.iter_mut().find(|i| i.id == *id) {
            item.z_index = z;
        }
    }
}

fn set_z(items: &mut [CanvasItem], id: &str, z: f64, command: &str) -> bool {
    let Some(item) = items.iter_mut().find(|i| i.id == id) else {
        tracing::warn!(%id, command, "stacking command for unknown item");
        return false;
    };
    tracing::debug!(%id, command, from = item.z_index, to = z, "stacking order changed");
    item.z_index = z;
    true
}
