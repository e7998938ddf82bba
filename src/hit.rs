//! Hit-testing: which item lies under a point, topmost first.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::item::CanvasItem;
use crate::transform::Point;

/// Return the topmost item whose bounding rectangle contains `point`, or
/// `None` when nothing does (or the collection is empty).
///
/// Items are scanned in descending stacking order; the scan is stable, so
/// items sharing a key are probed in insertion order and repeated probes are
/// deterministic. The containment
/// box is the unrotated, scale-adjusted rectangle anchored at the transform
/// position: `(x, y)` to `(x + w*scale, y + h*scale)`, bounds inclusive.
/// The item's current rotation is deliberately not applied to the box, so a
/// strongly rotated item's touch target diverges from its visual bounds —
/// that is the established behavior of this engine, kept as-is.
///
/// Read-only and `O(n log n)`; safe to call at gesture frequency.
#[must_use]
pub fn top_item_at(items: &[CanvasItem], point: Point) -> Option<&CanvasItem> {
    let mut sorted: Vec<&CanvasItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.z_index.total_cmp(&a.z_index));

    sorted.into_iter().find(|item| contains(item, point))
}

/// Point-in-rectangle test against one item's scale-adjusted box.
fn contains(item: &CanvasItem, point: Point) -> bool {
    let t = item.transform.snapshot();
    let width = item.size.width * t.scale;
    let height = item.size.height * t.scale;

    point.x >= t.x && point.x <= t.x + width && point.y >= t.y && point.y <= t.y + height
}
