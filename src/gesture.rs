//! Gesture-to-transform contract: continuous deltas in, committed baselines
//! between lift-offs.
//!
//! DESIGN
//! ======
//! A live gesture reports cumulative deltas relative to its own start: a pan
//! reports total translation since touch-down, a rotation its total angle, a
//! pinch its total scale factor. The binding keeps one committed baseline
//! per channel and resolves every change event against it, writing the
//! result straight into the item's shared [`Transform`]:
//!
//! - pan:      position = baseline + translation
//! - rotation: angle    = baseline + delta
//! - pinch:    scale    = baseline * factor
//!
//! On lift-off the channel commits (`baseline = current value`), so the next
//! gesture sequence continues from where this one ended. A sequence that is
//! interrupted without lift-off (app backgrounded mid-drag) never commits:
//! the transform keeps its last in-progress value and the stale baseline is
//! simply overwritten by the next completed gesture. The three channels are
//! independent and may run simultaneously on multi-touch hardware.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use std::sync::Arc;

use crate::transform::Transform;

/// Binds one item's live transform to a multi-touch gesture stream.
///
/// One binding per item; constructed by the host when it attaches gesture
/// recognizers, holding the same `Arc<Transform>` the session owns.
#[derive(Debug)]
pub struct GestureBinding {
    transform: Arc<Transform>,
    base_x: f64,
    base_y: f64,
    base_rotation: f64,
    base_scale: f64,
}

impl GestureBinding {
    /// Bind to an item's transform, adopting its current values as the
    /// initial baselines (so reopened arrangements don't snap to origin).
    #[must_use]
    pub fn new(transform: Arc<Transform>) -> Self {
        let p = transform.snapshot();
        Self {
            transform,
            base_x: p.x,
            base_y: p.y,
            base_rotation: p.rotation,
            base_scale: p.scale,
        }
    }

    // ── Pan ─────────────────────────────────────────────────────

    /// A pan change event: cumulative translation since the pan began.
    pub fn pan_change(&self, translation_x: f64, translation_y: f64) {
        self.transform
            .set_position(self.base_x + translation_x, self.base_y + translation_y);
    }

    /// Pan lift-off: commit the current position as the next baseline.
    pub fn pan_end(&mut self) {
        self.base_x = self.transform.x();
        self.base_y = self.transform.y();
    }

    // ── Rotation ────────────────────────────────────────────────

    /// A rotation change event: cumulative angle (radians) since it began.
    pub fn rotate_change(&self, delta: f64) {
        self.transform.set_rotation(self.base_rotation + delta);
    }

    /// Rotation lift-off: commit the current angle.
    pub fn rotate_end(&mut self) {
        self.base_rotation = self.transform.rotation();
    }

    // ── Pinch ───────────────────────────────────────────────────

    /// A pinch change event: cumulative scale factor since it began.
    pub fn pinch_change(&self, factor: f64) {
        self.transform.set_scale(self.base_scale * factor);
    }

    /// Pinch lift-off: commit the current scale.
    pub fn pinch_end(&mut self) {
        self.base_scale = self.transform.scale();
    }

    /// The bound transform handle.
    #[must_use]
    pub fn transform(&self) -> &Arc<Transform> {
        &self.transform
    }
}
