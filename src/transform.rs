//! Per-item transform state: position, rotation, and scale.
//!
//! DESIGN
//! ======
//! Each item's transform is written at gesture frequency (every pointer
//! event of an active pan/rotate/pinch) and read by the renderer once per
//! frame, potentially from a different thread. The four fields map to
//! independent gesture channels, so they are modeled as four independently
//! atomic cells rather than one record replaced wholesale: a writer never
//! blocks a reader, a reader never observes a torn field, and the last write
//! per field wins. The fields are not updated as one atomic group — that is
//! deliberate, not a gap.
//!
//! [`Transform`] is shared as `Arc<Transform>`: the owning item holds one
//! reference, the gesture binding holds another. [`Placement`] is the plain
//! serializable snapshot used for persistence and render passes.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An immutable snapshot of one item's transform.
///
/// This is the persisted and rendered shape; the live, mutable counterpart is
/// [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge offset in canvas coordinates.
    pub x: f64,
    /// Top edge offset in canvas coordinates.
    pub y: f64,
    /// Rotation in radians around the item center.
    pub rotation: f64,
    /// Uniform scale factor (1.0 = natural size).
    pub scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, rotation: 0.0, scale: 1.0 }
    }
}

/// An `f64` cell that can be read and written atomically via its bit pattern.
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

/// Live transform for one canvas item.
///
/// Created with the identity defaults `(0, 0, 0, 1)` when an item enters the
/// canvas, or seeded from a saved [`Placement`] when an arrangement is
/// reopened. Dropped with its owning item; never shared between items.
pub struct Transform {
    x: AtomicF64,
    y: AtomicF64,
    rotation: AtomicF64,
    scale: AtomicF64,
}

impl Transform {
    /// Identity transform: origin position, no rotation, natural scale.
    #[must_use]
    pub fn new() -> Self {
        Self::from_placement(Placement::default())
    }

    /// A transform seeded from persisted values.
    #[must_use]
    pub fn from_placement(p: Placement) -> Self {
        Self {
            x: AtomicF64::new(p.x),
            y: AtomicF64::new(p.y),
            rotation: AtomicF64::new(p.rotation),
            scale: AtomicF64::new(p.scale),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x.load()
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y.load()
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation.load()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.load()
    }

    /// Set both position fields. Two independent field writes, not one
    /// atomic pair; each is individually tear-free.
    pub fn set_position(&self, x: f64, y: f64) {
        self.x.store(x);
        self.y.store(y);
    }

    pub fn set_rotation(&self, rotation: f64) {
        self.rotation.store(rotation);
    }

    pub fn set_scale(&self, scale: f64) {
        self.scale.store(scale);
    }

    /// Capture the current field values as a plain record.
    ///
    /// Each field is read atomically; the combination reflects the latest
    /// committed value of every independent channel at (approximately) this
    /// instant, which is the contract renders and saves need.
    #[must_use]
    pub fn snapshot(&self) -> Placement {
        Placement {
            x: self.x.load(),
            y: self.y.load(),
            rotation: self.rotation.load(),
            scale: self.scale.load(),
        }
    }

    /// Overwrite all fields from a saved record.
    pub fn restore(&self, p: Placement) {
        self.x.store(p.x);
        self.y.store(p.y);
        self.rotation.store(p.rotation);
        self.scale.store(p.scale);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("rotation", &self.rotation())
            .field("scale", &self.scale())
            .finish()
    }
}
