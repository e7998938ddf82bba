//! Shared constants for the canvas engine.

// ── Payloads ────────────────────────────────────────────────────

/// Canonical data-URI prefix for encoded item images. Stored payloads carry
/// this prefix exactly once.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

// ── Item sizing ─────────────────────────────────────────────────

/// A freshly added item spans 1/3 of the canvas width.
pub const ITEM_WIDTH_DIVISOR: f64 = 3.0;

/// A freshly added item spans 1/5 of the canvas height.
pub const ITEM_HEIGHT_DIVISOR: f64 = 5.0;

// ── Stacking order ──────────────────────────────────────────────

/// Fractional step used to splice an item past its neighbor without
/// renumbering the rest of the sequence.
pub const Z_SPLICE_STEP: f64 = 0.5;

// ── Storage keys ────────────────────────────────────────────────

/// Host key-value store key holding the persisted item catalog.
pub const ITEM_CATALOG_KEY: &str = "item_collections";

/// Host key-value store key holding the saved arrangements.
pub const OUTFIT_STORE_KEY: &str = "outfit_collections";
