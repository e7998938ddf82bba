//! Layering and transform engine for a freeform dress-up canvas.
//!
//! This crate owns the scene model behind an outfit-arrangement screen: an
//! ordered set of transparent-background items, each with an independently
//! animated transform (position, rotation, scale), a real-valued stacking
//! order with fractional re-insertion, and point hit-testing to resolve the
//! topmost item under a tap. The host layer is responsible for rendering the
//! ordered snapshot to pixels, binding gestures to the per-item transform
//! handles, and persisting saved arrangements through the store seams.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Top-level [`session::CanvasSession`] orchestration |
//! | [`item`] | Canvas item entity and its persisted record shape |
//! | [`transform`] | Lock-free per-item position/rotation/scale cells |
//! | [`gesture`] | Gesture baseline tracking between lift-offs |
//! | [`layer`] | Stacking-order commands (front/back/forward/backward) |
//! | [`hit`] | Topmost-item-under-a-point queries |
//! | [`payload`] | Encoded-image payload normalization |
//! | [`outfit`] | Saved arrangements (flattened image + placements) |
//! | [`store`] | Key-value persistence and catalog collaborator seams |
//! | [`consts`] | Shared numeric and string constants |

pub mod consts;
pub mod gesture;
pub mod hit;
pub mod item;
pub mod layer;
pub mod outfit;
pub mod payload;
pub mod session;
pub mod store;
pub mod transform;
