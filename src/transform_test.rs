#![allow(clippy::float_cmp)]

use std::sync::Arc;
use std::thread;

use super::*;

// =============================================================
// Defaults and field access
// =============================================================

#[test]
fn new_transform_is_identity() {
    let t = Transform::new();
    assert_eq!(t.x(), 0.0);
    assert_eq!(t.y(), 0.0);
    assert_eq!(t.rotation(), 0.0);
    assert_eq!(t.scale(), 1.0);
}

#[test]
fn default_placement_is_identity() {
    let p = Placement::default();
    assert_eq!(p, Placement { x: 0.0, y: 0.0, rotation: 0.0, scale: 1.0 });
}

#[test]
fn fields_are_independent() {
    let t = Transform::new();
    t.set_position(10.0, 20.0);
    t.set_rotation(1.5);
    assert_eq!(t.x(), 10.0);
    assert_eq!(t.y(), 20.0);
    assert_eq!(t.rotation(), 1.5);
    // scale untouched by the other channels
    assert_eq!(t.scale(), 1.0);
}

#[test]
fn last_write_wins_per_field() {
    let t = Transform::new();
    t.set_scale(2.0);
    t.set_scale(0.5);
    assert_eq!(t.scale(), 0.5);
}

// =============================================================
// Snapshot / restore
// =============================================================

#[test]
fn snapshot_captures_current_values() {
    let t = Transform::new();
    t.set_position(3.0, 4.0);
    t.set_rotation(0.25);
    t.set_scale(1.5);
    let p = t.snapshot();
    assert_eq!(p, Placement { x: 3.0, y: 4.0, rotation: 0.25, scale: 1.5 });
}

#[test]
fn restore_round_trips() {
    let saved = Placement { x: -8.0, y: 12.5, rotation: -0.7, scale: 0.9 };
    let t = Transform::new();
    t.restore(saved);
    assert_eq!(t.snapshot(), saved);
}

#[test]
fn from_placement_seeds_fields() {
    let p = Placement { x: 1.0, y: 2.0, rotation: 3.0, scale: 4.0 };
    let t = Transform::from_placement(p);
    assert_eq!(t.snapshot(), p);
}

// =============================================================
// Cross-thread visibility
// =============================================================

#[test]
fn writes_from_another_thread_are_observed() {
    let t = Arc::new(Transform::new());
    let writer = Arc::clone(&t);
    let handle = thread::spawn(move || {
        writer.set_position(100.0, 200.0);
        writer.set_rotation(1.0);
        writer.set_scale(2.0);
    });
    handle.join().expect("writer thread panicked");
    assert_eq!(t.snapshot(), Placement { x: 100.0, y: 200.0, rotation: 1.0, scale: 2.0 });
}

#[test]
fn reads_never_tear_under_concurrent_writes() {
    // The writer flips x between two full bit patterns; a torn read would
    // surface a value that is neither.
    let t = Arc::new(Transform::new());
    let writer = Arc::clone(&t);
    let handle = thread::spawn(move || {
        for i in 0..10_000 {
            let v = if i % 2 == 0 { 1.0_f64 } else { -1.0_f64 };
            writer.set_position(v, v);
        }
    });
    for _ in 0..10_000 {
        let x = t.x();
        assert!(x == 0.0 || x == 1.0 || x == -1.0, "torn read: {x}");
    }
    handle.join().expect("writer thread panicked");
}

// =============================================================
// Placement serde
// =============================================================

#[test]
fn placement_serde_roundtrip() {
    let p = Placement { x: 5.0, y: -6.0, rotation: 0.5, scale: 2.0 };
    let json = serde_json::to_string(&p).unwrap();
    let back: Placement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn debug_format_shows_fields() {
    let t = Transform::new();
    let s = format!("{t:?}");
    assert!(s.contains("Transform"));
    assert!(s.contains("scale"));
}
