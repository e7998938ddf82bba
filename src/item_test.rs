#![allow(clippy::float_cmp)]

use std::sync::Arc;

use super::*;

fn make_item(id: &str, z: f64) -> CanvasItem {
    CanvasItem {
        id: id.to_string(),
        name: None,
        image: EncodedImage::normalize("cGl4ZWxz"),
        size: ItemSize { width: 120.0, height: 160.0 },
        z_index: z,
        transform: Arc::new(Transform::new()),
    }
}

// =============================================================
// Live <-> saved conversion
// =============================================================

#[test]
fn to_saved_freezes_transform() {
    let item = make_item("a", 2.0);
    item.transform.set_position(30.0, 40.0);
    item.transform.set_scale(1.5);

    let saved = item.to_saved();
    assert_eq!(saved.id, "a");
    assert_eq!(saved.z_index, 2.0);
    assert_eq!(saved.size, item.size);
    assert_eq!(saved.placement, Placement { x: 30.0, y: 40.0, rotation: 0.0, scale: 1.5 });
}

#[test]
fn into_item_seeds_transform_from_placement() {
    let saved = SavedItem {
        id: "b".to_string(),
        name: Some("jacket".to_string()),
        data: EncodedImage::normalize("cGl4ZWxz"),
        z_index: 7.5,
        size: ItemSize { width: 50.0, height: 60.0 },
        placement: Placement { x: 10.0, y: 20.0, rotation: 0.3, scale: 2.0 },
    };

    let item = saved.clone().into_item();
    assert_eq!(item.id, "b");
    assert_eq!(item.name.as_deref(), Some("jacket"));
    assert_eq!(item.z_index, 7.5);
    assert_eq!(item.transform.snapshot(), saved.placement);
}

#[test]
fn saved_round_trip_preserves_everything() {
    let item = make_item("c", 3.0);
    item.transform.set_rotation(-0.5);

    let back = item.to_saved().into_item();
    assert_eq!(back.id, item.id);
    assert_eq!(back.size, item.size);
    assert_eq!(back.z_index, item.z_index);
    assert_eq!(back.transform.snapshot(), item.transform.snapshot());
}

// =============================================================
// SavedItem serde
// =============================================================

#[test]
fn saved_item_serde_roundtrip() {
    let saved = make_item("d", 1.0).to_saved();
    let json = serde_json::to_string(&saved).unwrap();
    let back: SavedItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, saved);
}

#[test]
fn saved_item_without_placement_defaults_to_identity() {
    // Records written before transforms were persisted carry no placement.
    let json = r#"{
        "id": "legacy",
        "data": "data:image/png;base64,cGl4ZWxz",
        "z_index": 0.0,
        "size": { "width": 10.0, "height": 10.0 }
    }"#;
    let saved: SavedItem = serde_json::from_str(json).unwrap();
    assert_eq!(saved.placement, Placement::default());
    assert_eq!(saved.name, None);
}
