#![allow(clippy::float_cmp)]

use super::*;
use crate::item::ItemSize;
use crate::store::MemoryStore;
use crate::transform::Placement;

fn make_saved(id: &str, z: f64) -> SavedItem {
    SavedItem {
        id: id.to_string(),
        name: None,
        data: EncodedImage::normalize("cGl4ZWxz"),
        z_index: z,
        size: ItemSize { width: 80.0, height: 90.0 },
        placement: Placement { x: 1.0, y: 2.0, rotation: 0.0, scale: 1.0 },
    }
}

fn composite() -> EncodedImage {
    EncodedImage::normalize("ZmxhdHRlbmVk")
}

// =============================================================
// Capture from a session
// =============================================================

#[test]
fn from_session_captures_entries_in_insertion_order() {
    let mut session = CanvasSession::new(300.0, 500.0);
    session.add_saved_items(&[make_saved("a", 1.0), make_saved("b", 0.0)]).unwrap();

    let outfit = Outfit::from_session(&session, Some("friday".to_string()), composite());
    assert_eq!(outfit.name.as_deref(), Some("friday"));
    assert!(!outfit.id.is_empty());
    let ids: Vec<&str> = outfit.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn outfit_entries_reconstruct_the_canvas() {
    let mut session = CanvasSession::new(300.0, 500.0);
    session.add_saved_items(&[make_saved("a", 2.0), make_saved("b", 0.0)]).unwrap();
    let outfit = Outfit::from_session(&session, None, composite());

    let mut reopened = CanvasSession::new(300.0, 500.0);
    reopened.add_saved_items(&outfit.entries).unwrap();
    assert_eq!(reopened.item("a").unwrap().z_index, 2.0);
    assert_eq!(reopened.item("b").unwrap().z_index, 0.0);
}

// =============================================================
// Store round trips
// =============================================================

#[test]
fn absent_store_loads_empty() {
    let store = MemoryStore::new();
    assert!(load_outfits(&store).unwrap().is_empty());
}

#[test]
fn outfits_round_trip_through_the_store() {
    let store = MemoryStore::new();
    let outfit = Outfit {
        id: "o1".to_string(),
        name: Some("friday".to_string()),
        image: composite(),
        entries: vec![make_saved("a", 0.0)],
    };
    save_outfits(&store, std::slice::from_ref(&outfit)).unwrap();

    let loaded = load_outfits(&store).unwrap();
    assert_eq!(loaded, vec![outfit]);
}

#[test]
fn malformed_store_degrades_to_empty() {
    let store = MemoryStore::new();
    store.set(OUTFIT_STORE_KEY, "[[broken".to_string()).unwrap();
    assert!(load_outfits(&store).unwrap().is_empty());
}

#[test]
fn save_overwrites_the_whole_list() {
    let store = MemoryStore::new();
    let first = Outfit { id: "o1".to_string(), name: None, image: composite(), entries: vec![] };
    let second = Outfit { id: "o2".to_string(), name: None, image: composite(), entries: vec![] };
    save_outfits(&store, &[first, second.clone()]).unwrap();
    save_outfits(&store, std::slice::from_ref(&second)).unwrap();

    let loaded = load_outfits(&store).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "o2");
}
