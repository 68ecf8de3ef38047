#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn labeled(lat: f64, lng: f64, label: &str) -> Marker {
    Marker::new(lat, lng).unwrap().with_label(label)
}

fn options(value: serde_json::Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

// =============================================================
// Marker
// =============================================================

#[test]
fn new_marker_is_bare() {
    let m = Marker::new(1.0, 2.0).unwrap();
    assert_eq!(m.latitude(), 1.0);
    assert_eq!(m.longitude(), 2.0);
    assert!(m.label().is_none());
    assert!(m.tooltip().is_none());
    assert!(m.icon().is_none());
    assert!(m.icon_color().is_none());
    assert!(m.options().is_empty());
    assert!(m.metadata().is_empty());
}

#[test]
fn new_marker_rejects_invalid_position() {
    assert!(Marker::new(100.0, 0.0).is_err());
}

#[test]
fn with_methods_return_new_values() {
    let base = Marker::new(1.0, 2.0).unwrap();
    let styled = base.clone().with_label("A").with_icon("pin");
    assert!(base.label().is_none());
    assert_eq!(styled.label(), Some("A"));
    assert_eq!(styled.icon(), Some("pin"));
}

#[test]
fn with_coordinate_preserves_every_attribute() {
    let original = Marker::new(1.0, 2.0)
        .unwrap()
        .with_label("X")
        .with_tooltip("Y")
        .with_icon("Z")
        .with_icon_color("red")
        .with_options(options(json!({ "draggable": true })))
        .with_metadata(options(json!({ "id": 7 })));

    let moved = original.clone().with_coordinate(Coordinate::new(10.0, 20.0).unwrap());

    assert_eq!(moved.latitude(), 10.0);
    assert_eq!(moved.longitude(), 20.0);
    assert_eq!(moved.label(), original.label());
    assert_eq!(moved.tooltip(), original.tooltip());
    assert_eq!(moved.icon(), original.icon());
    assert_eq!(moved.icon_color(), original.icon_color());
    assert_eq!(moved.options(), original.options());
    assert_eq!(moved.metadata(), original.metadata());
}

#[test]
fn equality_is_structural() {
    assert_eq!(labeled(1.0, 1.0, "A"), labeled(1.0, 1.0, "A"));
    assert_ne!(labeled(1.0, 1.0, "A"), labeled(1.0, 1.0, "B"));
    assert_ne!(labeled(1.0, 1.0, "A"), labeled(1.0, 1.5, "A"));
}

#[test]
fn render_uses_wire_keys_and_omits_metadata() {
    let m = Marker::new(40.7128, -74.006)
        .unwrap()
        .with_label("NYC")
        .with_tooltip("New York City")
        .with_icon("custom-icon")
        .with_icon_color("blue")
        .with_metadata(options(json!({ "secret": 1 })));

    let value = serde_json::to_value(m.render()).unwrap();
    assert_eq!(
        value,
        json!({
            "lat": 40.7128,
            "lng": -74.006,
            "label": "NYC",
            "tooltip": "New York City",
            "icon": "custom-icon",
            "iconColor": "blue",
            "options": {},
        })
    );
}

#[test]
fn bare_record_has_null_attributes() {
    let c = Coordinate::new(3.0, 4.0).unwrap();
    let value = serde_json::to_value(MarkerData::bare(c)).unwrap();
    assert_eq!(
        value,
        json!({
            "lat": 3.0,
            "lng": 4.0,
            "label": null,
            "tooltip": null,
            "icon": null,
            "iconColor": null,
            "options": {},
        })
    );
}

#[test]
fn bare_marker_renders_like_bare_record() {
    let c = Coordinate::new(3.0, 4.0).unwrap();
    assert_eq!(Marker::at(c).render(), MarkerData::bare(c));
}

#[test]
fn marker_deserializes_flat_json() {
    let m: Marker = serde_json::from_value(json!({
        "lat": 51.5074,
        "lng": -0.1278,
        "label": "London",
        "iconColor": "green",
    }))
    .unwrap();
    assert_eq!(m.latitude(), 51.5074);
    assert_eq!(m.label(), Some("London"));
    assert_eq!(m.icon_color(), Some("green"));
    assert!(m.options().is_empty());
}

#[test]
fn marker_deserialize_rejects_out_of_range() {
    let result = serde_json::from_value::<Marker>(json!({ "lat": 95.0, "lng": 0.0 }));
    assert!(result.is_err());
}

// =============================================================
// MarkerCollection
// =============================================================

#[test]
fn collection_starts_empty() {
    let c = MarkerCollection::new();
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
    assert!(c.render().is_empty());
}

#[test]
fn push_appends_in_order() {
    let mut c = MarkerCollection::new();
    c.push(labeled(1.0, 1.0, "First"));
    c.push(labeled(2.0, 2.0, "Second"));
    assert_eq!(c.len(), 2);
    assert_eq!(c.get(0).and_then(Marker::label), Some("First"));
    assert_eq!(c.get(1).and_then(Marker::label), Some("Second"));
}

#[test]
fn remove_shifts_later_indices_down() {
    let mut c: MarkerCollection =
        vec![labeled(1.0, 1.0, "First"), labeled(2.0, 2.0, "Second"), labeled(3.0, 3.0, "Third")].into();

    let removed = c.remove(1).unwrap();
    assert_eq!(removed.label(), Some("Second"));
    assert_eq!(c.len(), 2);
    let labels: Vec<_> = c.iter().filter_map(Marker::label).collect();
    assert_eq!(labels, ["First", "Third"]);
}

#[test]
fn remove_out_of_bounds_is_none() {
    let mut c: MarkerCollection = vec![labeled(1.0, 1.0, "Only")].into();
    assert!(c.remove(5).is_none());
    assert_eq!(c.len(), 1);
}

#[test]
fn render_preserves_order() {
    let c: MarkerCollection = [labeled(1.0, 1.0, "A"), labeled(2.0, 2.0, "B")].into_iter().collect();
    let data = c.render();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].label.as_deref(), Some("A"));
    assert_eq!(data[1].lat, 2.0);
}

#[test]
fn collection_serializes_as_array() {
    let c: MarkerCollection = vec![labeled(1.0, 2.0, "A")].into();
    let value = serde_json::to_value(&c).unwrap();
    assert!(value.is_array());
    let back: MarkerCollection = serde_json::from_value(value).unwrap();
    assert_eq!(back, c);
}
