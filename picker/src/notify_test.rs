use super::*;

#[test]
fn serializes_with_event_tag() {
    let n = Notification::fly_to_requested(Coordinate::new(40.416_775, -3.703_79).unwrap());
    let value = serde_json::to_value(n).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "event": "fly-to-requested", "latitude": 40.416_775, "longitude": -3.703_79 })
    );
}

#[test]
fn name_matches_serialized_tag() {
    for n in [
        Notification::CoordinatesUpdated { latitude: 1.0, longitude: 2.0 },
        Notification::FlyToRequested { latitude: 1.0, longitude: 2.0 },
    ] {
        let value = serde_json::to_value(n).unwrap();
        assert_eq!(value["event"], n.name());
    }
}
