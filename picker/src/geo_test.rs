#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Coordinate
// =============================================================

#[test]
fn coordinate_accepts_range_bounds() {
    assert!(Coordinate::new(90.0, 180.0).is_ok());
    assert!(Coordinate::new(-90.0, -180.0).is_ok());
    assert!(Coordinate::new(0.0, 0.0).is_ok());
}

#[test]
fn coordinate_rejects_out_of_range_latitude() {
    let err = Coordinate::new(90.000_001, 0.0).unwrap_err();
    assert!(matches!(err, CoordinateError::Range { .. }));
}

#[test]
fn coordinate_rejects_out_of_range_longitude() {
    let err = Coordinate::new(0.0, -180.5).unwrap_err();
    assert!(matches!(err, CoordinateError::Range { .. }));
}

#[test]
fn coordinate_rejects_nan_and_infinity() {
    assert_eq!(Coordinate::new(f64::NAN, 0.0).unwrap_err(), CoordinateError::Numeric);
    assert_eq!(Coordinate::new(0.0, f64::INFINITY).unwrap_err(), CoordinateError::Numeric);
}

#[test]
fn coordinate_serializes_as_lat_lng() {
    let c = Coordinate::new(40.7128, -74.006).unwrap();
    let json = serde_json::to_value(c).unwrap();
    assert_eq!(json, serde_json::json!({ "lat": 40.7128, "lng": -74.006 }));
}

#[test]
fn coordinate_deserialize_validates_range() {
    let ok: Coordinate = serde_json::from_str(r#"{"lat": 1.5, "lng": 2.5}"#).unwrap();
    assert_eq!(ok.latitude(), 1.5);
    let bad = serde_json::from_str::<Coordinate>(r#"{"lat": 91.0, "lng": 0.0}"#);
    assert!(bad.is_err());
}

// =============================================================
// Rounding
// =============================================================

#[test]
fn round_keeps_six_decimals() {
    assert_eq!(round_to_precision(40.416_775_49), 40.416_775);
    assert_eq!(round_to_precision(-3.703_789_6), -3.703_79);
}

#[test]
fn round_is_idempotent() {
    for v in [40.416_775_49, -3.703_789_6, 0.123_456_5, 179.999_999_9, -89.000_000_4] {
        let once = round_to_precision(v);
        assert_eq!(round_to_precision(once), once);
    }
}

#[test]
fn rounded_coordinate_stays_in_range() {
    let c = Coordinate::new(89.999_999_9, -179.999_999_9).unwrap().rounded();
    assert_eq!(c.latitude(), 90.0);
    assert_eq!(c.longitude(), -180.0);
}

// =============================================================
// Text parsing
// =============================================================

#[test]
fn parse_valid_text() {
    let c = parse_coordinate_text("40.416775, -3.703790").unwrap();
    assert_eq!(c.latitude(), 40.416_775);
    assert_eq!(c.longitude(), -3.703_79);
}

#[test]
fn parse_tolerates_surrounding_whitespace() {
    let c = parse_coordinate_text("  10 ,20  ").unwrap();
    assert_eq!((c.latitude(), c.longitude()), (10.0, 20.0));
}

#[test]
fn parse_single_part_is_format_error() {
    assert_eq!(parse_coordinate_text("invalid").unwrap_err(), CoordinateError::Format);
    assert_eq!(parse_coordinate_text("").unwrap_err(), CoordinateError::Format);
}

#[test]
fn parse_three_parts_is_format_error() {
    assert_eq!(parse_coordinate_text("1, 2, 3").unwrap_err(), CoordinateError::Format);
}

#[test]
fn parse_non_numeric_is_numeric_error() {
    assert_eq!(parse_coordinate_text("abc, 10").unwrap_err(), CoordinateError::Numeric);
    assert_eq!(parse_coordinate_text("10, ").unwrap_err(), CoordinateError::Numeric);
    assert_eq!(parse_coordinate_text("NaN, 10").unwrap_err(), CoordinateError::Numeric);
    assert_eq!(parse_coordinate_text("inf, 10").unwrap_err(), CoordinateError::Numeric);
}

#[test]
fn parse_out_of_range_is_range_error() {
    let err = parse_coordinate_text("95.0, 200.0").unwrap_err();
    assert_eq!(err, CoordinateError::Range { latitude: 95.0, longitude: 200.0 });
}

#[test]
fn parse_numeric_check_precedes_range_check() {
    assert_eq!(parse_coordinate_text("95.0, nope").unwrap_err(), CoordinateError::Numeric);
}

// =============================================================
// Raw host values
// =============================================================

#[test]
fn raw_number_passes_through() {
    assert_eq!(RawCoordinate::from(48.8566).to_degrees(), Some(48.8566));
}

#[test]
fn raw_numeric_text_is_parsed() {
    assert_eq!(RawCoordinate::from(" 2.3522 ").to_degrees(), Some(2.3522));
}

#[test]
fn raw_blank_text_means_no_value() {
    assert_eq!(RawCoordinate::from("").to_degrees(), None);
    assert_eq!(RawCoordinate::from("   ").to_degrees(), None);
}

#[test]
fn raw_garbage_text_means_no_value() {
    assert_eq!(RawCoordinate::from("north").to_degrees(), None);
}

#[test]
fn raw_deserializes_from_number_or_string() {
    let n: RawCoordinate = serde_json::from_str("1.25").unwrap();
    let s: RawCoordinate = serde_json::from_str("\"1.25\"").unwrap();
    assert_eq!(n.to_degrees(), Some(1.25));
    assert_eq!(s.to_degrees(), Some(1.25));
}

#[test]
fn coordinate_from_raw_requires_both() {
    let lat = RawCoordinate::from(1.0);
    assert!(coordinate_from_raw(Some(&lat), None).is_none());
    assert!(coordinate_from_raw(None, Some(&lat)).is_none());
    assert!(coordinate_from_raw(Some(&lat), Some(&RawCoordinate::from(""))).is_none());
}

#[test]
fn coordinate_from_raw_rejects_out_of_range() {
    let lat = RawCoordinate::from(120.0);
    let lng = RawCoordinate::from(0.0);
    assert!(coordinate_from_raw(Some(&lat), Some(&lng)).is_none());
}

#[test]
fn coordinate_from_raw_mixed_kinds() {
    let lat = RawCoordinate::from("48.8566");
    let lng = RawCoordinate::from(2.3522);
    let c = coordinate_from_raw(Some(&lat), Some(&lng)).unwrap();
    assert_eq!((c.latitude(), c.longitude()), (48.8566, 2.3522));
}
