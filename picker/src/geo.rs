//! Geographic primitives: validated coordinates, rounding, and raw-value parsing.
//!
//! A [`Coordinate`] is never partially valid: both range checks pass or the
//! value does not exist. Everything that arrives from outside the core (host
//! parameters, typed text) is normalized here before it touches model state.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{COORDINATE_SCALE, MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::CoordinateError;

/// Plain latitude/longitude pair used on the wire. Not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A validated WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng", into = "LatLng")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::Numeric`] for NaN or infinite inputs and
    /// [`CoordinateError::Range`] when either value lies outside its range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::Numeric);
        }
        if !in_range(latitude, longitude) {
            return Err(CoordinateError::Range { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }

    #[must_use]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// This coordinate with both components rounded to six decimals.
    ///
    /// Range bounds are whole degrees, so rounding never leaves the valid range.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self { latitude: round_to_precision(self.latitude), longitude: round_to_precision(self.longitude) }
    }
}

impl TryFrom<LatLng> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: LatLng) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}

impl From<Coordinate> for LatLng {
    fn from(value: Coordinate) -> Self {
        Self { lat: value.latitude, lng: value.longitude }
    }
}

/// Round a degree value to six decimal places, half away from zero.
///
/// Idempotent: rounding an already-rounded value returns it unchanged.
#[must_use]
pub fn round_to_precision(value: f64) -> f64 {
    (value * COORDINATE_SCALE).round() / COORDINATE_SCALE
}

fn in_range(latitude: f64, longitude: f64) -> bool {
    (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// Parse user-typed `"<lat>, <lng>"` text into a coordinate.
///
/// Checks run in order: shape (exactly two comma-separated parts), numeric
/// parse of both parts, then range. The result is not rounded.
///
/// # Errors
///
/// Returns the first [`CoordinateError`] encountered.
pub fn parse_coordinate_text(text: &str) -> Result<Coordinate, CoordinateError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(CoordinateError::Format);
    };

    let latitude = parse_degrees(lat)?;
    let longitude = parse_degrees(lng)?;

    Coordinate::new(latitude, longitude)
}

fn parse_degrees(part: &str) -> Result<f64, CoordinateError> {
    match part.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CoordinateError::Numeric),
    }
}

/// A latitude or longitude as the host supplies it: a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    /// Normalize to degrees. Blank text means "no value"; so does anything
    /// that does not parse to a finite number.
    #[must_use]
    pub fn to_degrees(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            Self::Number(v) => {
                warn!(value = %v, "ignoring non-finite raw coordinate");
                None
            }
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match parse_degrees(trimmed) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        warn!(raw = %text, "ignoring unparsable raw coordinate");
                        None
                    }
                }
            }
        }
    }
}

impl From<f64> for RawCoordinate {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawCoordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawCoordinate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Combine raw latitude/longitude inputs into a coordinate.
///
/// Returns `None` unless both are present, numeric, and in range.
#[must_use]
pub fn coordinate_from_raw(latitude: Option<&RawCoordinate>, longitude: Option<&RawCoordinate>) -> Option<Coordinate> {
    let lat = latitude.and_then(RawCoordinate::to_degrees)?;
    let lng = longitude.and_then(RawCoordinate::to_degrees)?;
    match Coordinate::new(lat, lng) {
        Ok(coordinate) => Some(coordinate),
        Err(e) => {
            warn!(error = %e, lat, lng, "raw coordinates out of range; starting empty");
            None
        }
    }
}
