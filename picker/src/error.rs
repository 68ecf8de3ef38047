//! Coordinate validation errors.
//!
//! All variants are local validation failures. The model records them on the
//! input buffer as a field-scoped message; none of them is ever fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Name of the input field validation errors are attached to.
pub const COORDINATE_INPUT_FIELD: &str = "coordinate_input";

/// Why a coordinate was rejected.
///
/// The `Display` text is the message shown to the user next to the
/// coordinate input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// The text did not split into exactly two comma-separated parts.
    #[error("Formato inválido. Usa: latitud, longitud")]
    Format,
    /// One or both parts are not finite floating-point numbers.
    #[error("Las coordenadas deben ser números válidos")]
    Numeric,
    /// The parsed values fall outside [-90, 90] / [-180, 180].
    #[error("Coordenadas fuera de rango válido")]
    Range {
        /// Latitude as parsed.
        latitude: f64,
        /// Longitude as parsed.
        longitude: f64,
    },
}

/// A validation message bound to an input field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Field the message belongs to.
    pub field: &'static str,
    /// The underlying validation failure.
    pub error: CoordinateError,
}

impl FieldError {
    /// Attach `error` to the coordinate input field.
    #[must_use]
    pub fn coordinate_input(error: CoordinateError) -> Self {
        Self { field: COORDINATE_INPUT_FIELD, error }
    }

    /// Human-readable message for display.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}
